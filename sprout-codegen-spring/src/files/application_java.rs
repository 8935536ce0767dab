use sprout_codegen::{CodeBuilder, naming::has_audit_timestamps};
use sprout_core::GeneratedFile;
use sprout_manifest::{Documentation, PackageType};

use super::push_header;
use crate::{JavaImports, ProjectContext};

/// The application entry point (`<Main>.java`).
pub struct ApplicationJava<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> ApplicationJava<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }

    fn is_war(&self) -> bool {
        self.project.config.package_type == PackageType::War
    }

    fn mongo_auditing(&self) -> bool {
        self.project.document_store && self.project.config.entities.iter().any(has_audit_timestamps)
    }

    fn swagger(&self) -> bool {
        self.project.config.generation_options.documentation == Documentation::Swagger
    }
}

impl GeneratedFile for ApplicationJava<'_> {
    fn path(&self) -> String {
        format!("{}/{}.java", self.project.main_dir(), self.project.main_type)
    }

    fn render(&self) -> String {
        let main = &self.project.main_type;

        let mut imports = JavaImports::new();
        imports
            .add("org.springframework.boot.SpringApplication")
            .add("org.springframework.boot.autoconfigure.SpringBootApplication");
        if self.is_war() {
            imports
                .add("org.springframework.boot.builder.SpringApplicationBuilder")
                .add("org.springframework.boot.web.servlet.support.SpringBootServletInitializer");
        }
        if self.mongo_auditing() {
            imports.add("org.springframework.data.mongodb.config.EnableMongoAuditing");
        }
        if self.swagger() {
            imports.add("springfox.documentation.swagger2.annotations.EnableSwagger2");
        }

        let mut builder = CodeBuilder::java();
        push_header(&mut builder, &self.project.package, &imports);
        builder.push_line("@SpringBootApplication");
        if self.mongo_auditing() {
            builder.push_line("@EnableMongoAuditing");
        }
        if self.swagger() {
            builder.push_line("@EnableSwagger2");
        }

        let header = if self.is_war() {
            format!("public class {main} extends SpringBootServletInitializer {{")
        } else {
            format!("public class {main} {{")
        };
        builder.push_block(&header, "}", |b| {
            b.push_blank();
            b.push_block("public static void main(String[] args) {", "}", |b| {
                b.push_line(&format!("SpringApplication.run({main}.class, args);"));
            });

            if self.is_war() {
                b.push_blank();
                b.push_line("@Override");
                b.push_block(
                    "protected SpringApplicationBuilder configure(SpringApplicationBuilder builder) {",
                    "}",
                    |b| {
                        b.push_line(&format!("return builder.sources({main}.class);"));
                    },
                );
            }
        });
        builder.build()
    }
}
