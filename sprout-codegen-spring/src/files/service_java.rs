use sprout_codegen::CodeBuilder;
use sprout_core::GeneratedFile;

use super::push_header;
use crate::{EntityContext, JavaImports, ProjectContext};

/// Service layer of one entity (`service/<Name>Service.java`).
pub struct ServiceJava<'a> {
    project: &'a ProjectContext<'a>,
    entity: &'a EntityContext<'a>,
}

impl<'a> ServiceJava<'a> {
    pub fn new(project: &'a ProjectContext<'a>, entity: &'a EntityContext<'a>) -> Self {
        Self { project, entity }
    }
}

impl GeneratedFile for ServiceJava<'_> {
    fn path(&self) -> String {
        format!(
            "{}/{}Service.java",
            self.project.layer_dir("service"),
            self.entity.name()
        )
    }

    fn render(&self) -> String {
        let name = self.entity.name();
        let var = &self.entity.variable;
        let repository = format!("{var}Repository");
        let id_type = self.entity.id_type;

        let mut imports = JavaImports::new();
        imports
            .add(format!("{}.{name}", self.project.layer_package("entity")))
            .add(format!("{}.{name}Repository", self.project.layer_package("repository")))
            .add("org.springframework.stereotype.Service")
            .add("java.util.List")
            .add("java.util.Optional")
            .add_field_type(id_type);
        if self.project.lombok {
            imports.add("lombok.RequiredArgsConstructor");
        }

        let mut builder = CodeBuilder::java();
        push_header(&mut builder, &self.project.layer_package("service"), &imports);
        builder.push_line("@Service");
        if self.project.lombok {
            builder.push_line("@RequiredArgsConstructor");
        }
        builder.push_block(&format!("public class {name}Service {{"), "}", |b| {
            b.push_blank();
            b.push_line(&format!("private final {name}Repository {repository};"));

            if !self.project.lombok {
                b.push_blank();
                b.push_block(
                    &format!("public {name}Service({name}Repository {repository}) {{"),
                    "}",
                    |b| {
                        b.push_line(&format!("this.{repository} = {repository};"));
                    },
                );
            }

            b.push_blank();
            b.push_block(&format!("public List<{name}> findAll() {{"), "}", |b| {
                b.push_line(&format!("return {repository}.findAll();"));
            });

            b.push_blank();
            b.push_block(
                &format!("public Optional<{name}> findById({id_type} id) {{"),
                "}",
                |b| {
                    b.push_line(&format!("return {repository}.findById(id);"));
                },
            );

            b.push_blank();
            b.push_block(&format!("public {name} save({name} {var}) {{"), "}", |b| {
                b.push_line(&format!("return {repository}.save({var});"));
            });

            b.push_blank();
            b.push_block(&format!("public void deleteById({id_type} id) {{"), "}", |b| {
                b.push_line(&format!("{repository}.deleteById(id);"));
            });
        });
        builder.build()
    }
}
