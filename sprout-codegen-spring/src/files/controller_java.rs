use sprout_codegen::{
    CodeBuilder,
    constraints::{TagKind, has_kind},
};
use sprout_core::GeneratedFile;
use sprout_manifest::Documentation;

use super::push_header;
use crate::{EntityContext, JavaImports, ProjectContext};

/// REST controller of one entity (`controller/<Name>Controller.java`).
///
/// Serves `/api/<storage name>` with list, get, create, update and delete.
pub struct ControllerJava<'a> {
    project: &'a ProjectContext<'a>,
    entity: &'a EntityContext<'a>,
}

impl<'a> ControllerJava<'a> {
    pub fn new(project: &'a ProjectContext<'a>, entity: &'a EntityContext<'a>) -> Self {
        Self { project, entity }
    }

    fn validated(&self) -> bool {
        self.entity
            .entity
            .fields
            .iter()
            .any(|f| has_kind(f, TagKind::Validation))
    }

    fn imports(&self) -> JavaImports {
        let name = self.entity.name();
        let mut imports = JavaImports::new();
        imports
            .add(format!("{}.{name}", self.project.layer_package("entity")))
            .add(format!("{}.{name}Service", self.project.layer_package("service")))
            .add("org.springframework.http.ResponseEntity")
            .add("org.springframework.web.bind.annotation.*")
            .add("java.util.List")
            .add_field_type(self.entity.id_type);
        if self.validated() {
            imports.add(format!("{}.validation.Valid", self.project.ee_namespace));
        }
        match self.project.config.generation_options.documentation {
            Documentation::Springdoc => {
                imports.add("io.swagger.v3.oas.annotations.tags.Tag");
            }
            Documentation::Swagger => {
                imports.add("io.swagger.annotations.Api");
            }
            Documentation::None => {}
        }
        if self.project.lombok {
            imports.add("lombok.RequiredArgsConstructor");
        }
        imports
    }
}

impl GeneratedFile for ControllerJava<'_> {
    fn path(&self) -> String {
        format!(
            "{}/{}Controller.java",
            self.project.layer_dir("controller"),
            self.entity.name()
        )
    }

    fn render(&self) -> String {
        let name = self.entity.name();
        let var = &self.entity.variable;
        let service = format!("{var}Service");
        let id_type = self.entity.id_type;
        let body = if self.validated() {
            format!("@Valid @RequestBody {name} {var}")
        } else {
            format!("@RequestBody {name} {var}")
        };

        let mut builder = CodeBuilder::java();
        push_header(&mut builder, &self.project.layer_package("controller"), &self.imports());

        builder.push_line("@RestController");
        builder.push_line(&format!(
            "@RequestMapping(\"/api/{}\")",
            self.entity.storage_name
        ));
        match self.project.config.generation_options.documentation {
            Documentation::Springdoc => {
                builder.push_line(&format!("@Tag(name = \"{name}\")"));
            }
            Documentation::Swagger => {
                builder.push_line(&format!("@Api(tags = \"{name}\")"));
            }
            Documentation::None => {}
        }
        if self.project.lombok {
            builder.push_line("@RequiredArgsConstructor");
        }

        builder.push_block(&format!("public class {name}Controller {{"), "}", |b| {
            b.push_blank();
            b.push_line(&format!("private final {name}Service {service};"));

            if !self.project.lombok {
                b.push_blank();
                b.push_block(
                    &format!("public {name}Controller({name}Service {service}) {{"),
                    "}",
                    |b| {
                        b.push_line(&format!("this.{service} = {service};"));
                    },
                );
            }

            b.push_blank();
            b.push_line("@GetMapping");
            b.push_block(&format!("public List<{name}> getAll() {{"), "}", |b| {
                b.push_line(&format!("return {service}.findAll();"));
            });

            b.push_blank();
            b.push_line("@GetMapping(\"/{id}\")");
            b.push_block(
                &format!("public ResponseEntity<{name}> getById(@PathVariable {id_type} id) {{"),
                "}",
                |b| {
                    b.push_line(&format!("return {service}.findById(id)"));
                    b.push_indent();
                    b.push_line(".map(ResponseEntity::ok)");
                    b.push_line(".orElse(ResponseEntity.notFound().build());");
                    b.push_dedent();
                },
            );

            b.push_blank();
            b.push_line("@PostMapping");
            b.push_block(&format!("public {name} create({body}) {{"), "}", |b| {
                b.push_line(&format!("return {service}.save({var});"));
            });

            b.push_blank();
            b.push_line("@PutMapping(\"/{id}\")");
            let update = format!("update(@PathVariable {id_type} id, {body})");
            b.push_block(&format!("public ResponseEntity<{name}> {update} {{"), "}", |b| {
                b.push_block(&format!("if ({service}.findById(id).isEmpty()) {{"), "}", |b| {
                    b.push_line("return ResponseEntity.notFound().build();");
                });
                if self.entity.has_id_field() {
                    b.push_line(&format!("{var}.setId(id);"));
                }
                b.push_line(&format!("return ResponseEntity.ok({service}.save({var}));"));
            });

            b.push_blank();
            b.push_line("@DeleteMapping(\"/{id}\")");
            b.push_block(
                &format!("public ResponseEntity<Void> delete(@PathVariable {id_type} id) {{"),
                "}",
                |b| {
                    b.push_line(&format!("{service}.deleteById(id);"));
                    b.push_line("return ResponseEntity.noContent().build();");
                },
            );
        });
        builder.build()
    }
}
