use sprout_codegen::CodeBuilder;
use sprout_core::GeneratedFile;

use super::push_header;
use crate::{EntityContext, JavaImports, ProjectContext};

/// Spring Data repository of one entity (`repository/<Name>Repository.java`).
pub struct RepositoryJava<'a> {
    project: &'a ProjectContext<'a>,
    entity: &'a EntityContext<'a>,
}

impl<'a> RepositoryJava<'a> {
    pub fn new(project: &'a ProjectContext<'a>, entity: &'a EntityContext<'a>) -> Self {
        Self { project, entity }
    }

    fn base_interface(&self) -> (&'static str, &'static str) {
        if self.project.document_store {
            (
                "org.springframework.data.mongodb.repository.MongoRepository",
                "MongoRepository",
            )
        } else {
            (
                "org.springframework.data.jpa.repository.JpaRepository",
                "JpaRepository",
            )
        }
    }
}

impl GeneratedFile for RepositoryJava<'_> {
    fn path(&self) -> String {
        format!(
            "{}/{}Repository.java",
            self.project.layer_dir("repository"),
            self.entity.name()
        )
    }

    fn render(&self) -> String {
        let name = self.entity.name();
        let (base_import, base) = self.base_interface();

        let mut imports = JavaImports::new();
        imports
            .add(format!("{}.{}", self.project.layer_package("entity"), name))
            .add(base_import)
            .add("org.springframework.stereotype.Repository")
            .add_field_type(self.entity.id_type);

        let mut builder = CodeBuilder::java();
        push_header(&mut builder, &self.project.layer_package("repository"), &imports);
        builder.push_line("@Repository");
        builder.push_block(
            &format!(
                "public interface {name}Repository extends {base}<{name}, {}> {{",
                self.entity.id_type
            ),
            "}",
            |_| {},
        );
        builder.build()
    }
}
