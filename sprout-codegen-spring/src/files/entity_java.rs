use sprout_codegen::{
    CodeBuilder, Direction, RelationshipDecl,
    constraints::{Constraint, TagKind, parse_all},
};
use sprout_core::{GeneratedFile, to_camel_case, to_snake_case};
use sprout_manifest::{ClosedSet, Field, RelationshipType};

use super::{push_accessors, push_header};
use crate::{
    EntityContext, JavaImports, ProjectContext,
    type_mapper::{document_tag_import, relational_tag_import},
};

/// The persistent type of one entity (`entity/<Name>.java`).
///
/// Relational databases get a JPA `@Entity`; MongoDB gets a `@Document`.
pub struct EntityJava<'a> {
    project: &'a ProjectContext<'a>,
    entity: &'a EntityContext<'a>,
}

impl<'a> EntityJava<'a> {
    pub fn new(project: &'a ProjectContext<'a>, entity: &'a EntityContext<'a>) -> Self {
        Self { project, entity }
    }

    fn imports(&self) -> JavaImports {
        let ee = self.project.ee_namespace;
        let mut imports = JavaImports::new();

        if self.project.document_store {
            imports.add("org.springframework.data.mongodb.core.mapping.Document");
            if self.entity.audit_timestamps {
                imports.add("org.springframework.data.annotation.CreatedDate");
                imports.add("org.springframework.data.annotation.LastModifiedDate");
            }
            if !self.entity.relationships.is_empty() {
                imports.add("org.springframework.data.mongodb.core.mapping.DBRef");
            }
        } else {
            imports.add(format!("{ee}.persistence.*"));
            if self.entity.audit_timestamps {
                imports.add("org.hibernate.annotations.CreationTimestamp");
                imports.add("org.hibernate.annotations.UpdateTimestamp");
            }
        }

        for field in &self.entity.entity.fields {
            imports.add_field_type(field.field_type);
            for constraint in parse_all(field) {
                let import = if self.project.document_store {
                    document_tag_import(constraint.kind(), ee)
                } else {
                    relational_tag_import(constraint.kind(), constraint.name(), ee)
                };
                if let Some(import) = import {
                    imports.add(import);
                }
            }
        }

        if self.entity.relationships.iter().any(|r| r.kind.is_collection()) {
            imports.add("java.util.ArrayList");
            imports.add("java.util.List");
        }

        if self.project.lombok {
            imports.add("lombok.AllArgsConstructor");
            imports.add("lombok.Data");
            imports.add("lombok.NoArgsConstructor");
        }

        imports
    }

    fn class_annotations(&self) -> Vec<String> {
        let mut annotations = if self.project.document_store {
            vec![format!("@Document(collection = \"{}\")", self.entity.storage_name)]
        } else {
            vec![
                "@Entity".to_string(),
                format!("@Table(name = \"{}\")", self.entity.storage_name),
            ]
        };
        if self.project.lombok {
            annotations.extend(
                ["@Data", "@NoArgsConstructor", "@AllArgsConstructor"].map(String::from),
            );
        }
        annotations
    }

    fn field_annotations(&self, field: &Field) -> Vec<String> {
        parse_all(field)
            .iter()
            .filter_map(|c| self.constraint_annotation(c))
            .collect()
    }

    fn constraint_annotation(&self, constraint: &Constraint<'_>) -> Option<String> {
        if self.project.document_store {
            return match constraint.kind() {
                TagKind::Identifier => Some("@Id".to_string()),
                TagKind::CreationTimestamp => Some("@CreatedDate".to_string()),
                TagKind::UpdateTimestamp => Some("@LastModifiedDate".to_string()),
                TagKind::AutoGenerated | TagKind::Column => None,
                TagKind::Validation | TagKind::Custom => Some(constraint.annotation()),
            };
        }
        match constraint.kind() {
            TagKind::AutoGenerated if !constraint.has_arguments() => {
                Some("@GeneratedValue(strategy = GenerationType.IDENTITY)".to_string())
            }
            _ => Some(constraint.annotation()),
        }
    }

    fn relationship_annotations(&self, decl: &RelationshipDecl) -> Vec<String> {
        if self.project.document_store {
            return match decl.direction {
                Direction::Forward => vec!["@DBRef".to_string()],
                Direction::Inverse => vec!["@DBRef(lazy = true)".to_string()],
            };
        }

        let join_column =
            || format!("@JoinColumn(name = \"{}_id\")", to_snake_case(&decl.field_name));
        let mapped_by = decl.mapped_by.as_deref().unwrap_or_default();

        match (decl.direction, decl.kind) {
            (_, RelationshipType::ManyToOne) => vec![
                "@ManyToOne(fetch = FetchType.LAZY)".to_string(),
                join_column(),
            ],
            (Direction::Forward, RelationshipType::OneToOne) => {
                vec!["@OneToOne".to_string(), join_column()]
            }
            (Direction::Forward, RelationshipType::OneToMany) => vec![format!(
                "@OneToMany(mappedBy = \"{}\", cascade = CascadeType.ALL)",
                to_camel_case(self.entity.name())
            )],
            (Direction::Forward, RelationshipType::ManyToMany) => vec![
                "@ManyToMany".to_string(),
                format!(
                    "@JoinTable(name = \"{}_{}\")",
                    to_snake_case(self.entity.name()),
                    to_snake_case(&decl.field_name)
                ),
            ],
            (Direction::Inverse, kind) => {
                vec![format!("@{}(mappedBy = \"{}\")", kind.annotation(), mapped_by)]
            }
        }
    }
}

impl GeneratedFile for EntityJava<'_> {
    fn path(&self) -> String {
        format!(
            "{}/{}.java",
            self.project.layer_dir("entity"),
            self.entity.name()
        )
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        push_header(
            &mut builder,
            &self.project.layer_package("entity"),
            &self.imports(),
        );

        let description = self.entity.entity.description.trim();
        if !description.is_empty() {
            builder.push_javadoc(description);
        }
        builder.push_lines(self.class_annotations().iter().map(String::as_str));

        builder.push_block(
            &format!("public class {} {{", self.entity.name()),
            "}",
            |b| {
                for field in &self.entity.entity.fields {
                    b.push_blank();
                    b.push_lines(self.field_annotations(field).iter().map(String::as_str));
                    b.push_line(&format!("private {} {};", field.field_type, field.name));
                }

                for decl in &self.entity.relationships {
                    b.push_blank();
                    b.push_lines(self.relationship_annotations(decl).iter().map(String::as_str));
                    if decl.kind.is_collection() {
                        b.push_line(&format!(
                            "private {} {} = new ArrayList<>();",
                            decl.field_type(),
                            decl.field_name
                        ));
                    } else {
                        b.push_line(&format!("private {} {};", decl.field_type(), decl.field_name));
                    }
                }

                if !self.project.lombok {
                    for field in &self.entity.entity.fields {
                        push_accessors(b, field.field_type.as_str(), &field.name);
                    }
                    for decl in &self.entity.relationships {
                        push_accessors(b, &decl.field_type(), &decl.field_name);
                    }
                }
            },
        );

        builder.build()
    }
}
