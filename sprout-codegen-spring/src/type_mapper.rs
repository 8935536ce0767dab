//! Java type names and import bookkeeping.

use std::collections::BTreeSet;

use sprout_codegen::constraints::TagKind;
use sprout_manifest::FieldType;

/// Fully qualified import needed for a field type, if any.
pub fn field_type_import(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::LocalDate => Some("java.time.LocalDate"),
        FieldType::LocalDateTime => Some("java.time.LocalDateTime"),
        FieldType::BigDecimal => Some("java.math.BigDecimal"),
        FieldType::Long
        | FieldType::Integer
        | FieldType::String
        | FieldType::Boolean
        | FieldType::Double => None,
    }
}

/// Import for a constraint annotation on a JPA entity.
pub fn relational_tag_import(kind: TagKind, name: &str, ee: &str) -> Option<String> {
    match kind {
        TagKind::Identifier | TagKind::AutoGenerated | TagKind::Column => {
            Some(format!("{ee}.persistence.*"))
        }
        TagKind::CreationTimestamp | TagKind::UpdateTimestamp => {
            Some(format!("org.hibernate.annotations.{name}"))
        }
        TagKind::Validation => Some(format!("{ee}.validation.constraints.*")),
        TagKind::Custom => None,
    }
}

/// Import for a constraint annotation on a MongoDB document.
pub fn document_tag_import(kind: TagKind, ee: &str) -> Option<String> {
    match kind {
        TagKind::Identifier => Some("org.springframework.data.annotation.Id".to_string()),
        TagKind::CreationTimestamp => {
            Some("org.springframework.data.annotation.CreatedDate".to_string())
        }
        TagKind::UpdateTimestamp => {
            Some("org.springframework.data.annotation.LastModifiedDate".to_string())
        }
        TagKind::Validation => Some(format!("{ee}.validation.constraints.*")),
        TagKind::AutoGenerated | TagKind::Column | TagKind::Custom => None,
    }
}

/// Sorted, de-duplicated set of Java imports.
///
/// Rendered in two groups: third-party packages first, then `java.*`,
/// separated by a blank line.
#[derive(Debug, Clone, Default)]
pub struct JavaImports {
    imports: BTreeSet<String>,
}

impl JavaImports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: impl Into<String>) -> &mut Self {
        self.imports.insert(import.into());
        self
    }

    pub fn add_field_type(&mut self, field_type: FieldType) -> &mut Self {
        if let Some(import) = field_type_import(field_type) {
            self.add(import);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Import lines, each terminated by a newline.
    pub fn render(&self) -> String {
        let (java, other): (Vec<&String>, Vec<&String>) =
            self.imports.iter().partition(|i| i.starts_with("java."));
        let mut out = String::new();
        for import in &other {
            out.push_str(&format!("import {import};\n"));
        }
        if !other.is_empty() && !java.is_empty() {
            out.push('\n');
        }
        for import in &java {
            out.push_str(&format!("import {import};\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_import() {
        assert_eq!(field_type_import(FieldType::LocalDate), Some("java.time.LocalDate"));
        assert_eq!(field_type_import(FieldType::String), None);
    }

    #[test]
    fn test_tag_imports() {
        assert_eq!(
            relational_tag_import(TagKind::Identifier, "Id", "jakarta").as_deref(),
            Some("jakarta.persistence.*")
        );
        assert_eq!(
            relational_tag_import(TagKind::CreationTimestamp, "CreationTimestamp", "javax")
                .as_deref(),
            Some("org.hibernate.annotations.CreationTimestamp")
        );
        assert_eq!(document_tag_import(TagKind::AutoGenerated, "jakarta"), None);
        assert_eq!(relational_tag_import(TagKind::Custom, "JsonIgnore", "jakarta"), None);
    }

    #[test]
    fn test_render_groups_and_dedups() {
        let mut imports = JavaImports::new();
        imports
            .add("java.util.List")
            .add("jakarta.persistence.*")
            .add("java.util.List")
            .add_field_type(FieldType::BigDecimal);

        assert_eq!(
            imports.render(),
            "import jakarta.persistence.*;\n\nimport java.math.BigDecimal;\nimport java.util.List;\n"
        );
    }
}
