//! Lint for relationships without a field name.

use sprout_manifest::ProjectConfig;

use crate::pipeline::{Diagnostic, Lint};

/// Warns when a relationship's `fieldName` is blank.
pub struct EmptyRelationshipFieldLint;

impl Lint for EmptyRelationshipFieldLint {
    fn name(&self) -> &'static str {
        "empty-relationship-field"
    }

    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (index, rel) in config.relationships.iter().enumerate() {
            if rel.field_name.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("relationship '{}' has no field name", rel.id),
                    )
                    .at(format!("relationships[{index}].fieldName")),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sprout_manifest::{Relationship, RelationshipType};

    use super::*;
    use crate::naming::tests::config;

    #[test]
    fn test_blank_field_name() {
        let mut cfg = config("g", "a");
        cfg.relationships = vec![Relationship {
            id: "r1".into(),
            source_entity_id: "a".into(),
            target_entity_id: "b".into(),
            kind: RelationshipType::OneToOne,
            field_name: "  ".into(),
        }];

        let mut diagnostics = Vec::new();
        EmptyRelationshipFieldLint.check(&cfg, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("relationships[0].fieldName"));
    }
}
