//! Lint for entities without an `id` field.

use sprout_manifest::ProjectConfig;

use crate::{
    naming::{FALLBACK_IDENTIFIER_TYPE, IDENTIFIER_FIELD},
    pipeline::{Diagnostic, Lint},
};

/// Notes entities whose identifier type falls back to the default.
pub struct MissingIdentifierLint;

impl Lint for MissingIdentifierLint {
    fn name(&self) -> &'static str {
        "missing-identifier"
    }

    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (index, entity) in config.entities.iter().enumerate() {
            if entity.field(IDENTIFIER_FIELD).is_none() {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "entity '{}' has no '{}' field; identifier type defaults to {}",
                            entity.name, IDENTIFIER_FIELD, FALLBACK_IDENTIFIER_TYPE
                        ),
                    )
                    .at(format!("entities[{index}]")),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sprout_manifest::FieldType;

    use super::*;
    use crate::{
        naming::tests::{config, entity, field},
        pipeline::Severity,
    };

    #[test]
    fn test_missing_id() {
        let mut cfg = config("g", "a");
        cfg.entities = vec![
            entity("e1", "Note", vec![field("body", FieldType::String, &[])]),
            entity("e2", "Tag", vec![field("id", FieldType::Long, &["@Id"])]),
        ];

        let mut diagnostics = Vec::new();
        MissingIdentifierLint.check(&cfg, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert!(diagnostics[0].message.contains("defaults to Long"));
    }
}
