//! Lint for entities sharing a name.

use std::collections::HashMap;

use sprout_manifest::ProjectConfig;

use crate::pipeline::{Diagnostic, Lint};

/// Warns when two entities share a name; the later one overwrites the
/// earlier one's files.
pub struct DuplicateEntityNameLint;

impl Lint for DuplicateEntityNameLint {
    fn name(&self) -> &'static str {
        "duplicate-entity-name"
    }

    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, entity) in config.entities.iter().enumerate() {
            if let Some(first) = seen.get(entity.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "entity name '{}' is also used by entities[{}]; its files will be overwritten",
                            entity.name, first
                        ),
                    )
                    .at(format!("entities[{index}].name")),
                );
            } else {
                seen.insert(&entity.name, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::tests::{config, entity};

    #[test]
    fn test_duplicate_name() {
        let mut cfg = config("g", "a");
        cfg.entities = vec![
            entity("e1", "Product", vec![]),
            entity("e2", "Order", vec![]),
            entity("e3", "Product", vec![]),
        ];

        let mut diagnostics = Vec::new();
        DuplicateEntityNameLint.check(&cfg, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("entities[2].name"));
        assert!(diagnostics[0].message.contains("entities[0]"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut cfg = config("g", "a");
        cfg.entities = vec![entity("e1", "Product", vec![]), entity("e2", "product", vec![])];

        let mut diagnostics = Vec::new();
        DuplicateEntityNameLint.check(&cfg, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
