//! Lint for entities with more than one identifier field.

use sprout_manifest::ProjectConfig;

use crate::{
    constraints::{TagKind, has_kind},
    pipeline::{Diagnostic, Lint},
};

/// Warns when an entity tags several fields `@Id`. Repository and service
/// templates assume at most one.
pub struct MultipleIdentifiersLint;

impl Lint for MultipleIdentifiersLint {
    fn name(&self) -> &'static str {
        "multiple-identifiers"
    }

    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (index, entity) in config.entities.iter().enumerate() {
            let ids: Vec<&str> = entity
                .fields
                .iter()
                .filter(|f| has_kind(f, TagKind::Identifier))
                .map(|f| f.name.as_str())
                .collect();
            if ids.len() > 1 {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "entity '{}' has {} identifier fields ({})",
                            entity.name,
                            ids.len(),
                            ids.join(", ")
                        ),
                    )
                    .at(format!("entities[{index}].fields")),
                );
            }
        }
    }
}
