//! Lint for relationships referencing unknown entities.

use sprout_manifest::ProjectConfig;

use crate::{
    pipeline::{Diagnostic, Lint},
    relations::UNKNOWN_ENTITY,
};

/// Warns about relationship ends that match no entity id.
pub struct DanglingRelationshipLint;

impl Lint for DanglingRelationshipLint {
    fn name(&self) -> &'static str {
        "dangling-relationship"
    }

    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (index, rel) in config.relationships.iter().enumerate() {
            for (key, id) in [
                ("sourceEntityId", &rel.source_entity_id),
                ("targetEntityId", &rel.target_entity_id),
            ] {
                if config.entity(id).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "relationship '{}' references unknown entity '{}'; rendered as '{}'",
                                rel.id, id, UNKNOWN_ENTITY
                            ),
                        )
                        .at(format!("relationships[{index}].{key}")),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sprout_manifest::{Relationship, RelationshipType};

    use super::*;
    use crate::naming::tests::{config, entity};

    #[test]
    fn test_dangling_target() {
        let mut cfg = config("g", "a");
        cfg.entities = vec![entity("e1", "Order", vec![])];
        cfg.relationships = vec![Relationship {
            id: "r1".into(),
            source_entity_id: "e1".into(),
            target_entity_id: "e9".into(),
            kind: RelationshipType::ManyToOne,
            field_name: "customer".into(),
        }];

        let mut diagnostics = Vec::new();
        DanglingRelationshipLint.check(&cfg, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("relationships[0].targetEntityId")
        );
        assert!(diagnostics[0].message.contains("'e9'"));
    }
}
