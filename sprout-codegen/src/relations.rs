//! Relationship declarations seen from a single entity.

use serde::Serialize;
use sprout_core::to_camel_case;
use sprout_manifest::{Entity, Relationship, RelationshipType};

use crate::naming::pluralize;

/// Display name used when a relationship references an unknown entity id.
pub const UNKNOWN_ENTITY: &str = "Unknown";

/// Which end of the relationship the declaring entity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The entity is the relationship's source.
    Forward,
    /// The entity is the target; the declaration is synthesized.
    Inverse,
}

/// One relationship field to declare on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDecl {
    /// Cardinality from the declaring entity's side.
    pub kind: RelationshipType,
    /// Field name on the declaring entity.
    pub field_name: String,
    /// Type name of the entity at the other end.
    pub target: String,
    pub direction: Direction,
    /// Owning side's field name, set on inverse declarations.
    pub mapped_by: Option<String>,
}

impl RelationshipDecl {
    /// Java type of the declared field (`List<Order>` or `Order`).
    pub fn field_type(&self) -> String {
        if self.kind.is_collection() {
            format!("List<{}>", self.target)
        } else {
            self.target.clone()
        }
    }
}

/// Compute the declarations to emit on `entity`.
///
/// Forward declarations (entity is the source) come first, then inverse
/// ones (entity is the target), each group in relationship list order. A
/// self-referencing relationship yields one of each.
pub fn resolve_for_entity(
    entity: &Entity,
    relationships: &[Relationship],
    entities: &[Entity],
) -> Vec<RelationshipDecl> {
    let name_of = |id: &str| {
        entities
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| UNKNOWN_ENTITY.to_string())
    };

    let forward = relationships
        .iter()
        .filter(|r| r.source_entity_id == entity.id)
        .map(|r| RelationshipDecl {
            kind: r.kind,
            field_name: r.field_name.clone(),
            target: name_of(&r.target_entity_id),
            direction: Direction::Forward,
            mapped_by: None,
        });

    let inverse = relationships
        .iter()
        .filter(|r| r.target_entity_id == entity.id)
        .map(|r| {
            let kind = r.kind.inverse();
            let source = name_of(&r.source_entity_id);
            let base = to_camel_case(&source);
            let field_name = if kind.is_collection() {
                pluralize(&base)
            } else {
                base
            };
            RelationshipDecl {
                kind,
                field_name,
                target: source,
                direction: Direction::Inverse,
                mapped_by: Some(r.field_name.clone()),
            }
        });

    forward.chain(inverse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::tests::entity;

    fn rel(
        id: &str,
        source: &str,
        target: &str,
        kind: RelationshipType,
        field: &str,
    ) -> Relationship {
        Relationship {
            id: id.into(),
            source_entity_id: source.into(),
            target_entity_id: target.into(),
            kind,
            field_name: field.into(),
        }
    }

    #[test]
    fn test_many_to_one_inverts_to_collection() {
        let entities = vec![entity("a", "Order", vec![]), entity("b", "Customer", vec![])];
        let rels = vec![rel("r1", "a", "b", RelationshipType::ManyToOne, "owner")];

        let on_b = resolve_for_entity(&entities[1], &rels, &entities);
        assert_eq!(on_b.len(), 1);
        assert_eq!(on_b[0].kind, RelationshipType::OneToMany);
        assert_eq!(on_b[0].field_name, "orders");
        assert_eq!(on_b[0].target, "Order");
        assert_eq!(on_b[0].direction, Direction::Inverse);
        assert_eq!(on_b[0].mapped_by.as_deref(), Some("owner"));
        assert_eq!(on_b[0].field_type(), "List<Order>");

        let on_a = resolve_for_entity(&entities[0], &rels, &entities);
        assert_eq!(on_a.len(), 1);
        assert_eq!(on_a[0].kind, RelationshipType::ManyToOne);
        assert_eq!(on_a[0].field_name, "owner");
        assert_eq!(on_a[0].field_type(), "Customer");
    }

    #[test]
    fn test_one_to_one_inverse_is_singular() {
        let entities = vec![entity("u", "User", vec![]), entity("p", "Profile", vec![])];
        let rels = vec![rel("r1", "u", "p", RelationshipType::OneToOne, "profile")];

        let on_p = resolve_for_entity(&entities[1], &rels, &entities);
        assert_eq!(on_p[0].kind, RelationshipType::OneToOne);
        assert_eq!(on_p[0].field_name, "user");
    }

    #[test]
    fn test_forward_before_inverse_in_list_order() {
        let entities = vec![
            entity("a", "Author", vec![]),
            entity("b", "Book", vec![]),
            entity("t", "Tag", vec![]),
        ];
        let rels = vec![
            rel("r1", "a", "b", RelationshipType::OneToMany, "books"),
            rel("r2", "b", "t", RelationshipType::ManyToMany, "tags"),
            rel("r3", "t", "b", RelationshipType::ManyToOne, "featured"),
        ];

        let on_b = resolve_for_entity(&entities[1], &rels, &entities);
        let fields: Vec<_> = on_b.iter().map(|d| d.field_name.as_str()).collect();
        assert_eq!(fields, ["tags", "author", "tags"]);
        assert_eq!(on_b[0].direction, Direction::Forward);
        assert_eq!(on_b[1].kind, RelationshipType::ManyToOne);
        assert_eq!(on_b[2].kind, RelationshipType::OneToMany);
    }

    #[test]
    fn test_dangling_reference_uses_placeholder() {
        let entities = vec![entity("a", "Order", vec![])];
        let rels = vec![
            rel("r1", "a", "missing", RelationshipType::ManyToOne, "owner"),
            rel("r2", "gone", "a", RelationshipType::ManyToMany, "orders"),
        ];

        let decls = resolve_for_entity(&entities[0], &rels, &entities);
        assert_eq!(decls[0].target, UNKNOWN_ENTITY);
        assert_eq!(decls[1].target, UNKNOWN_ENTITY);
        assert_eq!(decls[1].field_name, "unknowns");
    }

    #[test]
    fn test_self_reference_yields_both_sides() {
        let entities = vec![entity("c", "Category", vec![])];
        let rels = vec![rel("r1", "c", "c", RelationshipType::ManyToOne, "parent")];

        let decls = resolve_for_entity(&entities[0], &rels, &entities);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].field_name, "parent");
        assert_eq!(decls[1].field_name, "categorys");
    }

    #[test]
    fn test_unrelated_entity_has_no_declarations() {
        let entities = vec![
            entity("a", "A", vec![]),
            entity("b", "B", vec![]),
            entity("c", "C", vec![]),
        ];
        let rels = vec![rel("r1", "a", "b", RelationshipType::OneToOne, "b")];
        assert!(resolve_for_entity(&entities[2], &rels, &entities).is_empty());
    }
}
