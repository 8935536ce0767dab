//! Entity, field and relationship types.

use serde::{Deserialize, Serialize};

use crate::closed::closed_set;

closed_set! {
    /// Value type of an entity field. Not user-extensible.
    pub enum FieldType {
        Long => "Long",
        Integer => "Integer",
        String => "String",
        Boolean => "Boolean",
        LocalDate => "LocalDate",
        LocalDateTime => "LocalDateTime",
        BigDecimal => "BigDecimal",
        Double => "Double",
    }
}

closed_set! {
    /// Cardinality of a relationship, seen from its source entity.
    pub enum RelationshipType {
        OneToOne => "@OneToOne",
        OneToMany => "@OneToMany",
        ManyToOne => "@ManyToOne",
        ManyToMany => "@ManyToMany",
    }
}

impl RelationshipType {
    /// The cardinality as seen from the other end.
    pub fn inverse(&self) -> Self {
        match self {
            RelationshipType::OneToMany => RelationshipType::ManyToOne,
            RelationshipType::ManyToOne => RelationshipType::OneToMany,
            other => *other,
        }
    }

    /// True when the declaring side holds a collection.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            RelationshipType::OneToMany | RelationshipType::ManyToMany
        )
    }

    /// Annotation name without the leading `@`.
    pub fn annotation(&self) -> &'static str {
        match self {
            RelationshipType::OneToOne => "OneToOne",
            RelationshipType::OneToMany => "OneToMany",
            RelationshipType::ManyToOne => "ManyToOne",
            RelationshipType::ManyToMany => "ManyToMany",
        }
    }
}

/// A typed field of an entity. Declaration order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Opaque generation directives such as `@Id` or `@NotNull`.
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl Field {
    /// Check whether a constraint tag is present (exact match).
    pub fn has_constraint(&self, tag: &str) -> bool {
        self.constraints.iter().any(|c| c == tag)
    }
}

/// A user-defined record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<Field>,
}

impl Entity {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A directed association from `source_entity_id` to `target_entity_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub source_entity_id: String,
    pub target_entity_id: String,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    pub field_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClosedSet;

    #[test]
    fn test_relationship_inverse() {
        assert_eq!(
            RelationshipType::ManyToOne.inverse(),
            RelationshipType::OneToMany
        );
        assert_eq!(
            RelationshipType::OneToMany.inverse(),
            RelationshipType::ManyToOne
        );
        assert_eq!(
            RelationshipType::OneToOne.inverse(),
            RelationshipType::OneToOne
        );
        assert_eq!(
            RelationshipType::ManyToMany.inverse(),
            RelationshipType::ManyToMany
        );
    }

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        for kind in RelationshipType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: RelationshipType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
        for ty in FieldType::ALL {
            let back: FieldType = serde_json::from_value(ty.as_str().into()).unwrap();
            assert_eq!(back, *ty);
        }
    }

    #[test]
    fn test_from_str_lists_choices() {
        let err = "Float".parse::<FieldType>().unwrap_err();
        assert!(err.contains("Long, Integer, String"));
        assert_eq!("@ManyToOne".parse(), Ok(RelationshipType::ManyToOne));
    }

    #[test]
    fn test_field_constraints() {
        let field = Field {
            id: "f1".into(),
            name: "id".into(),
            field_type: FieldType::Long,
            constraints: vec!["@Id".into(), "@GeneratedValue".into()],
        };
        assert!(field.has_constraint("@Id"));
        assert!(!field.has_constraint("@NotNull"));
    }
}
