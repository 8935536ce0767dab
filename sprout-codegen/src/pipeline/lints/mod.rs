//! Built-in configuration lints.

mod dangling_relationship;
mod duplicate_entity_name;
mod empty_relationship_field;
mod missing_identifier;
mod multiple_identifiers;

pub use dangling_relationship::DanglingRelationshipLint;
pub use duplicate_entity_name::DuplicateEntityNameLint;
pub use empty_relationship_field::EmptyRelationshipFieldLint;
pub use missing_identifier::MissingIdentifierLint;
pub use multiple_identifiers::MultipleIdentifiersLint;
