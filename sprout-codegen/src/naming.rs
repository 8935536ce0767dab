//! Canonical names derived from a project configuration.
//!
//! Everything here is pure: the same configuration always yields the same
//! names, so the generated tree is stable across runs.

use sprout_core::{to_camel_case, to_pascal_case};
use sprout_manifest::{Entity, FieldType, ProjectConfig};

/// Suffix appended to the artifact name to form the entry-point type.
pub const MAIN_TYPE_SUFFIX: &str = "Application";

/// Field name that marks an entity's identifier.
pub const IDENTIFIER_FIELD: &str = "id";

/// Identifier type used when an entity declares no `id` field.
pub const FALLBACK_IDENTIFIER_TYPE: FieldType = FieldType::Long;

/// Dependency id that turns on Lombok annotations.
pub const LOMBOK_DEPENDENCY: &str = "lombok";

/// Pluralization suffix for collection and table names.
pub const PLURAL_SUFFIX: &str = "s";

/// Join group and artifact identifiers into a Java package name.
///
/// Each segment is lowercased and stripped of characters that cannot appear
/// in a package segment; a segment starting with a digit gets a leading `_`.
/// Empty segments are dropped, so `"com.example"` + `"my-app"` yields
/// `"com.example.myapp"`.
pub fn package_name(config: &ProjectConfig) -> String {
    config
        .group_id
        .split('.')
        .chain(std::iter::once(config.artifact_id.as_str()))
        .filter_map(package_segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn package_segment(raw: &str) -> Option<String> {
    let segment: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .flat_map(|c| c.to_lowercase())
        .collect();
    match segment.chars().next() {
        None => None,
        Some(c) if c.is_ascii_digit() => Some(format!("_{segment}")),
        Some(_) => Some(segment),
    }
}

/// Directory form of [`package_name`] (`com/example/demo`).
pub fn package_path(config: &ProjectConfig) -> String {
    package_name(config).replace('.', "/")
}

/// PascalCase entry-point type name (`demo` -> `DemoApplication`).
pub fn main_type_name(config: &ProjectConfig) -> String {
    let base = to_pascal_case(&config.artifact_id);
    if base.starts_with(|c: char| c.is_ascii_digit()) {
        format!("App{base}{MAIN_TYPE_SUFFIX}")
    } else {
        format!("{base}{MAIN_TYPE_SUFFIX}")
    }
}

/// Variable-style name of an entity (`OrderItem` -> `orderItem`).
pub fn variable_name(entity: &Entity) -> String {
    to_camel_case(&entity.name)
}

/// Append the plural suffix; no linguistic rules are applied.
pub fn pluralize(name: &str) -> String {
    format!("{name}{PLURAL_SUFFIX}")
}

/// Table or collection name of an entity (`Product` -> `products`).
pub fn storage_name(entity: &Entity) -> String {
    pluralize(&variable_name(entity))
}

/// Type of the field named `id`, or [`FALLBACK_IDENTIFIER_TYPE`].
pub fn identifier_type(entity: &Entity) -> FieldType {
    entity
        .field(IDENTIFIER_FIELD)
        .map(|f| f.field_type)
        .unwrap_or(FALLBACK_IDENTIFIER_TYPE)
}

/// Whether Lombok annotations replace hand-written accessors.
pub fn uses_lombok(config: &ProjectConfig) -> bool {
    config.is_selected(LOMBOK_DEPENDENCY) || config.generation_options.use_lombok
}

/// Whether the entity carries `createdAt` or `updatedAt`.
pub fn has_audit_timestamps(entity: &Entity) -> bool {
    entity
        .fields
        .iter()
        .any(|f| f.name == "createdAt" || f.name == "updatedAt")
}
