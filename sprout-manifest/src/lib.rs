//! Project configuration model for the sprout generator.
//!
//! The configuration is the wizard's single payload: project identity,
//! database choice, the entity/field/relationship schema and the generation
//! toggles. Documents are validated structurally (every issue, with its
//! path) before being decoded into [`ProjectConfig`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod closed;
mod database;
mod error;
mod options;
mod project;
mod schema;
mod validate;

use std::path::Path;

pub use closed::ClosedSet;
pub use database::{DatabaseConfig, DatabaseOptions, DatabaseType};
pub use error::{Error, Result};
pub use options::{Documentation, GenerationOptions};
pub use project::{Dependency, JavaVersion, PackageType, ProjectConfig, SpringBootVersion};
pub use schema::{Entity, Field, FieldType, Relationship, RelationshipType};
pub use validate::{Issue, IssueCode, ValuePath, Validator, validate_document};

/// Validate an untyped document and decode it into a [`ProjectConfig`].
pub fn from_value(doc: serde_json::Value) -> Result<ProjectConfig> {
    let issues = validate_document(&doc);
    if !issues.is_empty() {
        return Err(Error::invalid(issues));
    }
    serde_json::from_value(doc)
        .map_err(|e| Error::invalid(vec![Issue::new("", IssueCode::InvalidType, e.to_string())]))
}

/// Parse a JSON configuration (uses "config.json" as the filename in reports)
pub fn parse_str(content: &str) -> Result<ProjectConfig> {
    parse_json_with_filename(content, "config.json")
}

/// Parse a JSON configuration with a custom filename for error reporting
pub fn parse_json_with_filename(content: &str, filename: &str) -> Result<ProjectConfig> {
    let doc: serde_json::Value =
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))?;
    from_value(doc)
}

/// Parse a TOML configuration with a custom filename for error reporting
///
/// The TOML document has the same shape as the JSON payload. TOML has no
/// null, so an absent `database.type` is read as "no database".
pub fn parse_toml_with_filename(content: &str, filename: &str) -> Result<ProjectConfig> {
    let value: toml::Value =
        toml::from_str(content).map_err(|e| Error::toml(e, content, filename))?;
    let mut doc = serde_json::to_value(value)
        .map_err(|e| Error::invalid(vec![Issue::new("", IssueCode::InvalidType, e.to_string())]))?;
    if let Some(db) = doc.get_mut("database").and_then(|d| d.as_object_mut()) {
        db.entry("type").or_insert(serde_json::Value::Null);
    }
    from_value(doc)
}

/// Parse a configuration file, choosing the format by extension
pub fn parse_file(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml_with_filename(&content, &filename),
        _ => parse_json_with_filename(&content, &filename),
    }
}
