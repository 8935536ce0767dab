//! Structural validation of a raw configuration document.
//!
//! Validation walks the untyped JSON value before decoding so that every
//! violation is reported at once, each pinned to the path of the offending
//! value (e.g. `entities[0].fields[1].type`).

use std::{collections::HashSet, fmt};

use miette::Diagnostic;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    ClosedSet, DatabaseType, Documentation, FieldType, JavaVersion, PackageType,
    RelationshipType, SpringBootVersion,
};

/// Kind of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required key is absent.
    Required,
    /// A value has the wrong JSON type.
    InvalidType,
    /// A value is not in its closed set.
    InvalidEnum,
    /// A name that must not be blank is blank.
    Empty,
    /// A value that must be unique is repeated.
    Duplicate,
    /// The document is not well-formed.
    InvalidSyntax,
}

/// One violated constraint, pinned to a path in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, Diagnostic)]
#[error("{path_display}: {message}", path_display = display_path(.path))]
#[diagnostic(code(sprout::schema))]
pub struct Issue {
    /// Dotted path to the offending value; empty for the document root.
    pub path: String,
    pub code: IssueCode,
    pub message: String,
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

impl Issue {
    pub fn new(path: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }
}

/// Path through the document, used to label issues.
///
/// Mirrors how nested structures are descended: each `key`/`index` call
/// returns a new path without touching the parent.
#[derive(Debug, Clone, Default)]
pub struct ValuePath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

impl ValuePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &'static str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key));
        Self { segments }
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects issues while walking a document.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<Issue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    fn push(&mut self, path: &ValuePath, code: IssueCode, message: impl Into<String>) {
        self.issues.push(Issue::new(path.to_string(), code, message));
    }

    fn expected(&mut self, path: &ValuePath, expected: &str, found: &Value) {
        self.push(
            path,
            IssueCode::InvalidType,
            format!("expected {}, received {}", expected, json_type(found)),
        );
    }

    /// Require `value` to be an object.
    pub fn object<'v>(
        &mut self,
        value: &'v Value,
        path: &ValuePath,
    ) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.expected(path, "object", other);
                None
            }
        }
    }

    /// Require `key` to be present in `obj`.
    pub fn required<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) -> Option<&'v Value> {
        match obj.get(key) {
            Some(value) => Some(value),
            None => {
                self.push(&path.key(key), IssueCode::Required, "required field missing");
                None
            }
        }
    }

    /// Require a string at `key`.
    pub fn string<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) -> Option<&'v str> {
        let value = self.required(obj, key, path)?;
        match value {
            Value::String(s) => Some(s),
            other => {
                self.expected(&path.key(key), "string", other);
                None
            }
        }
    }

    /// Require a string at `key` that is not blank.
    pub fn non_empty_string<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) -> Option<&'v str> {
        let s = self.string(obj, key, path)?;
        if s.trim().is_empty() {
            self.push(&path.key(key), IssueCode::Empty, "must not be empty");
            return None;
        }
        Some(s)
    }

    /// Accept an absent key; a present one must be a string.
    pub fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) {
        match obj.get(key) {
            None | Some(Value::String(_)) => {}
            Some(other) => self.expected(&path.key(key), "string", other),
        }
    }

    /// Require a boolean at `key`.
    pub fn boolean(&mut self, obj: &Map<String, Value>, key: &'static str, path: &ValuePath) {
        if let Some(value) = self.required(obj, key, path) {
            if !value.is_boolean() {
                self.expected(&path.key(key), "boolean", value);
            }
        }
    }

    /// Require a string at `key` naming a member of `T`.
    pub fn member<T: ClosedSet>(
        &mut self,
        obj: &Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) {
        if let Some(s) = self.string(obj, key, path) {
            self.check_member::<T>(s, &path.key(key));
        }
    }

    /// Like [`Validator::member`], but `null` is allowed.
    pub fn nullable_member<T: ClosedSet>(
        &mut self,
        obj: &Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) {
        match self.required(obj, key, path) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => self.check_member::<T>(s, &path.key(key)),
            Some(other) => self.expected(&path.key(key), "string or null", other),
        }
    }

    fn check_member<T: ClosedSet>(&mut self, s: &str, path: &ValuePath) {
        if T::from_name(s).is_none() {
            self.push(
                path,
                IssueCode::InvalidEnum,
                format!(
                    "invalid value '{}', expected one of: {}",
                    s,
                    T::names().join(", ")
                ),
            );
        }
    }

    /// Require an array at `key`.
    pub fn array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) -> Option<&'v [Value]> {
        let value = self.required(obj, key, path)?;
        match value {
            Value::Array(items) => Some(items),
            other => {
                self.expected(&path.key(key), "array", other);
                None
            }
        }
    }

    /// Accept an absent key or null; a present one must be a non-negative integer.
    pub fn optional_unsigned(
        &mut self,
        obj: &Map<String, Value>,
        key: &'static str,
        path: &ValuePath,
    ) {
        match obj.get(key) {
            None | Some(Value::Null) => {}
            Some(value) if value.as_u64().is_some_and(|n| n <= u32::MAX as u64) => {}
            Some(other) => self.expected(&path.key(key), "non-negative integer", other),
        }
    }

    /// Record a duplicate of `value` at `path`.
    pub fn duplicate(&mut self, path: &ValuePath, what: &str, value: &str) {
        self.push(
            path,
            IssueCode::Duplicate,
            format!("duplicate {} '{}'", what, value),
        );
    }
}

/// Validate a whole configuration document, returning every issue found.
pub fn validate_document(doc: &Value) -> Vec<Issue> {
    let mut v = Validator::new();
    let root = ValuePath::root();

    let Some(obj) = v.object(doc, &root) else {
        return v.into_issues();
    };

    v.non_empty_string(obj, "groupId", &root);
    v.non_empty_string(obj, "artifactId", &root);
    v.non_empty_string(obj, "name", &root);
    v.optional_string(obj, "description", &root);
    v.member::<JavaVersion>(obj, "javaVersion", &root);
    v.member::<SpringBootVersion>(obj, "springBootVersion", &root);
    v.member::<PackageType>(obj, "packageType", &root);
    v.optional_unsigned(obj, "currentStep", &root);

    if let Some(deps) = v.array(obj, "dependencies", &root) {
        validate_dependencies(&mut v, deps, &root.key("dependencies"));
    }

    if let Some(db) = v.required(obj, "database", &root) {
        validate_database(&mut v, db, &root.key("database"));
    }

    if let Some(entities) = v.array(obj, "entities", &root) {
        validate_entities(&mut v, entities, &root.key("entities"));
    }

    if let Some(relationships) = v.array(obj, "relationships", &root) {
        validate_relationships(&mut v, relationships, &root.key("relationships"));
    }

    if let Some(options) = v.required(obj, "generationOptions", &root) {
        validate_generation_options(&mut v, options, &root.key("generationOptions"));
    }

    v.into_issues()
}

fn validate_dependencies(v: &mut Validator, deps: &[Value], path: &ValuePath) {
    let mut seen = HashSet::new();
    for (i, dep) in deps.iter().enumerate() {
        let path = path.index(i);
        let Some(obj) = v.object(dep, &path) else {
            continue;
        };
        if let Some(id) = v.string(obj, "id", &path) {
            if !seen.insert(id) {
                v.duplicate(&path.key("id"), "dependency id", id);
            }
        }
        v.string(obj, "name", &path);
        v.boolean(obj, "selected", &path);
    }
}

fn validate_database(v: &mut Validator, db: &Value, path: &ValuePath) {
    let Some(obj) = v.object(db, path) else {
        return;
    };
    v.nullable_member::<DatabaseType>(obj, "type", path);

    let Some(options) = v.required(obj, "options", path) else {
        return;
    };
    let path = path.key("options");
    let Some(options) = v.object(options, &path) else {
        return;
    };
    for key in ["url", "name", "username", "password"] {
        v.string(options, key, &path);
    }
    for key in ["generateDdl", "showSql", "connectionPool"] {
        v.boolean(options, key, &path);
    }
}

fn validate_entities(v: &mut Validator, entities: &[Value], path: &ValuePath) {
    let mut seen = HashSet::new();
    for (i, entity) in entities.iter().enumerate() {
        let path = path.index(i);
        let Some(obj) = v.object(entity, &path) else {
            continue;
        };
        if let Some(id) = v.string(obj, "id", &path) {
            if !seen.insert(id) {
                v.duplicate(&path.key("id"), "entity id", id);
            }
        }
        v.non_empty_string(obj, "name", &path);
        v.optional_string(obj, "description", &path);

        if let Some(fields) = v.array(obj, "fields", &path) {
            let fields_path = path.key("fields");
            for (j, field) in fields.iter().enumerate() {
                validate_field(v, field, &fields_path.index(j));
            }
        }
    }
}

fn validate_field(v: &mut Validator, field: &Value, path: &ValuePath) {
    let Some(obj) = v.object(field, path) else {
        return;
    };
    v.string(obj, "id", path);
    v.non_empty_string(obj, "name", path);
    v.member::<FieldType>(obj, "type", path);

    if let Some(constraints) = v.array(obj, "constraints", path) {
        let path = path.key("constraints");
        for (k, constraint) in constraints.iter().enumerate() {
            if !constraint.is_string() {
                v.expected(&path.index(k), "string", constraint);
            }
        }
    }
}

fn validate_relationships(v: &mut Validator, relationships: &[Value], path: &ValuePath) {
    for (i, relationship) in relationships.iter().enumerate() {
        let path = path.index(i);
        let Some(obj) = v.object(relationship, &path) else {
            continue;
        };
        v.string(obj, "id", &path);
        v.string(obj, "sourceEntityId", &path);
        v.string(obj, "targetEntityId", &path);
        v.member::<RelationshipType>(obj, "type", &path);
        v.string(obj, "fieldName", &path);
    }
}

fn validate_generation_options(v: &mut Validator, options: &Value, path: &ValuePath) {
    let Some(obj) = v.object(options, path) else {
        return;
    };
    for key in [
        "controllers",
        "services",
        "repositories",
        "dtos",
        "docker",
        "dockerCompose",
        "readme",
        "gitignore",
    ] {
        v.boolean(obj, key, path);
    }
    v.member::<Documentation>(obj, "documentation", path);
    if obj.contains_key("useLombok") {
        v.boolean(obj, "useLombok", path);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_doc() -> Value {
        json!({
            "groupId": "com.example",
            "artifactId": "demo",
            "name": "Demo",
            "javaVersion": "21",
            "springBootVersion": "3.1.5",
            "packageType": "jar",
            "dependencies": [{ "id": "web", "name": "Spring Web", "selected": true }],
            "database": {
                "type": null,
                "options": {
                    "url": "", "name": "", "username": "", "password": "",
                    "generateDdl": true, "showSql": false, "connectionPool": true
                }
            },
            "entities": [{
                "id": "e1",
                "name": "Product",
                "description": "",
                "fields": [{ "id": "f1", "name": "id", "type": "Long", "constraints": ["@Id"] }]
            }],
            "relationships": [],
            "generationOptions": {
                "controllers": true, "services": true, "repositories": true, "dtos": false,
                "docker": false, "dockerCompose": false, "readme": true, "gitignore": true,
                "documentation": "swagger"
            }
        })
    }

    #[test]
    fn test_valid_document_has_no_issues() {
        assert!(validate_document(&valid_doc()).is_empty());
    }

    #[test]
    fn test_missing_artifact_id() {
        let mut doc = valid_doc();
        doc.as_object_mut().unwrap().remove("artifactId");

        let issues = validate_document(&doc);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "artifactId");
        assert_eq!(issues[0].code, IssueCode::Required);
    }

    #[test]
    fn test_reports_every_issue_with_nested_paths() {
        let mut doc = valid_doc();
        doc["javaVersion"] = json!("17");
        doc["entities"][0]["fields"][0]["type"] = json!("Float");
        doc["entities"][0]["name"] = json!("  ");
        doc["generationOptions"]["docker"] = json!("yes");

        let issues = validate_document(&doc);
        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "javaVersion",
                "entities[0].name",
                "entities[0].fields[0].type",
                "generationOptions.docker",
            ]
        );
        assert_eq!(issues[0].code, IssueCode::InvalidEnum);
        assert!(issues[0].message.contains("18, 20, 21"));
        assert_eq!(issues[1].code, IssueCode::Empty);
        assert_eq!(issues[3].code, IssueCode::InvalidType);
    }

    #[test]
    fn test_duplicate_entity_ids() {
        let mut doc = valid_doc();
        let entity = doc["entities"][0].clone();
        doc["entities"].as_array_mut().unwrap().push(entity);

        let issues = validate_document(&doc);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "entities[1].id");
        assert_eq!(issues[0].code, IssueCode::Duplicate);
    }

    #[test]
    fn test_database_type_must_be_known_or_null() {
        let mut doc = valid_doc();
        doc["database"]["type"] = json!("sqlite");
        let issues = validate_document(&doc);
        assert_eq!(issues[0].path, "database.type");

        doc["database"]["type"] = json!("mongodb");
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        let issues = validate_document(&json!([1, 2]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "");
        assert_eq!(issues[0].message, "expected object, received array");
    }

    #[test]
    fn test_value_path_display() {
        let path = ValuePath::root().key("entities").index(2).key("fields").index(0);
        assert_eq!(path.to_string(), "entities[2].fields[0]");
        assert_eq!(ValuePath::root().to_string(), "");
    }
}
