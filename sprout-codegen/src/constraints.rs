//! Interpretation of field constraint tags.
//!
//! Tags stay opaque strings in the configuration (`"@Id"`,
//! `"@Column(nullable = false)"`, ...). The generator only needs to know
//! which family a tag belongs to, so a flat lookup table is enough.

use sprout_manifest::Field;

/// Family of a constraint tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@Id`
    Identifier,
    /// `@GeneratedValue`
    AutoGenerated,
    /// `@CreationTimestamp`
    CreationTimestamp,
    /// `@UpdateTimestamp`
    UpdateTimestamp,
    /// `@Column(...)`
    Column,
    /// Bean validation: `@NotNull`, `@NotBlank`, `@Email`, `@Min(n)`, ...
    Validation,
    /// Anything else; emitted verbatim.
    Custom,
}

const TAGS: &[(&str, TagKind)] = &[
    ("Id", TagKind::Identifier),
    ("GeneratedValue", TagKind::AutoGenerated),
    ("CreationTimestamp", TagKind::CreationTimestamp),
    ("UpdateTimestamp", TagKind::UpdateTimestamp),
    ("Column", TagKind::Column),
    ("NotNull", TagKind::Validation),
    ("NotBlank", TagKind::Validation),
    ("NotEmpty", TagKind::Validation),
    ("Email", TagKind::Validation),
    ("Min", TagKind::Validation),
    ("Max", TagKind::Validation),
    ("Size", TagKind::Validation),
    ("Past", TagKind::Validation),
    ("Future", TagKind::Validation),
];

/// A parsed constraint tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint<'a> {
    name: &'a str,
    arguments: Option<&'a str>,
    kind: TagKind,
}

impl<'a> Constraint<'a> {
    /// Parse a tag such as `"@Min(0)"`. The leading `@` is optional.
    pub fn parse(tag: &'a str) -> Self {
        let tag = tag.trim();
        let tag = tag.strip_prefix('@').unwrap_or(tag);
        let (name, arguments) = match tag.split_once('(') {
            Some((name, rest)) => (name.trim(), Some(rest.trim_end_matches(')').trim())),
            None => (tag, None),
        };
        let kind = TAGS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(TagKind::Custom);
        Self {
            name,
            arguments,
            kind,
        }
    }

    /// Annotation simple name, without `@` or arguments.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Annotation source text, always with a leading `@`.
    pub fn annotation(&self) -> String {
        match self.arguments {
            Some(args) => format!("@{}({})", self.name, args),
            None => format!("@{}", self.name),
        }
    }

    /// Whether the tag carries an argument list (`@Min(0)` does, `@Min` does not).
    pub fn has_arguments(&self) -> bool {
        self.arguments.is_some()
    }
}

/// Parse every tag of a field, in declaration order.
pub fn parse_all(field: &Field) -> Vec<Constraint<'_>> {
    field.constraints.iter().map(|t| Constraint::parse(t)).collect()
}

/// Whether any tag of `field` belongs to `kind`.
pub fn has_kind(field: &Field, kind: TagKind) -> bool {
    field
        .constraints
        .iter()
        .any(|t| Constraint::parse(t).kind() == kind)
}

/// A field named `id` tagged both identifier and auto-generated.
pub fn is_primary_key(field: &Field) -> bool {
    field.name == crate::naming::IDENTIFIER_FIELD
        && has_kind(field, TagKind::Identifier)
        && has_kind(field, TagKind::AutoGenerated)
}

#[cfg(test)]
mod tests {
    use sprout_manifest::FieldType;

    use super::*;
    use crate::naming::tests::field;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Constraint::parse("@Id").kind(), TagKind::Identifier);
        assert_eq!(Constraint::parse("GeneratedValue").kind(), TagKind::AutoGenerated);
        assert_eq!(Constraint::parse("@Min(0)").kind(), TagKind::Validation);
        assert_eq!(
            Constraint::parse("@Column(nullable = false)").kind(),
            TagKind::Column
        );
    }

    #[test]
    fn test_unknown_tag_is_custom() {
        let c = Constraint::parse("@JsonIgnore");
        assert_eq!(c.kind(), TagKind::Custom);
        assert_eq!(c.annotation(), "@JsonIgnore");
    }

    #[test]
    fn test_annotation_normalizes() {
        assert_eq!(Constraint::parse(" NotNull ").annotation(), "@NotNull");
        assert_eq!(Constraint::parse("@Min( 1 )").annotation(), "@Min(1)");
        assert!(Constraint::parse("@Min(1)").has_arguments());
        assert!(!Constraint::parse("@GeneratedValue").has_arguments());
        assert_eq!(Constraint::parse("@Column(unique = true)").name(), "Column");
    }

    #[test]
    fn test_primary_key_convention() {
        let pk = field("id", FieldType::Long, &["@Id", "@GeneratedValue"]);
        assert!(is_primary_key(&pk));

        let manual = field("id", FieldType::String, &["@Id"]);
        assert!(!is_primary_key(&manual));
        assert!(has_kind(&manual, TagKind::Identifier));

        let renamed = field("code", FieldType::Long, &["@Id", "@GeneratedValue"]);
        assert!(!is_primary_key(&renamed));
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let f = field("email", FieldType::String, &["@NotBlank", "@Email"]);
        let names: Vec<_> = parse_all(&f).iter().map(|c| c.name()).collect();
        assert_eq!(names, ["NotBlank", "Email"]);
    }
}
