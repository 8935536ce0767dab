//! Non-fatal checks over a valid configuration.
//!
//! Schema validation rejects documents that cannot be generated at all.
//! Lints run afterwards and flag configurations that generate, but probably
//! not the way the user meant (two entities with one name, relationships to
//! deleted entities, ...). Diagnostics never block generation.
//!
//! # Example
//!
//! ```ignore
//! let diagnostics = Linter::new().run(&config);
//! for diag in &diagnostics {
//!     eprintln!("{diag}");
//! }
//! ```

mod diagnostic;
mod lint;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::Lint;
use lints::{
    DanglingRelationshipLint, DuplicateEntityNameLint, EmptyRelationshipFieldLint,
    MissingIdentifierLint, MultipleIdentifiersLint,
};
use sprout_manifest::ProjectConfig;

/// Runs a set of lints over a configuration.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateEntityNameLint),
                Box::new(DanglingRelationshipLint),
                Box::new(MultipleIdentifiersLint),
                Box::new(EmptyRelationshipFieldLint),
                Box::new(MissingIdentifierLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint, in registration order.
    pub fn run(&self, config: &ProjectConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(config, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the built-in lints.
pub fn lint(config: &ProjectConfig) -> Vec<Diagnostic> {
    Linter::new().run(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::tests::config;

    #[test]
    fn test_default_lint_names() {
        assert_eq!(
            Linter::new().lint_names(),
            [
                "duplicate-entity-name",
                "dangling-relationship",
                "multiple-identifiers",
                "empty-relationship-field",
                "missing-identifier",
            ]
        );
    }

    #[test]
    fn test_custom_lint() {
        struct AlwaysInfo;
        impl Lint for AlwaysInfo {
            fn name(&self) -> &'static str {
                "always-info"
            }
            fn check(&self, _config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::info(self.name(), "hello"));
            }
        }

        let diagnostics = Linter::empty().with_lint(AlwaysInfo).run(&config("g", "a"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].lint, "always-info");
    }

    #[test]
    fn test_clean_config_has_no_diagnostics() {
        assert!(lint(&config("com.example", "demo")).is_empty());
    }
}
