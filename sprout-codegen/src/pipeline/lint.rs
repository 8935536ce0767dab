//! Lint trait for configuration checks.

use sprout_manifest::ProjectConfig;

use super::Diagnostic;

/// A lint that checks a configuration for suspicious content.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the configuration and add any diagnostics.
    fn check(&self, config: &ProjectConfig, diagnostics: &mut Vec<Diagnostic>);
}
