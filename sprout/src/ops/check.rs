//! Check operation - configuration lints.

use std::path::Path;

use sprout_codegen::{Diagnostic, Severity, lint};
use sprout_manifest::ProjectConfig;

use crate::reports::CheckReport;

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{} [{}]\n  --> {}", diag.message, diag.lint, loc),
        None => format!("{} [{}]", diag.message, diag.lint),
    }
}

/// Lint an already validated configuration.
pub fn check(config: &ProjectConfig, config_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in lint(config) {
        match diag.severity {
            Severity::Warning => warnings.push(format_diagnostic(&diag)),
            Severity::Info => infos.push(format_diagnostic(&diag)),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        project: format!("{}:{}", config.group_id, config.artifact_id),
        entity_count: config.entities.len(),
        relationship_count: config.relationships.len(),
        warnings,
        infos,
    }
}
