//! Shared code generation utilities for the sprout project generator.
//!
//! This crate holds the target-agnostic half of generation; the Spring
//! Boot template set lives in `sprout-codegen-spring`.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text building (CodeBuilder, Indent)
//! - [`naming`] - Canonical names derived from the configuration
//! - [`constraints`] - Interpretation of constraint tags
//! - [`relations`] - Per-entity relationship declarations
//! - [`generation`] - Output management (ProjectTree, archive packing)
//! - [`pipeline`] - Non-fatal lints over a valid configuration

pub mod builder;
pub mod constraints;
pub mod generation;
pub mod naming;
pub mod pipeline;
pub mod relations;

pub use builder::{CodeBuilder, Indent};
pub use generation::{FileCategory, PreviewFile, ProjectTree, TreeEntry, WriteStats, pack};
pub use pipeline::{Diagnostic, Lint, Linter, Severity, lint};
pub use relations::{Direction, RelationshipDecl, UNKNOWN_ENTITY, resolve_for_entity};
