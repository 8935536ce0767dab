//! Core utilities and types for the sprout project generator.
//!
//! This crate provides the file abstraction every template implements and
//! the identifier case helpers shared by the naming layer.

mod file;
mod utils;

// File operations
pub use file::{File, FileMode, GeneratedFile, write_file};
// String utilities
pub use utils::{is_java_identifier, to_camel_case, to_pascal_case, to_snake_case};
