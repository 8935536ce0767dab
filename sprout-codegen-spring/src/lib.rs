//! Spring Boot project generator for sprout.
//!
//! One struct per emitted file lives in [`files`]; [`Generator`] walks the
//! configuration once and registers every file in a
//! [`ProjectTree`](sprout_codegen::ProjectTree).

mod context;
mod database;
pub mod files;
mod generator;
mod type_mapper;

pub use context::{EntityContext, ProjectContext};
pub use database::DatabaseProfile;
pub use generator::Generator;
pub use type_mapper::JavaImports;
