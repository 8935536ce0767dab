//! Code generation building blocks.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
