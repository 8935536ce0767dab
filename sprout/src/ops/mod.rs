//! Operations behind the commands.
//!
//! Each operation does the work and returns a report; commands only decide
//! how to render it.

mod check;
mod generate;

pub use check::check;
pub use generate::{Target, generate};
