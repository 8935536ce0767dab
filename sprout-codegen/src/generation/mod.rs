//! Output management: the in-memory project tree and its archive form.

mod archive;
mod tree;

pub use archive::pack;
pub use tree::{FileCategory, PreviewFile, ProjectTree, TreeEntry, WriteStats};
