//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What ended up on disk.
#[derive(Debug)]
pub enum Written {
    Archive {
        path: PathBuf,
        bytes: usize,
        files: usize,
    },
    Directory {
        path: PathBuf,
        files: usize,
        directories: usize,
    },
}

/// Report data from project generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub name: String,
    pub artifact_id: String,
    /// Entity names in declaration order.
    pub entities: Vec<String>,
    /// Lint warnings (never fatal).
    pub warnings: Vec<String>,
    pub written: Written,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("{} ({})", self.name, self.artifact_id));
        if !self.entities.is_empty() {
            out.preformatted(&format!("Entities ({}):", self.entities.len()));
            for entity in &self.entities {
                out.list_item(entity);
            }
        }
        out.newline();

        match &self.written {
            Written::Archive { path, bytes, files } => {
                out.key_value(
                    "Generated",
                    &format!("{} ({} files, {} bytes)", path.display(), files, bytes),
                );
            }
            Written::Directory {
                path,
                files,
                directories,
            } => {
                out.key_value(
                    "Generated",
                    &format!(
                        "{}/ ({} files, {} directories)",
                        path.display(),
                        files,
                        directories
                    ),
                );
            }
        }
    }
}
