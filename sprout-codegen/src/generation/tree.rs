//! In-memory project tree for declarative generation.
//!
//! The generator registers every directory and file it wants to emit, then
//! the tree is either previewed, written to disk or packed into an archive.
//! Keeping the whole output in memory means a failed request never leaves a
//! half-written workspace behind.
//!
//! # Example
//!
//! ```
//! use sprout_codegen::{FileCategory, ProjectTree};
//! use sprout_core::File;
//!
//! let mut tree = ProjectTree::new();
//! tree.create_dir("src/main/resources");
//! tree.add(&File::new("pom.xml", "<project/>"), FileCategory::Config);
//!
//! assert_eq!(tree.len(), 1);
//! assert!(tree.directories().any(|d| d == "src/main"));
//! ```

use std::path::Path;

use eyre::{Result, WrapErr};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use sprout_core::{FileMode, GeneratedFile, write_file};

/// Role of a generated file in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    /// Build descriptor and runtime properties.
    Config,
    /// Application sources (entry point, entities, layers).
    Source,
    /// README, ignore file, container files.
    Support,
    /// Build-wrapper placeholders.
    Wrapper,
}

/// A registered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub content: String,
    pub mode: FileMode,
    pub category: FileCategory,
}

/// Relative path to content mapping, plus the directories to create.
///
/// Both keep insertion order, which makes the output (and the archive
/// built from it) a deterministic function of the registration sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTree {
    directories: IndexSet<String>,
    files: IndexMap<String, TreeEntry>,
}

impl ProjectTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory and all of its ancestors.
    pub fn create_dir(&mut self, path: &str) {
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            if !self.directories.contains(current.as_str()) {
                self.directories.insert(current.clone());
            }
        }
    }

    /// Render a file and register it under its own path.
    ///
    /// Registering the same path twice keeps the original position and
    /// replaces the content.
    pub fn add<F: GeneratedFile>(&mut self, file: &F, category: FileCategory) {
        let path = file.path();
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.create_dir(parent);
        }
        let entry = TreeEntry {
            content: file.render(),
            mode: file.mode(),
            category,
        };
        if self.files.insert(path.clone(), entry).is_some() {
            tracing::warn!(%path, "generated path registered twice, keeping the last content");
        }
    }

    /// Look up a file by relative path.
    pub fn get(&self, path: &str) -> Option<&TreeEntry> {
        self.files.get(path)
    }

    /// Content of the file at `path`.
    pub fn content(&self, path: &str) -> Option<&str> {
        self.get(path).map(|e| e.content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of files (directories are not counted).
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// File paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Files in registration order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &TreeEntry)> {
        self.files.iter().map(|(p, e)| (p.as_str(), e))
    }

    /// Directories in creation order, parents before children.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }

    /// Files of a single category.
    pub fn files_by_category(
        &self,
        category: FileCategory,
    ) -> impl Iterator<Item = (&str, &TreeEntry)> {
        self.files().filter(move |(_, e)| e.category == category)
    }

    /// Snapshot of every file for display.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|(path, entry)| PreviewFile {
                path: path.to_string(),
                content: entry.content.clone(),
                category: entry.category,
            })
            .collect()
    }

    /// Write every directory and file below `base`.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for dir in self.directories() {
            let path = base.join(dir);
            std::fs::create_dir_all(&path)
                .wrap_err_with(|| format!("failed to create directory {}", path.display()))?;
            stats.directories += 1;
        }

        for (relative, entry) in self.files() {
            let path = base.join(relative);
            write_file(&path, &entry.content)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            set_mode(&path, entry.mode)?;
            stats.written += 1;
            stats.written_paths.push(relative.to_string());
        }

        Ok(stats)
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: FileMode) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if mode == FileMode::Executable {
        let permissions = std::fs::Permissions::from_mode(mode.unix_permissions());
        std::fs::set_permissions(path, permissions)
            .wrap_err_with(|| format!("failed to mark {} executable", path.display()))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: FileMode) -> Result<()> {
    Ok(())
}

/// A file as shown by preview surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of directories created (including pre-existing ones).
    pub directories: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
}
