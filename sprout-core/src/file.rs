use std::path::Path;

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root, using `/` separators
    fn path(&self) -> String;

    /// Get the mode the file should carry in an archive or on disk
    fn mode(&self) -> FileMode {
        FileMode::Regular
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file below `base`
    fn write(&self, base: &Path) -> Result<()> {
        write_file(&base.join(self.path()), &self.render())
    }
}

/// Permission class of a generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Plain file (0644)
    #[default]
    Regular,
    /// Executable script (0755)
    Executable,
}

impl FileMode {
    /// Unix permission bits for this mode.
    pub fn unix_permissions(&self) -> u32 {
        match self {
            FileMode::Regular => 0o644,
            FileMode::Executable => 0o755,
        }
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A file with pre-rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: String,
    content: String,
    mode: FileMode,
}

impl File {
    /// Create a new regular file with the given relative path and content
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: FileMode::Regular,
        }
    }

    /// Mark the file as executable
    pub fn executable(mut self) -> Self {
        self.mode = FileMode::Executable;
        self
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn mode(&self) -> FileMode {
        self.mode
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write_joins_relative_path() {
        let temp = TempDir::new().unwrap();

        let file = File::new("src/main/resources/application.properties", "a=b\n");
        file.write(temp.path()).unwrap();

        let written = temp
            .path()
            .join("src")
            .join("main")
            .join("resources")
            .join("application.properties");
        assert_eq!(fs::read_to_string(written).unwrap(), "a=b\n");
    }

    #[test]
    fn test_file_mode() {
        assert_eq!(File::new("a", "").mode(), FileMode::Regular);
        assert_eq!(File::new("mvnw", "").executable().mode(), FileMode::Executable);
        assert_eq!(FileMode::Executable.unix_permissions(), 0o755);
        assert_eq!(FileMode::Regular.unix_permissions(), 0o644);
    }
}
