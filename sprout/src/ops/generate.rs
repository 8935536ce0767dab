//! Generate operation - archive or directory output.

use std::path::PathBuf;

use eyre::{Context, Result};
use sprout_codegen_spring::Generator;
use sprout_manifest::ProjectConfig;

use crate::reports::{GenerateReport, Written};

/// Where the generated project goes.
#[derive(Debug, Clone)]
pub enum Target {
    /// A zip archive at this path.
    Archive(PathBuf),
    /// An unpacked tree below this directory.
    Directory(PathBuf),
}

pub fn generate(config: &ProjectConfig, target: &Target) -> Result<GenerateReport> {
    let generator = Generator::new(config);
    let warnings = generator
        .diagnostics()
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(ToString::to_string)
        .collect();

    let written = match target {
        Target::Archive(path) => {
            let tree = generator.build();
            let bytes = sprout_codegen::pack(&tree).wrap_err("Failed to build archive")?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &bytes)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote archive");
            Written::Archive {
                path: path.clone(),
                bytes: bytes.len(),
                files: tree.len(),
            }
        }
        Target::Directory(dir) => {
            let stats = generator
                .generate(dir)
                .wrap_err_with(|| format!("Failed to write project to {}", dir.display()))?;
            Written::Directory {
                path: dir.clone(),
                files: stats.written,
                directories: stats.directories,
            }
        }
    };

    Ok(GenerateReport {
        name: config.name.clone(),
        artifact_id: config.artifact_id.clone(),
        entities: config.entities.iter().map(|e| e.name.clone()).collect(),
        warnings,
        written,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_archive_target_writes_zip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out/demo.zip");
        let config = crate::tests::demo();

        let report = generate(&config, &Target::Archive(path.clone())).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.file_names().any(|n| n == "pom.xml"));
        let entries = archive.file_names().filter(|n| !n.ends_with('/')).count();
        match report.written {
            Written::Archive { files, .. } => assert_eq!(files, entries),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_directory_target_writes_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = crate::tests::demo();

        let report = generate(&config, &Target::Directory(temp.path().to_path_buf())).unwrap();

        assert!(temp.path().join("pom.xml").is_file());
        assert!(
            temp.path()
                .join("src/main/java/com/example/demo/entity/Product.java")
                .is_file()
        );
        assert_eq!(report.entities, ["Product"]);
    }
}
