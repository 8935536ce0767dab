//! Zip packing of a project tree.

use std::io::{Cursor, Write};

use eyre::{Result, WrapErr};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::ProjectTree;

/// Serialize `tree` into zip bytes.
///
/// Directory entries come first, then files, both in tree order. Entry
/// timestamps are left at the zip epoch so identical trees produce
/// identical archives.
pub fn pack(tree: &ProjectTree) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    let dir_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o755);
    for dir in tree.directories() {
        writer
            .add_directory(format!("{dir}/"), dir_options)
            .wrap_err_with(|| format!("failed to add directory {dir}"))?;
    }

    for (path, entry) in tree.files() {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(entry.mode.unix_permissions());
        writer
            .start_file(path, options)
            .wrap_err_with(|| format!("failed to add {path}"))?;
        writer.write_all(entry.content.as_bytes())?;
    }

    let bytes = writer.finish().wrap_err("failed to finish archive")?.into_inner();
    tracing::debug!(files = tree.len(), bytes = bytes.len(), "packed archive");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use sprout_core::File;
    use zip::ZipArchive;

    use super::*;
    use crate::FileCategory;

    fn sample_tree() -> ProjectTree {
        let mut tree = ProjectTree::new();
        tree.create_dir("src/main/java/com/example/demo/dto");
        tree.add(&File::new("pom.xml", "<project/>"), FileCategory::Config);
        tree.add(
            &File::new("src/main/java/com/example/demo/Demo.java", "class Demo {}\n"),
            FileCategory::Source,
        );
        tree.add(&File::new("mvnw", "#!/bin/sh\n").executable(), FileCategory::Wrapper);
        tree
    }

    #[test]
    fn test_every_file_round_trips() {
        let tree = sample_tree();
        let bytes = pack(&tree).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        for (path, entry) in tree.files() {
            let mut file = archive.by_name(path).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            assert_eq!(content, entry.content);
        }
    }

    #[test]
    fn test_directories_and_modes() {
        let bytes = pack(&sample_tree()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let dto = archive.by_name("src/main/java/com/example/demo/dto/").unwrap();
        assert!(dto.is_dir());
        drop(dto);

        let mvnw = archive.by_name("mvnw").unwrap();
        assert_eq!(mvnw.unix_mode().map(|m| m & 0o777), Some(0o755));
        drop(mvnw);

        let pom = archive.by_name("pom.xml").unwrap();
        assert_eq!(pom.unix_mode().map(|m| m & 0o777), Some(0o644));
    }

    #[test]
    fn test_each_path_once() {
        let tree = sample_tree();
        let bytes = pack(&tree).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let files = archive.file_names().filter(|n| !n.ends_with('/')).count();
        assert_eq!(files, tree.len());
    }

    #[test]
    fn test_identical_trees_identical_bytes() {
        assert_eq!(pack(&sample_tree()).unwrap(), pack(&sample_tree()).unwrap());
    }
}
