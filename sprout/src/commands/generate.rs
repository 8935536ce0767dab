use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Target},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Project configuration (JSON, or TOML by extension)
    pub config: PathBuf,

    /// Archive to write [default: <artifactId>.zip]
    #[arg(short, long, conflicts_with = "dir")]
    pub output: Option<PathBuf>,

    /// Write an unpacked project tree into this directory instead
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Archive name in the working directory, keeping only the last path
/// component of the artifact id.
fn default_archive(artifact_id: &str) -> PathBuf {
    let stem = Path::new(artifact_id)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("project");
    PathBuf::from(format!("{stem}.zip"))
}

impl GenerateCommand {
    fn target(&self, artifact_id: &str) -> Target {
        match (&self.dir, &self.output) {
            (Some(dir), _) => Target::Directory(dir.clone()),
            (None, Some(path)) => Target::Archive(path.clone()),
            (None, None) => Target::Archive(default_archive(artifact_id)),
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = sprout_manifest::parse_file(&self.config).unwrap_or_exit();
        let report = ops::generate(&config, &self.target(&config.artifact_id))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_archive_stays_in_working_directory() {
        assert_eq!(default_archive("demo"), PathBuf::from("demo.zip"));
        assert_eq!(default_archive("../x"), PathBuf::from("x.zip"));
        assert_eq!(default_archive("/tmp/evil"), PathBuf::from("evil.zip"));
        assert_eq!(default_archive(".."), PathBuf::from("project.zip"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let command = GenerateCommand {
            config: PathBuf::from("demo.json"),
            output: Some(PathBuf::from("out/../x.zip")),
            dir: None,
        };
        match command.target("demo") {
            Target::Archive(path) => assert_eq!(path, PathBuf::from("out/../x.zip")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
