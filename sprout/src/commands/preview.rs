use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprout_codegen_spring::Generator;

use super::UnwrapOrExit;
use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct PreviewCommand {
    /// Project configuration (JSON, or TOML by extension)
    pub config: PathBuf,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let config = sprout_manifest::parse_file(&self.config).unwrap_or_exit();
        let generator = Generator::new(&config);
        let files = generator.preview();

        let mut out = TerminalOutput::new();
        for file in &files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
        for diag in generator.diagnostics() {
            if diag.severity.is_warning() {
                out.warning(&diag.to_string());
            }
        }

        Ok(())
    }
}
