use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Project configuration (JSON, or TOML by extension)
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = sprout_manifest::parse_file(&self.config).unwrap_or_exit();
        ops::check(&config, &self.config).render(&mut TerminalOutput::new());
        Ok(())
    }
}
