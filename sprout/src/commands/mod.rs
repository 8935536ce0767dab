mod check;
mod completions;
mod generate;
mod preview;
mod serve;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use preview::PreviewCommand;
use serve::ServeCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sprout_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version)]
#[command(about = "Generate Spring Boot projects from wizard configurations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Serve(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP generation service
    Serve(ServeCommand),

    /// Generate a project archive (or directory) from a configuration
    Generate(GenerateCommand),

    /// Print every file that would be generated
    Preview(PreviewCommand),

    /// Validate a configuration and report lint warnings
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_accepts_output_or_dir() {
        assert!(Cli::try_parse_from(["sprout", "generate", "demo.json", "-o", "x.zip"]).is_ok());
        assert!(Cli::try_parse_from(["sprout", "generate", "demo.json", "--dir", "out"]).is_ok());
        assert!(
            Cli::try_parse_from(["sprout", "generate", "demo.json", "-o", "x.zip", "--dir", "out"])
                .is_err()
        );
    }

    #[test]
    fn test_serve_log_format_is_validated() {
        assert!(Cli::try_parse_from(["sprout", "serve", "--log-format", "json"]).is_ok());
        assert!(Cli::try_parse_from(["sprout", "serve", "--log-format", "xml"]).is_err());
    }
}
