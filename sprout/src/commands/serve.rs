use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use sprout_server::{LogFormat, ServerConfig};

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Args)]
pub struct ServeCommand {
    /// Server settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on [default: 127.0.0.1:8080]
    #[arg(long)]
    bind: Option<String>,

    /// Maximum request body size in bytes [default: 1048576]
    #[arg(long)]
    body_limit: Option<usize>,

    /// Log output format [default: pretty]
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,
}

impl ServeCommand {
    /// Settings with flags applied over file and environment values.
    fn settings(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::load(self.config.as_deref())
            .wrap_err("Failed to load server configuration")?;
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(limit) = self.body_limit {
            config.body_limit = limit;
        }
        if let Some(format) = self.log_format {
            config.log_format = format.into();
        }
        Ok(config)
    }

    pub fn run(&self) -> Result<()> {
        let config = self.settings()?;
        sprout_server::init_tracing(config.log_format);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .wrap_err("Failed to start async runtime")?;
        runtime
            .block_on(sprout_server::serve(&config))
            .wrap_err_with(|| format!("Server on {} failed", config.bind))
    }
}
