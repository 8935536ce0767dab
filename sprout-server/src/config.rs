//! Server settings: built-in defaults, an optional TOML file, then
//! `SPROUT_*` environment variables. Command-line flags are applied last by
//! the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

pub const ENV_BIND: &str = "SPROUT_BIND";
pub const ENV_BODY_LIMIT: &str = "SPROUT_BODY_LIMIT";
pub const ENV_LOG_FORMAT: &str = "SPROUT_LOG_FORMAT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid server configuration in '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: {reason}")]
    Env {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output flavour of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "plain" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Defaults, overlaid with `path` when given, overlaid with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `SPROUT_*` overrides read through `lookup`.
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.trim().is_empty()) {
            self.bind = bind.trim().to_string();
        }
        if let Some(value) = lookup(ENV_BODY_LIMIT) {
            self.body_limit = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Env {
                    key: ENV_BODY_LIMIT,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.log_format = value.parse().map_err(|reason| ConfigError::Env {
                key: ENV_LOG_FORMAT,
                value: value.clone(),
                reason,
            })?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.body_limit, 1_048_576);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            bind = "0.0.0.0:9000"
            log-format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        assert!(toml::from_str::<ServerConfig>("port = 80").is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ServerConfig {
            bind: "0.0.0.0:9000".into(),
            ..ServerConfig::default()
        }
        .with_env(env(&[
            ("SPROUT_BIND", "127.0.0.1:3000"),
            ("SPROUT_BODY_LIMIT", "2048"),
            ("SPROUT_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.body_limit, 2048);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_env_value_is_reported() {
        let err = ServerConfig::default()
            .with_env(env(&[("SPROUT_BODY_LIMIT", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("SPROUT_BODY_LIMIT"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sprout.toml");
        std::fs::write(&path, "body-limit = 4096\n").unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.body_limit, 4096);
        assert_eq!(config.bind, DEFAULT_BIND);
    }
}
