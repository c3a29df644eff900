//! # Configuration
//!
//! Process configuration for the planner server and CLI.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`config/default.toml` if present, or an explicit path)
//! 3. Environment variables prefixed with `PLANNER`, sections separated by
//!    `__`, e.g. `PLANNER__SERVER__PORT=8080`
//!
//! A `.env` file in the working directory is loaded into the environment
//! first.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [exchanges]
//! data_folder = "data/exchanges"
//!
//! [planner]
//! tie_break = "input_order"
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use crate::application::services::PlannerConfig;
use crate::infrastructure::persistence::json::exchange_repository::DEFAULT_DATA_FOLDER;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "PLANNER";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Exchange data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExchangesConfig {
    /// Folder holding one JSON file per exchange.
    pub data_folder: PathBuf,
}

impl Default for ExchangesConfig {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from(DEFAULT_DATA_FOLDER),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Exchange data source.
    pub exchanges: ExchangesConfig,
    /// Planner behaviour.
    pub planner: PlannerConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from `.env`, the config file and the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read or holds values
    /// of the wrong type, and `ConfigError::Invalid` if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn from_sources(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };
        builder = builder.add_source(environment.separator("__").try_parsing(true));

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` on an empty host or data folder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host is empty".to_string()));
        }
        if self.exchanges.data_folder.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "exchanges.data_folder is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::TieBreak;
    use std::collections::HashMap;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.exchanges.data_folder, PathBuf::from("data/exchanges"));
        assert_eq!(config.planner.tie_break, TieBreak::InputOrder);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.toml");
        fs::write(
            &path,
            r#"
                [server]
                port = 8081

                [exchanges]
                data_folder = "/srv/exchanges"

                [planner]
                tie_break = "exchange_id"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_sources(Some(&path), env(&[])).unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.exchanges.data_folder, PathBuf::from("/srv/exchanges"));
        assert_eq!(config.planner.tie_break, TieBreak::ExchangeId);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.toml");
        fs::write(&path, "[server]\nport = 8081\n").unwrap();

        let config = AppConfig::from_sources(
            Some(&path),
            env(&[
                ("PLANNER__SERVER__PORT", "9090"),
                ("PLANNER__LOGGING__JSON", "true"),
                ("PLANNER__EXCHANGES__DATA_FOLDER", "fixtures"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert!(config.logging.json);
        assert_eq!(config.exchanges.data_folder, PathBuf::from("fixtures"));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_sources(Some(&dir.path().join("absent.toml")), env(&[]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn unknown_tie_break_fails() {
        let result =
            AppConfig::from_sources(None, env(&[("PLANNER__PLANNER__TIE_BREAK", "random")]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_host_is_invalid() {
        let result = AppConfig::from_sources(None, env(&[("PLANNER__SERVER__HOST", " ")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
