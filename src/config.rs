use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::parser::ParseOptions;

/// Application name used for config and data directories
pub const APP_NAME: &str = "loosever";

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "LOOSEVER_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub parse: ParseOptions,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive, e.g. "warn" or "loosever=debug"
    pub level: String,
    /// Also write logs to the file at [`log_path`]
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl Config {
    /// Load the config from `path`, or from [`config_path`] when `None`.
    ///
    /// A missing default config file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for loosever.
/// Uses $XDG_CONFIG_HOME/loosever if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/loosever,
/// or ./loosever if neither is available.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the data directory for loosever.
/// Uses $XDG_DATA_HOME/loosever if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/loosever,
/// or ./loosever if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("loosever.log")
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, home_relative: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
