//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "hangman.toml";

/// Settings for the hangman front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the SQLite word store.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Theme played when none is named on the command line.
    #[serde(default = "default_theme")]
    default_theme: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_db_path() -> String {
    "hangman.db".to_string()
}

#[instrument]
fn default_theme() -> String {
    "Developpeur".to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            default_theme: default_theme(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, theme = %config.default_theme, "Config loaded");
        Ok(config)
    }

    /// Loads an explicitly requested file, or the default file if present.
    ///
    /// Without an explicit path a missing default file yields defaults; an
    /// explicit path must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the database path.
    pub fn with_db_path(mut self, db_path: impl Into<String>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Overrides the default theme.
    pub fn with_default_theme(mut self, theme: impl Into<String>) -> Self {
        self.default_theme = theme.into();
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path(), "hangman.db");
        assert_eq!(config.default_theme(), "Developpeur");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml("default_theme = \"Designer\"\n").unwrap();
        assert_eq!(config.default_theme(), "Designer");
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = AppConfig::from_toml("db_path = [").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_path = \"words.db\"\nlog_filter = \"debug\"").unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.db_path(), "words.db");
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/hangman.toml"))).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_db_path("other.db")
            .with_default_theme("Designer");
        assert_eq!(config.db_path(), "other.db");
        assert_eq!(config.default_theme(), "Designer");
    }
}
