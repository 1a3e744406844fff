//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory, or from a path
//! given on the command line. A missing file yields the defaults.

use chrono::{FixedOffset, Local, Offset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::progression::XpRules;

/// Default database file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "classlog.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Database location
    pub storage: StorageSettings,
    /// XP rules and catalog override
    pub progression: ProgressionSettings,
    /// Time zone used to read log timestamps
    pub time: TimeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            storage: StorageSettings::default(),
            progression: ProgressionSettings::default(),
            time: TimeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Resolved database path. Relative paths live in the data directory.
    pub fn database_path(&self) -> PathBuf {
        if self.storage.database_file.is_absolute() {
            self.storage.database_file.clone()
        } else {
            self.data_dir.join(&self.storage.database_file)
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite file, relative to the data directory unless absolute
    pub database_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

/// Progression settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionSettings {
    #[serde(flatten)]
    pub rules: XpRules,
    /// Replacement achievement catalog (JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements_file: Option<PathBuf>,
}

/// Time settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSettings {
    /// Fixed offset from UTC in minutes; unset uses the system offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl TimeSettings {
    /// Offset used to convert stored timestamps to local time.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .and_then(|minutes| minutes.checked_mul(60))
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Local::now().offset().fix())
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "classlog", "ClassLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Write configuration as pretty TOML to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
