//! Configuration management for Artscope.
//!
//! Configuration is a single optional TOML file. A missing or unreadable
//! file is never fatal: the browser works against the public API with
//! defaults, and the config mainly exists to point it at a different base
//! URL (a local mirror or a mock during development) and to tune the UI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::api::DEFAULT_BASE_URL;

/// Errors from loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not determine the platform config directory.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Could not read the config file.
    #[error("Could not read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Could not parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the collection API.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiSettings {
    /// The UI theme to use ("dark" or "light").
    pub theme: String,
    /// Whether to use vim-style hjkl navigation keys.
    pub vim_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            vim_mode: true,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// API connection settings.
    pub api: ApiSettings,
    /// UI settings.
    pub ui: UiSettings,
}

impl Config {
    /// Load configuration from the default location, or from `path` if given.
    ///
    /// Falls back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// The default config file path: `<config dir>/artscope/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("artscope").join("config.toml"))
    }
}
