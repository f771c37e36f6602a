//! Configuration for the import tool
//!
//! Loaded from `imbib/import.toml` in the platform config directory unless a
//! path is given explicitly. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Import tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Name of the import format to use, matched case-insensitively
    pub format: String,
    /// Check imported entries against the entry-type schemas
    pub validate_entries: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            format: "biblioscape".to_string(),
            validate_entries: false,
            pretty: false,
            log_filter: "info".to_string(),
        }
    }
}

/// Command-line values layered over a loaded config; `None` keeps the file value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<String>,
    pub validate_entries: Option<bool>,
    pub pretty: Option<bool>,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("imbib").join("import.toml"))
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!("Loaded import config from {:?}", path);
        Ok(config)
    }

    /// Load the file at [`default_path`](Self::default_path) if it exists,
    /// defaults otherwise
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Apply command-line overrides. Boolean options can be switched off
    /// as well as on.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(validate_entries) = overrides.validate_entries {
            self.validate_entries = validate_entries;
        }
        if let Some(pretty) = overrides.pretty {
            self.pretty = pretty;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.format.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "format must not be empty".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
