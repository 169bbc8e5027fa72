//! Configuration file support.
//!
//! Settings are read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields a usable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use kundali_base::SyllableScript;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "KUNDALI_CONFIG";

/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "kundali.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KundaliConfig {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub dasha: DashaSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Script for the birth syllable.
    #[serde(default)]
    pub script: SyllableScript,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Decimal places kept for longitudes.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSettings {
    #[serde(default = "default_include_antardashas")]
    pub include_antardashas: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_pretty() -> bool {
    true
}

fn default_decimals() -> u32 {
    4
}

fn default_include_antardashas() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            script: SyllableScript::default(),
            pretty: default_pretty(),
            decimals: default_decimals(),
        }
    }
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            include_antardashas: default_include_antardashas(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl KundaliConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: KundaliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve configuration: explicit path, then `KUNDALI_CONFIG`, then
    /// `kundali.toml` in the working directory, then defaults.
    ///
    /// A path given explicitly (argument or environment) must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }
        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.decimals > 12 {
            return Err(ConfigError::Invalid(format!(
                "output.decimals must be at most 12, got {}",
                self.output.decimals
            )));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}
