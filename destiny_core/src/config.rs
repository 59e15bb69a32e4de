//! Configuration file support for the destiny predictor.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/destiny/config.toml`.
//! Nothing in it touches prompt wording or the formula.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Result banner configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    #[serde(default = "default_banner_char")]
    pub banner_char: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner_width: default_banner_width(),
            banner_char: default_banner_char(),
        }
    }
}

impl DisplayConfig {
    /// One full banner rule, e.g. sixty `=` characters
    pub fn rule(&self) -> String {
        std::iter::repeat(self.banner_char)
            .take(self.banner_width)
            .collect()
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_banner_width() -> usize {
    60
}

fn default_banner_char() -> char {
    '='
}

fn default_log_level() -> String {
    crate::logging::DEFAULT_LEVEL.to_string()
}

/// Where a loaded configuration came from
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the standard location (if one could be determined)
    Defaults(Option<PathBuf>),
}

impl ConfigSource {
    /// Report the source. Called once logging is up, since loading
    /// happens before the subscriber exists.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults(path) => {
                tracing::info!("No config file found at {:?}, using defaults", path)
            }
        }
    }
}

impl Config {
    /// Load from `path` if given, otherwise from the standard config path
    pub fn resolve(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        match path {
            Some(path) => Ok((Self::load_from(path)?, ConfigSource::File(path.to_path_buf()))),
            None => Self::load(),
        }
    }

    /// Load configuration from the standard config path
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => {
                let config = Self::load_from(&config_path)?;
                Ok((config, ConfigSource::File(config_path)))
            }
            other => Ok((Self::default(), ConfigSource::Defaults(other))),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("destiny").join("config.toml"))
    }

    /// Reject settings that would produce unusable output
    pub fn validate(&self) -> Result<()> {
        if self.display.banner_width == 0 {
            return Err(Error::Config("display.banner_width must be at least 1".into()));
        }
        if self.display.banner_char.is_control() {
            return Err(Error::Config(
                "display.banner_char must be a printable character".into(),
            ));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
