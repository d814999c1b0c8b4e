use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tennews/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tennews").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The content base URL is http or https
    /// - Timeouts are non-zero
    /// - Swipe threshold and row height are positive, tap slop is not negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.content.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "content.base_url '{}' must start with http:// or https://",
                    self.content.base_url
                ),
            });
        }

        if self.content.timeout_seconds == 0 || self.content.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "content timeouts must be greater than zero".to_string(),
            });
        }

        let input = &self.input;
        if !(input.swipe_threshold.is_finite() && input.swipe_threshold > 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "input.swipe_threshold must be positive, got {}",
                    input.swipe_threshold
                ),
            });
        }
        if !(input.row_height_units.is_finite() && input.row_height_units > 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "input.row_height_units must be positive, got {}",
                    input.row_height_units
                ),
            });
        }
        if !(input.tap_slop.is_finite() && input.tap_slop >= 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!("input.tap_slop must not be negative, got {}", input.tap_slop),
            });
        }

        Ok(())
    }
}
