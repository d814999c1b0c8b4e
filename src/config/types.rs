use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::slides::markup::MarkupMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the digest comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the content provider; `/api/news` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Gesture thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Minimum vertical drag, in units, that counts as a swipe (default: 50).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Units per terminal row when converting mouse rows to drag distance
    /// (default: 16).
    #[serde(default = "default_row_height_units")]
    pub row_height_units: f64,
    /// Largest drag, in units, still treated as a tap (default: 0).
    #[serde(default)]
    pub tap_slop: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub raw_markup: MarkupMode,
    /// Show the "next story" hint until the first forward move.
    #[serde(default = "default_true")]
    pub show_hint: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Defaults to `<cache dir>/tennews/tennews.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_row_height_units() -> f64 {
    16.0
}

fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            row_height_units: default_row_height_units(),
            tap_slop: 0.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            raw_markup: MarkupMode::default(),
            show_hint: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_filter(),
        }
    }
}
