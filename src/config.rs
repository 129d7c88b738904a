//! Configuration file support for the viewer.
//!
//! Serialization and deserialization of application settings: document
//! paths, asset prefix, theme, and log verbosity. Configuration is loaded
//! once at startup; everything else in the viewer is session state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::LoadError;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Document locations
    #[serde(default)]
    pub data: DataPaths,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Where the startup documents and tile assets live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Detections document
    #[serde(default = "default_detections_path")]
    pub detections: String,

    /// Tiles document; absent for the single-image variant
    #[serde(default = "default_tiles_path")]
    pub tiles: Option<String>,

    /// Optional run-metrics document
    #[serde(default)]
    pub metrics: Option<String>,

    /// Prefix the rendering layer resolves tile filenames against
    #[serde(default = "default_tile_asset_prefix")]
    pub tile_asset_prefix: String,
}

fn default_detections_path() -> String {
    "detections/detections_15_tiles.json".to_string()
}

fn default_tiles_path() -> Option<String> {
    Some("tiles/tiles.json".to_string())
}

fn default_tile_asset_prefix() -> String {
    "tiles/".to_string()
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            detections: default_detections_path(),
            tiles: default_tiles_path(),
            metrics: None,
            tile_asset_prefix: default_tile_asset_prefix(),
        }
    }
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Dark theme enabled
    #[serde(default = "default_dark_theme")]
    pub dark_theme: bool,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_dark_theme() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_theme: default_dark_theme(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: DataPaths::default(),
            preferences: UserPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Serialize to pretty JSON for writing back out.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
