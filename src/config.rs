//! Application configuration, parsed from a TOML file.
//!
//! Every value has a default matching the stock app behavior (1 h
//! decision and marker windows, 24 h stats, local store file), so the
//! service runs with no config file at all. A present-but-corrupt file
//! is logged and replaced by defaults rather than aborting.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::logging::{self, LogLevel};
use crate::model::HOUR_MS;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "plagemon.toml";

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub windows: WindowsConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
}

/// Aggregation window durations. The engine takes windows as
/// parameters; these are the values the screens pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Decision window for detail screens, in minutes.
    pub decision_minutes: i64,
    /// Marker window for the map overview, in minutes.
    pub marker_minutes: i64,
    /// Tally window for daily stats, in hours.
    pub stats_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Report store file path.
    pub path: String,
    /// Seed the store with sample reports when it cannot be loaded.
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "debug", "info", "warn", "error".
    pub level: String,
    /// Optional log file; console-only when absent.
    pub file: Option<String>,
    /// Include timestamps in console output.
    pub timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            windows: WindowsConfig::default(),
            store: StoreConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for WindowsConfig {
    fn default() -> Self {
        WindowsConfig {
            decision_minutes: 60,
            marker_minutes: 60,
            stats_hours: 24,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            // Same key the web variant used in browser storage.
            path: "gwada_reports_v1.json".to_string(),
            seed_sample_data: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
            timestamps: true,
        }
    }
}

impl WindowsConfig {
    pub fn decision_window_ms(&self) -> i64 {
        self.decision_minutes * 60_000
    }

    pub fn marker_window_ms(&self) -> i64 {
        self.marker_minutes * 60_000
    }

    pub fn stats_window_ms(&self) -> i64 {
        self.stats_hours * HOUR_MS
    }
}

impl LogConfig {
    /// Parses the configured level, defaulting to Info on anything
    /// unrecognized.
    pub fn min_level(&self) -> LogLevel {
        match self.level.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid TOML for the expected schema.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Loads configuration, falling back to defaults on any failure.
/// A missing file logs at debug (running unconfigured is normal); a
/// corrupt one logs as unexpected.
pub fn load_or_default(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    match load(path) {
        Ok(config) => config,
        Err(e) => {
            logging::log_config_failure(&path.display().to_string(), "load", &e);
            Config::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
