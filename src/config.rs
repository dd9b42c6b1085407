//! Configuration loading
//!
//! Read from a TOML file (`teacher-insights.toml` by default). Every field is
//! optional; a missing or broken file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::DEFAULT_RECENT_LIMIT;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "teacher-insights.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// External CSV export; the seed dataset is used when it is absent or unusable
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// How many items the recent-activity feed returns
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            recent_limit: default_recent_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data/teacher_activity.csv")
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load from `path`, falling back to defaults when the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(Error::Io(e)) => {
                tracing::info!(path = %path.display(), "No config file read ({e}), using defaults");
                Config::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to parse config: {e}, using defaults"
                );
                Config::default()
            }
        }
    }
}
