//! Optional user configuration, read from `<config_dir>/promptgen/config.toml`.
//!
//! Every key is optional; a missing file means defaults.

mod error;

pub use error::ConfigError;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::model::Tab;

/// Longest transient display honoured, in seconds.
const MAX_DISPLAY_SECS: u64 = 3600;

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default log filter when `PROMPTGEN_LOG` is unset.
    pub log_level: String,
    /// How long copy notifications stay on screen.
    pub notification_secs: u64,
    /// How long the "Copied!" indicator stays on after a successful copy.
    pub copied_indicator_secs: u64,
    /// Tab shown at startup.
    pub start_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notification_secs: 3,
            copied_indicator_secs: 2,
            start_tab: Tab::Ui,
        }
    }
}

impl Config {
    /// Returns `<config_dir>/promptgen/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("promptgen").join("config.toml"))
    }

    /// Loads from [`default_path`](Self::default_path), falling back to defaults.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Parses `log_level` as a tracing level filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn notification_duration(&self) -> TimeDelta {
        seconds(self.notification_secs)
    }

    pub fn copied_indicator_duration(&self) -> TimeDelta {
        seconds(self.copied_indicator_secs)
    }
}

fn seconds(secs: u64) -> TimeDelta {
    TimeDelta::seconds(secs.min(MAX_DISPLAY_SECS) as i64)
}
