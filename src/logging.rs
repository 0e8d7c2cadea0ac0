//! File-based tracing setup.
//!
//! The terminal belongs to the TUI, so events go to
//! `<data_dir>/promptgen/logs/promptgen.log` instead.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Env var that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "PROMPTGEN_LOG";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,

    /// The log directory or file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}

/// Returns `<data_dir>/promptgen/logs`.
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(data_dir.join("promptgen").join("logs"))
}

/// Builds the filter: `PROMPTGEN_LOG` if set, else the configured level.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Opens (appending) the log file inside `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> Result<(fs::File, PathBuf), LoggingError> {
    fs::create_dir_all(dir)?;
    let path = dir.join("promptgen.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Installs the global subscriber writing to the default log file.
///
/// Returns the log file path.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<PathBuf, LoggingError> {
    let (file, path) = open_log_file(&default_log_dir()?)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;
    Ok(path)
}

/// Installs file logging, or warns on stderr and runs without it.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_or_warn(config: &Config) -> Option<PathBuf> {
    report_unavailable(init(config), &mut io::stderr())
}

/// Passes the log path through, or writes why logging is off to `out`.
pub fn report_unavailable(
    result: Result<PathBuf, LoggingError>,
    out: &mut impl Write,
) -> Option<PathBuf> {
    match result {
        Ok(path) => Some(path),
        Err(e) => {
            let _ = writeln!(out, "promptgen: file logging disabled: {e}");
            None
        }
    }
}
