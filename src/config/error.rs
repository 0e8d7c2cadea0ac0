/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// `log_level` is not a level `tracing` understands.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}
