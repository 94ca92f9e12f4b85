//! Domain error types for spark
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for configuration loading
//! - `SparkError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for spark
#[derive(Debug, Error)]
pub enum SparkError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type alias for SparkError
pub type Result<T> = std::result::Result<T, SparkError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
