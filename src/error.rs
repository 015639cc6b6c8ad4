//! Error types for dataset synthesis, scanning and mutation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by every synthfs operation
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Invalid dataset specification: {0}")]
    InvalidSpec(String),

    #[error("Path not found or not a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid percentage for {name}: {value} (allowed range {range})")]
    InvalidPercentage {
        name: &'static str,
        value: i64,
        range: &'static str,
    },

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SynthError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SynthError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for SynthError {
    fn from(err: config::ConfigError) -> Self {
        SynthError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for SynthError {
    fn from(err: serde_json::Error) -> Self {
        SynthError::Serialization(err.to_string())
    }
}
