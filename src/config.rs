//! Configuration System
//!
//! Layered configuration built on the `config` crate. Sources, lowest to
//! highest precedence: built-in defaults, the user config file, the
//! working-directory `synthfs.toml` (plus `synthfs.{SYNTHFS_ENV}.toml`), and
//! `SYNTHFS__SECTION__KEY` environment variables.

use crate::error::SynthError;
use crate::logging::LoggingConfig;
use crate::spec::SizeGauge;
use crate::tree::builder::DEFAULT_WRITE_CHUNK_SIZE;
use crate::tree::path::DEFAULT_PLACEHOLDER;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Dataset build settings
    #[serde(default)]
    pub build: BuildSettings,

    /// Scan settings
    #[serde(default)]
    pub scan: ScanSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Build and mutation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Seed for every random draw; unset means a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Gauge used when neither the CLI nor the spec gives file sizes
    #[serde(default)]
    pub default_gauge: Option<SizeGauge>,

    /// Buffer size for streaming random content to disk
    #[serde(default = "default_write_chunk_size")]
    pub write_chunk_size: usize,
}

fn default_write_chunk_size() -> usize {
    DEFAULT_WRITE_CHUNK_SIZE
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            seed: None,
            default_gauge: None,
            write_chunk_size: default_write_chunk_size(),
        }
    }
}

/// Scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Token substituted for the scan root in relative paths
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Build(String),
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Build(msg) => write!(f, "build: {}", msg),
            ValidationError::Scan(msg) => write!(f, "scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SynthConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.build.write_chunk_size == 0 {
            errors.push(ValidationError::Build(
                "write_chunk_size must be greater than zero".to_string(),
            ));
        }

        let placeholder = &self.scan.placeholder;
        if placeholder.is_empty() {
            errors.push(ValidationError::Scan("placeholder cannot be empty".to_string()));
        } else if placeholder.contains('/') || placeholder.contains('\\') {
            errors.push(ValidationError::Scan(format!(
                "placeholder '{}' must not contain a path separator",
                placeholder
            )));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}'",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SynthError> {
        toml::to_string_pretty(self).map_err(|e| SynthError::Serialization(e.to_string()))
    }
}

pub(crate) fn validation_failure(errors: Vec<ValidationError>) -> SynthError {
    let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    SynthError::ConfigError(format!(
        "Configuration validation failed:\n{}",
        msgs.join("\n")
    ))
}
