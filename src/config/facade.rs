//! Config loading facade: assembles sources in precedence order and validates.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{global_file, workspace_file};
use super::{validation_failure, SynthConfig};
use crate::error::SynthError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`SynthConfig`] from defaults, files and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run started in `dir`.
    pub fn load(dir: &Path) -> Result<SynthConfig, SynthError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, dir)?;
        Self::finish(builder)
    }

    /// Load configuration from an explicit file; user and working-directory files are skipped.
    pub fn load_from_file(path: &Path) -> Result<SynthConfig, SynthError> {
        if !path.is_file() {
            return Err(SynthError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        Self::finish(builder)
    }

    /// Location of the user config file, if the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<SynthConfig, SynthError> {
        let config: SynthConfig = builder
            .add_source(
                Environment::with_prefix("SYNTHFS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate().map_err(validation_failure)?;
        debug!(placeholder = %config.scan.placeholder, "Configuration loaded");
        Ok(config)
    }
}
