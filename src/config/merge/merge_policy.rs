//! Merge rules: defaults applied before any file or environment source.

use crate::tree::builder::DEFAULT_WRITE_CHUNK_SIZE;
use crate::tree::path::DEFAULT_PLACEHOLDER;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("build.write_chunk_size", DEFAULT_WRITE_CHUNK_SIZE as i64)?
        .set_default("scan.placeholder", DEFAULT_PLACEHOLDER)?
        .set_default("logging.level", "info")
}
