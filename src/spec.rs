//! Dataset specification: shape, size bounds, gauges and date ranges.
//!
//! A [`DatasetSpec`] is the validated, immutable input of a build. It is
//! usually resolved from a [`SpecFile`] (the loose JSON record) and an
//! optional [`SizeGauge`] that substitutes the file size bounds.

mod dates;
mod gauge;
mod loader;

pub use dates::{parse_date, DateRange};
pub use gauge::SizeGauge;
pub use loader::{SizeValue, SpecFile};

use crate::error::SynthError;
use serde::{Deserialize, Serialize};

/// Upper limit for `maxFilesPerDir`; file names reserve four digits for the sequence.
pub const MAX_FILES_PER_DIR_LIMIT: u32 = 9999;

/// Validated dataset shape and file size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    pub folders_width: u32,
    pub folders_depth: u32,
    pub max_files_per_dir: u32,
    pub min_file_size: u64,
    pub max_file_size: u64,
}

impl DatasetSpec {
    /// Create and validate a spec with explicit file size bounds.
    pub fn new(
        folders_width: u32,
        folders_depth: u32,
        max_files_per_dir: u32,
        min_file_size: u64,
        max_file_size: u64,
    ) -> Result<Self, SynthError> {
        let spec = Self {
            folders_width,
            folders_depth,
            max_files_per_dir,
            min_file_size,
            max_file_size,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Create a spec whose file size bounds come from a gauge.
    pub fn with_gauge(
        folders_width: u32,
        folders_depth: u32,
        max_files_per_dir: u32,
        gauge: SizeGauge,
    ) -> Result<Self, SynthError> {
        let (min, max) = gauge.bounds();
        Self::new(folders_width, folders_depth, max_files_per_dir, min, max)
    }

    /// Resolve a loaded spec record, substituting the gauge bounds when a gauge is given.
    ///
    /// Without a gauge all five fields are required; with a gauge only the
    /// shape fields are.
    pub fn resolve(raw: &SpecFile, gauge: Option<SizeGauge>) -> Result<Self, SynthError> {
        let mut missing = Vec::new();
        if raw.folders_width.is_none() {
            missing.push("foldersWidth");
        }
        if raw.folders_depth.is_none() {
            missing.push("foldersDepth");
        }
        if raw.max_files_per_dir.is_none() {
            missing.push("maxFilesPerDir");
        }
        if gauge.is_none() {
            if raw.min_file_size.is_none() {
                missing.push("minFileSize");
            }
            if raw.max_file_size.is_none() {
                missing.push("maxFileSize");
            }
        }
        if !missing.is_empty() {
            let case = if gauge.is_some() { "gauge" } else { "plain" };
            return Err(SynthError::InvalidSpec(format!(
                "missing required field(s) for {} spec: {}",
                case,
                missing.join(", ")
            )));
        }

        let width = raw.folders_width.unwrap_or_default();
        let depth = raw.folders_depth.unwrap_or_default();
        let max_files = raw.max_files_per_dir.unwrap_or_default();

        match gauge {
            Some(gauge) => Self::with_gauge(width, depth, max_files, gauge),
            None => {
                let min = raw.min_file_size.as_ref().map(SizeValue::bytes).transpose()?;
                let max = raw.max_file_size.as_ref().map(SizeValue::bytes).transpose()?;
                Self::new(
                    width,
                    depth,
                    max_files,
                    min.unwrap_or_default(),
                    max.unwrap_or_default(),
                )
            }
        }
    }

    /// Check the spec invariants.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.folders_width == 0 {
            return Err(SynthError::InvalidSpec(
                "foldersWidth must be at least 1".to_string(),
            ));
        }
        if self.folders_depth == 0 {
            return Err(SynthError::InvalidSpec(
                "foldersDepth must be at least 1".to_string(),
            ));
        }
        if self.max_files_per_dir == 0 || self.max_files_per_dir > MAX_FILES_PER_DIR_LIMIT {
            return Err(SynthError::InvalidSpec(format!(
                "maxFilesPerDir must be between 1 and {}, got {}",
                MAX_FILES_PER_DIR_LIMIT, self.max_files_per_dir
            )));
        }
        if self.min_file_size > self.max_file_size {
            return Err(SynthError::InvalidSpec(format!(
                "minFileSize ({}) is greater than maxFileSize ({})",
                self.min_file_size, self.max_file_size
            )));
        }
        Ok(())
    }
}
