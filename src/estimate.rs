//! Size Estimator
//!
//! Pure size arithmetic over a [`DatasetSpec`]. The estimate-only build and the
//! real build both derive their bounds from here, so an estimate is a true
//! preview of the envelope a build works within.

use crate::spec::DatasetSpec;
use serde::{Deserialize, Serialize};

/// Size and file-count envelope of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBudget {
    /// Width directories across all depth levels (`depth × width`)
    pub total_dirs: u64,
    /// One minimum-size file per directory
    pub min_size: u64,
    /// `maxFilesPerDir × total_dirs`
    pub max_file_count: u64,
    /// Every possible file at maximum size; the builder never exceeds it
    pub max_size: u64,
}

impl SizeBudget {
    pub fn for_spec(spec: &DatasetSpec) -> Self {
        let total_dirs = u64::from(spec.folders_depth) * u64::from(spec.folders_width);
        let max_file_count = u64::from(spec.max_files_per_dir).saturating_mul(total_dirs);
        Self {
            total_dirs,
            min_size: spec.min_file_size.saturating_mul(total_dirs),
            max_file_count,
            max_size: spec.max_file_size.saturating_mul(max_file_count),
        }
    }
}
