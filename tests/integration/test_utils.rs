//! Shared test utilities for integration tests

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use synthfs::spec::DatasetSpec;
use synthfs::tree::builder::{BuildReport, DatasetBuilder};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Build a dataset under a fresh temp dir with a fixed seed.
pub fn build_dataset(spec: DatasetSpec, seed: u64) -> (TempDir, BuildReport) {
    let temp_dir = TempDir::new().unwrap();
    let report = DatasetBuilder::new(temp_dir.path().to_path_buf(), spec)
        .build(&mut SmallRng::seed_from_u64(seed))
        .unwrap();
    (temp_dir, report)
}

/// Flat directory with `count` files of `size` bytes each, named like generated files.
pub fn flat_dataset(count: u32, size: u64) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for i in 1..=count {
        let name = format!("{:04}{:04}.file", i, size);
        std::fs::write(temp_dir.path().join(name), vec![0u8; size as usize]).unwrap();
    }
    temp_dir
}

pub fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
