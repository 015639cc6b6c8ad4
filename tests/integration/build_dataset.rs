//! Dataset builder end-to-end behavior

use super::test_utils::{build_dataset, files_under};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use synthfs::estimate::SizeBudget;
use synthfs::spec::{DatasetSpec, SizeGauge};
use synthfs::tree::builder::{BuildOptions, DatasetBuilder};
use synthfs::tree::naming::parse_encoded_size;
use tempfile::TempDir;

#[test]
fn test_reference_budget() {
    let spec = DatasetSpec::new(3, 3, 3, 10240, 10_485_760).unwrap();
    let budget = SizeBudget::for_spec(&spec);
    assert_eq!(budget.total_dirs, 9);
    assert_eq!(budget.min_size, 92160);
    assert_eq!(budget.max_file_count, 27);
    assert_eq!(budget.max_size, 283_115_520);
}

#[test]
fn test_estimate_matches_real_build_for_same_seed() {
    let spec = DatasetSpec::new(3, 3, 5, 16, 4096).unwrap();
    let estimate = DatasetBuilder::new(PathBuf::from("/nonexistent/synthfs-estimate"), spec)
        .with_options(BuildOptions {
            estimate_only: true,
            ..BuildOptions::default()
        })
        .build(&mut SmallRng::seed_from_u64(77))
        .unwrap();

    let (_temp_dir, real) = build_dataset(spec, 77);

    assert_eq!(estimate.total_size, real.total_size);
    assert_eq!(estimate.file_count, real.file_count);
    assert_eq!(estimate.directory_count, real.directory_count);
}

#[test]
fn test_every_file_encodes_its_size() {
    let spec = DatasetSpec::new(2, 3, 6, 1, 5000).unwrap();
    let (temp_dir, report) = build_dataset(spec, 3);

    let files = files_under(temp_dir.path());
    assert_eq!(files.len() as u64, report.file_count);
    for path in files {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(".file"));
        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(parse_encoded_size(&name), Some(len), "{}", name);
        assert!((1..5000).contains(&len));
    }
}

#[test]
fn test_levels_nest_under_each_other() {
    let spec = DatasetSpec::new(2, 3, 2, 1, 10).unwrap();
    let (temp_dir, _) = build_dataset(spec, 4);

    let mut current = temp_dir.path().to_path_buf();
    for depth in 1..=3u32 {
        let depth_dirs: Vec<PathBuf> = std::fs::read_dir(&current)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with('L'))
                    .unwrap_or(false)
            })
            .collect();
        assert_eq!(depth_dirs.len(), 1, "one depth dir at level {}", depth);
        let depth_dir = depth_dirs[0].clone();
        let prefix = format!("L{:04}-", depth);
        let name = depth_dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(&prefix), "{}", name);

        let widths = std::fs::read_dir(&depth_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with('W'))
            .count();
        assert_eq!(widths, 2);
        current = depth_dir;
    }
}

#[test]
fn test_fill_with_empty_gauge_terminates() {
    let temp_dir = TempDir::new().unwrap();
    let spec = DatasetSpec::with_gauge(3, 2, 4, SizeGauge::Empty).unwrap();
    let report = DatasetBuilder::new(temp_dir.path().to_path_buf(), spec)
        .with_options(BuildOptions {
            fill_to_max: true,
            ..BuildOptions::default()
        })
        .build(&mut SmallRng::seed_from_u64(12))
        .unwrap();

    assert_eq!(report.total_size, 0);
    assert!(report.file_count >= report.budget.max_file_count);
    let files = files_under(temp_dir.path());
    assert_eq!(files.len() as u64, report.file_count);
    for path in files {
        assert_eq!(std::fs::metadata(path).unwrap().len(), 0);
    }
}

#[test]
fn test_invalid_spec_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("never");
    let spec = DatasetSpec {
        folders_width: 2,
        folders_depth: 2,
        max_files_per_dir: 2,
        min_file_size: 100,
        max_file_size: 10,
    };
    let result = DatasetBuilder::new(root.clone(), spec).build(&mut SmallRng::seed_from_u64(1));
    assert!(result.is_err());
    assert!(!root.exists());
}
