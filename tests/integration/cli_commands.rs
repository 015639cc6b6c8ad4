//! End-to-end command routing: build, scan and mutate through RunContext

use super::test_utils::files_under;
use clap::Parser;
use std::sync::Arc;
use synthfs::cli::{Cli, RunContext};
use synthfs::config::SynthConfig;
use synthfs::error::SynthError;
use synthfs::progress::{MemoryReporter, ProgressEvent};
use synthfs::snapshot::Snapshot;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, SynthError> {
    let cli = Cli::try_parse_from(args).unwrap();
    RunContext::from_config(SynthConfig::default())
        .with_seed(cli.seed)
        .execute(&cli.command)
}

#[test]
fn test_build_scan_mutate_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    let root_str = root.to_str().unwrap();
    let snapshot_file = temp_dir.path().join("scan.json");
    let snapshot_str = snapshot_file.to_str().unwrap();

    let built = run(&[
        "synthfs", "--seed", "3", "build", "--root", root_str, "--width", "2", "--depth", "2",
        "--max-files", "5", "--min-size", "1", "--max-size", "2KB",
    ])
    .unwrap();
    assert!(built.starts_with("Built "));
    let files = files_under(&root);
    assert!(!files.is_empty());

    let scanned = run(&[
        "synthfs", "scan", "--root", root_str, "--output", snapshot_str,
    ])
    .unwrap();
    assert!(scanned.contains("Snapshot written to"));
    let snapshot = Snapshot::load(&snapshot_file).unwrap();
    assert_eq!(snapshot.files().count(), files.len());

    let mutated = run(&[
        "synthfs", "--seed", "4", "mutate", "--root", root_str, "--perc-files", "100",
        "--perc-data", "100", "--snapshot", snapshot_str,
    ])
    .unwrap();
    assert!(mutated.starts_with(&format!("Selected {} of {} files", files.len(), files.len())));
    assert_eq!(files_under(&root), files);
}

#[test]
fn test_spec_file_with_inline_override() {
    let temp_dir = TempDir::new().unwrap();
    let spec_file = temp_dir.path().join("spec.json");
    std::fs::write(
        &spec_file,
        r#"{"foldersWidth": 3, "foldersDepth": 3, "maxFilesPerDir": 3, "minFileSize": "10KB", "maxFileSize": 10485760}"#,
    )
    .unwrap();

    let out = run(&[
        "synthfs", "--seed", "1", "build", "--root", "/nonexistent/spec-file", "--spec",
        spec_file.to_str().unwrap(), "--estimate",
    ])
    .unwrap();
    assert!(out.contains("Minimum:   90.00 KB (9 files)"));
    assert!(out.contains("Maximum:   270.00 MB (27 files)"));

    let narrowed = run(&[
        "synthfs", "--seed", "1", "build", "--root", "/nonexistent/spec-file", "--spec",
        spec_file.to_str().unwrap(), "--estimate", "--width", "1",
    ])
    .unwrap();
    assert!(narrowed.contains("Minimum:   30.00 KB (3 files)"));
}

#[test]
fn test_estimate_is_reproducible_with_seed() {
    let args = [
        "synthfs", "--seed", "42", "build", "--root", "/nonexistent/repro", "--estimate",
        "--width", "4", "--depth", "3", "--max-files", "20", "--gauge", "small",
    ];
    assert_eq!(run(&args).unwrap(), run(&args).unwrap());
}

#[test]
fn test_unknown_gauge_is_invalid_spec() {
    let result = run(&[
        "synthfs", "build", "--root", "/nonexistent/gauge", "--estimate", "--width", "1",
        "--depth", "1", "--max-files", "1", "--gauge", "gigantic",
    ]);
    assert!(matches!(result, Err(SynthError::InvalidSpec(_))));
}

#[test]
fn test_build_reports_progress_events() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("progress");
    let cli = Cli::try_parse_from([
        "synthfs", "build", "--root", root.to_str().unwrap(), "--width", "2", "--depth", "1",
        "--max-files", "3", "--gauge", "tiny", "--min-date", "2015-01-01", "--max-date",
        "2015-12-31",
    ])
    .unwrap();
    let reporter = Arc::new(MemoryReporter::new());
    RunContext::from_config(SynthConfig::default())
        .with_reporter(reporter.clone())
        .execute(&cli.command)
        .unwrap();

    let events = reporter.events();
    assert!(matches!(events.first(), Some(ProgressEvent::BuildStarted { .. })));
    assert!(matches!(events.last(), Some(ProgressEvent::BuildFinished { .. })));
    let filled = events
        .iter()
        .filter(|e| matches!(e, ProgressEvent::DirectoryFilled { .. }))
        .count();
    assert_eq!(filled, 2);
}

#[test]
fn test_reversed_dates_rejected() {
    let result = run(&[
        "synthfs", "build", "--root", "/nonexistent/dates", "--estimate", "--width", "1",
        "--depth", "1", "--max-files", "1", "--gauge", "tiny", "--min-date", "2020-01-01",
        "--max-date", "2019-01-01",
    ]);
    assert!(result.is_err());
}
