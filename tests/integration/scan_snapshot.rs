//! Scanner and snapshot persistence over generated datasets

use super::test_utils::build_dataset;
use synthfs::snapshot::Snapshot;
use synthfs::spec::DatasetSpec;
use synthfs::tree::walker::{EntryKind, Scanner};
use tempfile::TempDir;

#[test]
fn test_scan_counts_match_build_report() {
    let spec = DatasetSpec::new(3, 2, 4, 1, 512).unwrap();
    let (temp_dir, report) = build_dataset(spec, 21);

    let snapshot = Scanner::new(temp_dir.path()).unwrap().scan().unwrap();
    let summary = snapshot.summary();

    // The root itself is one of the directory entries.
    assert_eq!(summary.directories, report.directory_count + 1);
    assert_eq!(summary.files, report.file_count);
    assert_eq!(summary.file_bytes, report.total_size);
    assert_eq!(
        snapshot.entries.len() as u64,
        report.directory_count + 1 + report.file_count
    );
}

#[test]
fn test_scan_of_nested_tree_has_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("x").join("y").join("z")).unwrap();
    std::fs::write(root.join("x").join("1"), "a").unwrap();
    std::fs::write(root.join("x").join("y").join("2"), "bb").unwrap();

    let snapshot = Scanner::new(root).unwrap().scan().unwrap();
    let kinds: Vec<EntryKind> = snapshot.entries.iter().map(|e| e.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(
        kinds.iter().filter(|k| **k == EntryKind::Directory).count(),
        4
    );
}

#[test]
fn test_saved_snapshot_round_trips_through_disk() {
    let spec = DatasetSpec::new(2, 2, 3, 1, 64).unwrap();
    let (temp_dir, _) = build_dataset(spec, 5);
    let snapshot = Scanner::new(temp_dir.path())
        .unwrap()
        .with_placeholder("{DATA}")
        .scan()
        .unwrap();

    let out = TempDir::new().unwrap();
    let file = out.path().join("snapshot.json");
    snapshot.save(&file).unwrap();
    let loaded = Snapshot::load(&file).unwrap();

    assert_eq!(loaded.placeholder, "{DATA}");
    assert_eq!(loaded.entries, snapshot.entries);
    assert!(loaded
        .entries
        .iter()
        .skip(1)
        .all(|e| e.relative_path.starts_with("{DATA}/")));
}

#[test]
fn test_entries_iterator_is_lazy_and_complete() {
    let spec = DatasetSpec::new(1, 3, 2, 1, 8).unwrap();
    let (temp_dir, _) = build_dataset(spec, 9);
    let scanner = Scanner::new(temp_dir.path()).unwrap();

    let first_two: Vec<_> = scanner.entries().take(2).collect::<Result<_, _>>().unwrap();
    assert_eq!(first_two.len(), 2);
    assert!(first_two[0].is_dir());

    let all = scanner.entries().count();
    assert_eq!(all, scanner.scan().unwrap().entries.len());
}
