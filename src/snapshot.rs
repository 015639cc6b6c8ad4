//! Scan snapshots: in-memory enumeration of a tree, persisted as JSON.

use crate::error::SynthError;
use crate::tree::path::resolve_placeholder;
use crate::tree::walker::ScanEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Result of one scan pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Canonical root the scan ran against
    pub root: PathBuf,
    /// Token standing in for `root` in relative paths
    pub placeholder: String,
    pub scanned_at: DateTime<Utc>,
    pub entries: Vec<ScanEntry>,
}

/// Directory and file counts with their summed sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub directories: u64,
    pub directory_bytes: u64,
    pub files: u64,
    pub file_bytes: u64,
}

impl Snapshot {
    pub fn files(&self) -> impl Iterator<Item = &ScanEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn summary(&self) -> SnapshotSummary {
        self.entries
            .iter()
            .fold(SnapshotSummary::default(), |mut acc, entry| {
                if entry.is_file() {
                    acc.files += 1;
                    acc.file_bytes += entry.size;
                } else {
                    acc.directories += 1;
                    acc.directory_bytes += entry.size;
                }
                acc
            })
    }

    /// Location of `entry` under `root`, which need not be the root the scan ran against.
    ///
    /// `None` when the entry's relative path does not carry this snapshot's
    /// placeholder or would leave `root`.
    pub fn resolve(&self, entry: &ScanEntry, root: &Path) -> Option<PathBuf> {
        resolve_placeholder(&entry.relative_path, root, &self.placeholder)
    }

    pub fn save(&self, path: &Path) -> Result<(), SynthError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SynthError::io(parent, e))?;
        }
        let file = fs::File::create(path).map_err(|e| SynthError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| SynthError::io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, SynthError> {
        let file = fs::File::open(path).map_err(|e| SynthError::io(path, e))?;
        let snapshot = serde_json::from_reader(BufReader::new(file))?;
        Ok(snapshot)
    }
}
