//! Filesystem scanner: one linear pass over a tree into [`ScanEntry`] records

use crate::error::SynthError;
use crate::snapshot::Snapshot;
use crate::tree::path::{canonical_root, relative_to_placeholder, DEFAULT_PLACEHOLDER};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, instrument};
use walkdir::{DirEntry, WalkDir};

/// Entry type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One scanned directory or file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub kind: EntryKind,
    pub name: String,
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// Absolute path at scan time
    pub path: PathBuf,
    /// Absolute path of the containing directory
    pub directory: PathBuf,
    /// `path` with the scan root replaced by the placeholder
    pub relative_path: String,
    /// `directory` with the scan root replaced by the placeholder; empty for the root itself
    pub relative_directory: String,
}

impl ScanEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Filesystem scanner
pub struct Scanner {
    root: PathBuf,
    placeholder: String,
}

impl Scanner {
    /// Create a scanner for an existing directory.
    pub fn new(root: &Path) -> Result<Self, SynthError> {
        Ok(Self {
            root: canonical_root(root)?,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        })
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily enumerate the root and everything beneath it, sorted by name within each directory.
    ///
    /// Symbolic links and special files are skipped.
    pub fn entries(&self) -> impl Iterator<Item = Result<ScanEntry, SynthError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |res| match res {
                Ok(entry) => self.to_scan_entry(&entry).transpose(),
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    Some(Err(SynthError::io(path, err.into())))
                }
            })
    }

    /// Collect every entry into a snapshot.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn scan(&self) -> Result<Snapshot, SynthError> {
        let entries = self.entries().collect::<Result<Vec<_>, _>>()?;
        info!(entry_count = entries.len(), "Scan complete");
        Ok(Snapshot {
            root: self.root.clone(),
            placeholder: self.placeholder.clone(),
            scanned_at: Utc::now(),
            entries,
        })
    }

    fn to_scan_entry(&self, entry: &DirEntry) -> Result<Option<ScanEntry>, SynthError> {
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            debug!(path = %entry.path().display(), "Skipping non-regular entry");
            return Ok(None);
        };

        let path = entry.path().to_path_buf();
        let metadata = entry
            .metadata()
            .map_err(|e| SynthError::io(&path, e.into()))?;

        let is_root = entry.depth() == 0;
        let directory = match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => path.clone(),
        };
        let relative_directory = if is_root {
            String::new()
        } else {
            relative_to_placeholder(&directory, &self.root, &self.placeholder)
        };

        Ok(Some(ScanEntry {
            kind,
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            created: to_utc(metadata.created()),
            accessed: to_utc(metadata.accessed()),
            modified: to_utc(metadata.modified()),
            relative_path: relative_to_placeholder(&path, &self.root, &self.placeholder),
            relative_directory,
            path,
            directory,
        }))
    }
}

fn to_utc(time: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    time.ok().map(DateTime::<Utc>::from)
}
