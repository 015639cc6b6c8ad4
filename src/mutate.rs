//! Mutation engine: simulated churn over an existing dataset
//!
//! A pass picks `ceil(files × percFiles / 100)` distinct files from a scan
//! snapshot, then either backdates each of them or rewrites a share of its
//! content. Selection always completes before the first write.

use crate::error::SynthError;
use crate::progress::{FileOutcome, NullReporter, ProgressEvent, Reporter};
use crate::snapshot::Snapshot;
use crate::tree::builder::DEFAULT_WRITE_CHUNK_SIZE;
use crate::tree::content::{set_times, write_random_bytes};
use crate::tree::naming::parse_encoded_size;
use crate::tree::path::canonical_root;
use crate::tree::walker::ScanEntry;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Parameters of one mutation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationPlan {
    perc_files: u32,
    perc_data: u32,
    backdate: Option<DateTime<Utc>>,
}

impl MutationPlan {
    /// `perc_files` must be within 1–100 and `perc_data` within 0–150.
    pub fn new(perc_files: u32, perc_data: u32) -> Result<Self, SynthError> {
        if !(1..=100).contains(&perc_files) {
            return Err(SynthError::InvalidPercentage {
                name: "percFiles",
                value: i64::from(perc_files),
                range: "1-100",
            });
        }
        if perc_data > 150 {
            return Err(SynthError::InvalidPercentage {
                name: "percData",
                value: i64::from(perc_data),
                range: "0-150",
            });
        }
        Ok(Self {
            perc_files,
            perc_data,
            backdate: None,
        })
    }

    /// Backdate selected files to `ts` instead of rewriting their content.
    pub fn with_backdate(mut self, ts: DateTime<Utc>) -> Self {
        self.backdate = Some(ts);
        self
    }

    pub fn perc_files(&self) -> u32 {
        self.perc_files
    }

    pub fn perc_data(&self) -> u32 {
        self.perc_data
    }

    pub fn backdate(&self) -> Option<DateTime<Utc>> {
        self.backdate
    }

    /// Number of files picked out of `file_count`, rounded up.
    pub fn selection_size(&self, file_count: usize) -> usize {
        let wanted = (file_count as u128 * u128::from(self.perc_files)).div_ceil(100);
        (wanted as usize).min(file_count)
    }

    /// Bytes to write for a file of `size` bytes named `name`.
    ///
    /// Content is overwritten from offset 0 without truncating, so a result
    /// above the current size grows the file. At exactly 100% the size encoded
    /// in a generated file name wins and the file is cut to that length, which
    /// restores it to the length it was built with.
    pub fn change_bytes(&self, size: u64, name: &str) -> u64 {
        let scaled = (u128::from(size) * u128::from(self.perc_data) / 100) as u64;
        if self.perc_data == 100 {
            parse_encoded_size(name).unwrap_or(scaled)
        } else {
            scaled
        }
    }
}

/// One file the pass could not mutate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a mutation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReport {
    pub candidates: usize,
    pub selected: Vec<PathBuf>,
    pub rewritten: usize,
    pub backdated: usize,
    pub unchanged: usize,
    pub bytes_written: u64,
    pub failures: Vec<MutationFailure>,
}

/// Mutation engine
pub struct Mutator {
    plan: MutationPlan,
    write_chunk_size: usize,
    reporter: Arc<dyn Reporter>,
}

impl Mutator {
    pub fn new(plan: MutationPlan) -> Self {
        Self {
            plan,
            write_chunk_size: DEFAULT_WRITE_CHUNK_SIZE,
            reporter: Arc::new(NullReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_write_chunk_size(mut self, write_chunk_size: usize) -> Self {
        self.write_chunk_size = write_chunk_size.max(1);
        self
    }

    /// Pick distinct file entries uniformly at random.
    pub fn select<'s, R: Rng + ?Sized>(
        &self,
        snapshot: &'s Snapshot,
        rng: &mut R,
    ) -> Vec<&'s ScanEntry> {
        let files: Vec<&ScanEntry> = snapshot.files().collect();
        let amount = self.plan.selection_size(files.len());
        rand::seq::index::sample(rng, files.len(), amount)
            .into_iter()
            .map(|i| files[i])
            .collect()
    }

    /// Run the pass against the tree at `root`.
    ///
    /// Entries are located under `root` through their placeholder-relative
    /// paths, so a snapshot taken of one copy of a dataset can drive another.
    /// An entry that does not resolve under `root` is never written; it is
    /// recorded as a failure like any other per-file error, and the pass goes on.
    #[instrument(skip(self, snapshot, rng), fields(root = %root.display()))]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        snapshot: &Snapshot,
        root: &Path,
        rng: &mut R,
    ) -> Result<MutationReport, SynthError> {
        let root = canonical_root(root)?;
        let selected = self.select(snapshot, rng);
        let mut report = MutationReport {
            candidates: snapshot.files().count(),
            ..MutationReport::default()
        };
        self.reporter.report(&ProgressEvent::MutationSelected {
            candidates: report.candidates,
            selected: selected.len(),
        });
        info!(
            candidates = report.candidates,
            selected = selected.len(),
            perc_data = self.plan.perc_data,
            backdate = self.plan.backdate.is_some(),
            "Starting mutation pass"
        );

        for entry in selected {
            let resolved = snapshot.resolve(entry, &root);
            let result = match resolved {
                Some(ref path) => self.mutate_file(path, entry),
                None => Err(SynthError::InvalidSpec(format!(
                    "snapshot entry '{}' does not resolve under {}",
                    entry.relative_path,
                    root.display()
                ))),
            };
            let path = resolved.unwrap_or_else(|| PathBuf::from(&entry.relative_path));
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(path = %path.display(), "Mutation failed: {}", e);
                    FileOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            match &outcome {
                FileOutcome::Rewritten { bytes } => {
                    report.rewritten += 1;
                    report.bytes_written += bytes;
                }
                FileOutcome::Backdated => report.backdated += 1,
                FileOutcome::Unchanged => report.unchanged += 1,
                FileOutcome::Failed { error } => report.failures.push(MutationFailure {
                    path: path.clone(),
                    error: error.clone(),
                }),
            }
            self.reporter.report(&ProgressEvent::FileMutated {
                path: path.clone(),
                outcome,
            });
            report.selected.push(path);
        }

        self.reporter.report(&ProgressEvent::MutationFinished {
            selected: report.selected.len(),
            failures: report.failures.len(),
        });
        Ok(report)
    }

    fn mutate_file(&self, path: &Path, entry: &ScanEntry) -> Result<FileOutcome, SynthError> {
        if let Some(ts) = self.plan.backdate {
            set_times(path, ts).map_err(|e| SynthError::io(path, e))?;
            return Ok(FileOutcome::Backdated);
        }

        let bytes = self.plan.change_bytes(entry.size, &entry.name);
        if bytes == 0 {
            return Ok(FileOutcome::Unchanged);
        }

        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| SynthError::io(path, e))?;
        write_random_bytes(
            &mut file,
            bytes,
            self.write_chunk_size,
            &mut rand::thread_rng(),
        )
        .map_err(|e| SynthError::io(path, e))?;
        if self.plan.perc_data == 100 {
            file.set_len(bytes).map_err(|e| SynthError::io(path, e))?;
        }
        Ok(FileOutcome::Rewritten { bytes })
    }
}
