//! Event schema for build and mutation progress.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one selected file during a mutation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Rewritten { bytes: u64 },
    Backdated,
    Unchanged,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    BuildStarted {
        root: PathBuf,
        estimate_only: bool,
        expected_files: u64,
        max_size: u64,
    },
    LevelStarted {
        depth: u32,
        depth_limit: u32,
    },
    DirectoryFilled {
        depth: u32,
        width: u32,
        files: u32,
        files_done: u64,
        files_expected: u64,
        total_size: u64,
    },
    LevelAdded {
        depth_limit: u32,
        files_expected: u64,
    },
    BuildFinished {
        total_size: u64,
        file_count: u64,
        directory_count: u64,
    },
    MutationSelected {
        candidates: usize,
        selected: usize,
    },
    FileMutated {
        path: PathBuf,
        outcome: FileOutcome,
    },
    MutationFinished {
        selected: usize,
        failures: usize,
    },
}
