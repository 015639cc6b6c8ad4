//! Reporter implementations: tracing, console, memory and null.

use super::event::{FileOutcome, ProgressEvent};
use crate::units::format_bytes;
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::io::Write;
use tracing::{debug, info, warn};

/// Sink for progress events
pub trait Reporter: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &ProgressEvent) {}
}

/// Forwards events to `tracing` as structured log records
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::BuildStarted {
                root,
                estimate_only,
                expected_files,
                max_size,
            } => info!(
                root = %root.display(),
                estimate_only,
                expected_files,
                max_size,
                "Build started"
            ),
            ProgressEvent::LevelStarted { depth, depth_limit } => {
                debug!(depth, depth_limit, "Depth level started")
            }
            ProgressEvent::DirectoryFilled {
                depth,
                width,
                files,
                files_done,
                files_expected,
                total_size,
            } => debug!(
                depth,
                width,
                files,
                files_done,
                files_expected,
                total_size,
                "Directory filled"
            ),
            ProgressEvent::LevelAdded {
                depth_limit,
                files_expected,
            } => info!(depth_limit, files_expected, "Extended depth to fill budget"),
            ProgressEvent::BuildFinished {
                total_size,
                file_count,
                directory_count,
            } => info!(total_size, file_count, directory_count, "Build finished"),
            ProgressEvent::MutationSelected {
                candidates,
                selected,
            } => info!(candidates, selected, "Files selected for mutation"),
            ProgressEvent::FileMutated { path, outcome } => match outcome {
                FileOutcome::Failed { error } => {
                    warn!(path = %path.display(), error = %error, "Mutation failed")
                }
                other => debug!(path = %path.display(), outcome = ?other, "File mutated"),
            },
            ProgressEvent::MutationFinished { selected, failures } => {
                info!(selected, failures, "Mutation finished")
            }
        }
    }
}

/// Writes colored progress lines to stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn line(&self, event: &ProgressEvent) -> Option<String> {
        let text = match event {
            ProgressEvent::BuildStarted {
                root,
                estimate_only,
                max_size,
                ..
            } => {
                let mode = if *estimate_only { "Estimating" } else { "Building" };
                format!("{} {} (max {})", mode, root.display(), format_bytes(*max_size))
            }
            ProgressEvent::DirectoryFilled {
                files_done,
                files_expected,
                total_size,
                ..
            } => {
                let pct = if *files_expected == 0 {
                    100.0
                } else {
                    (*files_done as f64 / *files_expected as f64 * 100.0).min(100.0)
                };
                let progress = format!("[{:>5.1}%]", pct);
                let progress = if self.color {
                    progress.cyan().to_string()
                } else {
                    progress
                };
                format!(
                    "{} {}/{} files, {}",
                    progress,
                    files_done,
                    files_expected,
                    format_bytes(*total_size)
                )
            }
            ProgressEvent::LevelAdded { depth_limit, .. } => {
                let msg = format!("Extending to depth {} to fill budget", depth_limit);
                if self.color {
                    msg.yellow().to_string()
                } else {
                    msg
                }
            }
            ProgressEvent::FileMutated {
                path,
                outcome: FileOutcome::Failed { error },
            } => {
                let msg = format!("Failed {}: {}", path.display(), error);
                if self.color {
                    msg.red().to_string()
                } else {
                    msg
                }
            }
            ProgressEvent::MutationFinished { selected, failures } => {
                let msg = format!("Mutated {} file(s), {} failure(s)", selected, failures);
                if !self.color {
                    msg
                } else if *failures == 0 {
                    msg.green().to_string()
                } else {
                    msg.yellow().to_string()
                }
            }
            _ => return None,
        };
        Some(text)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &ProgressEvent) {
        if let Some(line) = self.line(event) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().clone()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: &ProgressEvent) {
        self.events.lock().push(event.clone());
    }
}
