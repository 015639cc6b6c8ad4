//! Tree builder for synthesizing datasets on disk
//!
//! Walks a depth × width grid: every depth level is a directory nested inside
//! the previous level, and holds `foldersWidth` width directories that receive
//! the files. File counts and sizes are drawn from the injected random source;
//! file content comes from the thread-local generator so that the same seed
//! yields the same shape whether or not anything is written.

use crate::error::SynthError;
use crate::estimate::SizeBudget;
use crate::progress::{NullReporter, ProgressEvent, Reporter};
use crate::spec::{DatasetSpec, DateRange};
use crate::tree::content::{set_times, write_random_bytes};
use crate::tree::naming::{depth_dir_name, width_dir_name, FileRecord, NameClock};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Default size of the buffer used to stream random content.
pub const DEFAULT_WRITE_CHUNK_SIZE: usize = 1024 * 1024;

/// Build behavior switches
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Perform all size math but touch nothing on disk
    pub estimate_only: bool,
    /// Keep adding depth levels until the size budget is used up
    pub fill_to_max: bool,
    /// Random timestamps for written files and their directories
    pub date_range: Option<DateRange>,
    pub write_chunk_size: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            estimate_only: false,
            fill_to_max: false,
            date_range: None,
            write_chunk_size: DEFAULT_WRITE_CHUNK_SIZE,
        }
    }
}

/// Realized totals of a build (or of a simulated one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub budget: SizeBudget,
    pub total_size: u64,
    pub file_count: u64,
    pub directory_count: u64,
    /// Depth levels produced, including any added by fill-to-max
    pub levels: u32,
    /// File slots that were drawn but did not fit the size budget
    pub skipped_slots: u64,
    /// Files that already existed under the same name and were left alone
    pub existing_files: u64,
    pub existing_directories: u64,
    pub estimate_only: bool,
}

#[derive(Debug, Default)]
struct BuildState {
    total_size: u64,
    file_count: u64,
    directory_count: u64,
    skipped_slots: u64,
    existing_files: u64,
    existing_directories: u64,
    files_done: u64,
    files_expected: u64,
    /// Last timestamp applied to the current depth directory
    level_stamp: Option<DateTime<Utc>>,
    /// Depth directories and the stamp they must end the build with
    depth_stamps: Vec<(PathBuf, DateTime<Utc>)>,
}

/// Dataset builder
pub struct DatasetBuilder {
    root: PathBuf,
    spec: DatasetSpec,
    options: BuildOptions,
    clock: NameClock,
    reporter: Arc<dyn Reporter>,
}

impl DatasetBuilder {
    /// Create a builder for `spec` under `root` with default options
    pub fn new(root: PathBuf, spec: DatasetSpec) -> Self {
        Self {
            root,
            spec,
            options: BuildOptions::default(),
            clock: NameClock::new(),
            reporter: Arc::new(NullReporter),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the directory-name tag source.
    pub fn with_clock(mut self, clock: NameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn budget(&self) -> SizeBudget {
        SizeBudget::for_spec(&self.spec)
    }

    /// Build the dataset, drawing counts, sizes and timestamps from `rng`.
    ///
    /// Errors abort the build; anything already written stays on disk.
    #[instrument(skip(self, rng), fields(root = %self.root.display(), estimate_only = self.options.estimate_only))]
    pub fn build<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<BuildReport, SynthError> {
        self.spec.validate()?;
        if self.options.write_chunk_size == 0 {
            return Err(SynthError::ConfigError(
                "write chunk size must be greater than zero".to_string(),
            ));
        }

        let start = Instant::now();
        let budget = self.budget();
        info!(
            total_dirs = budget.total_dirs,
            max_file_count = budget.max_file_count,
            max_size = budget.max_size,
            "Starting dataset build"
        );

        if !self.options.estimate_only {
            fs::create_dir_all(&self.root).map_err(|e| SynthError::io(&self.root, e))?;
        }

        let mut state = BuildState {
            files_expected: budget.max_file_count,
            ..BuildState::default()
        };
        self.reporter.report(&ProgressEvent::BuildStarted {
            root: self.root.clone(),
            estimate_only: self.options.estimate_only,
            expected_files: state.files_expected,
            max_size: budget.max_size,
        });

        let mut depth_limit = self.spec.folders_depth;
        let mut depth = 1;
        let mut parent = self.root.clone();

        while depth <= depth_limit {
            self.reporter
                .report(&ProgressEvent::LevelStarted { depth, depth_limit });
            let level_start = (state.total_size, state.file_count);

            let depth_dir = parent.join(depth_dir_name(self.clock.next_tag(), depth));
            self.ensure_dir(&depth_dir, &mut state)?;

            state.level_stamp = None;
            for width in 1..=self.spec.folders_width {
                let width_dir = depth_dir.join(width_dir_name(self.clock.next_tag(), width));
                self.ensure_dir(&width_dir, &mut state)?;
                let files = self
                    .fill_directory(&depth_dir, &width_dir, &budget, &mut state, rng)
                    .map_err(|e| {
                        error!(dir = %width_dir.display(), "Failed to fill directory: {}", e);
                        e
                    })?;
                self.reporter.report(&ProgressEvent::DirectoryFilled {
                    depth,
                    width,
                    files,
                    files_done: state.files_done,
                    files_expected: state.files_expected,
                    total_size: state.total_size,
                });
            }

            if depth == depth_limit && self.options.fill_to_max && !self.budget_used(&budget, &state)
            {
                let level_bytes = state.total_size - level_start.0;
                let level_files = state.file_count - level_start.1;
                let progressed = if self.spec.max_file_size == 0 {
                    level_files > 0
                } else {
                    level_bytes > 0
                };
                match depth_limit.checked_add(1) {
                    Some(next) if progressed => {
                        depth_limit = next;
                        state.files_expected = state.files_expected.saturating_add(
                            u64::from(self.spec.max_files_per_dir)
                                * u64::from(self.spec.folders_width),
                        );
                        self.reporter.report(&ProgressEvent::LevelAdded {
                            depth_limit,
                            files_expected: state.files_expected,
                        });
                    }
                    _ => debug!(depth, "Level added nothing, fill stops here"),
                }
            }

            if let Some(ts) = state.level_stamp.take() {
                state.depth_stamps.push((depth_dir.clone(), ts));
            }
            parent = depth_dir;
            depth += 1;
        }

        // Child creation resets a directory's mtime, so depth stamps go last.
        for (dir, ts) in &state.depth_stamps {
            set_times(dir, *ts).map_err(|e| SynthError::io(dir, e))?;
        }

        let report = BuildReport {
            budget,
            total_size: state.total_size,
            file_count: state.file_count,
            directory_count: state.directory_count,
            levels: depth_limit,
            skipped_slots: state.skipped_slots,
            existing_files: state.existing_files,
            existing_directories: state.existing_directories,
            estimate_only: self.options.estimate_only,
        };
        self.reporter.report(&ProgressEvent::BuildFinished {
            total_size: report.total_size,
            file_count: report.file_count,
            directory_count: report.directory_count,
        });
        info!(
            total_size = report.total_size,
            file_count = report.file_count,
            levels = report.levels,
            duration_ms = start.elapsed().as_millis(),
            "Dataset build complete"
        );
        Ok(report)
    }

    /// Fill target for fill-to-max: bytes normally, file count when files are empty.
    fn budget_used(&self, budget: &SizeBudget, state: &BuildState) -> bool {
        if self.spec.max_file_size == 0 {
            state.file_count >= budget.max_file_count
        } else {
            state.total_size >= budget.max_size
        }
    }

    fn ensure_dir(&self, path: &Path, state: &mut BuildState) -> Result<(), SynthError> {
        state.directory_count += 1;
        if self.options.estimate_only {
            return Ok(());
        }
        if path.is_dir() {
            state.existing_directories += 1;
            debug!(path = %path.display(), "Directory exists, reusing");
            return Ok(());
        }
        fs::create_dir(path).map_err(|e| SynthError::io(path, e))
    }

    /// Populate one width directory and return how many file slots it got.
    fn fill_directory<R: Rng + ?Sized>(
        &self,
        depth_dir: &Path,
        width_dir: &Path,
        budget: &SizeBudget,
        state: &mut BuildState,
        rng: &mut R,
    ) -> Result<u32, SynthError> {
        let max_files = self.spec.max_files_per_dir;
        let slots = if max_files == 1 {
            1
        } else {
            rng.gen_range(1..max_files)
        };
        state.files_expected = state
            .files_expected
            .saturating_sub(u64::from(max_files - slots));

        let (min, max) = (self.spec.min_file_size, self.spec.max_file_size);
        for sequence in 1..=slots {
            let size = if min == max { min } else { rng.gen_range(min..max) };
            state.files_done += 1;

            if state.total_size.saturating_add(size) > budget.max_size {
                state.skipped_slots += 1;
                continue;
            }

            let stamp = self.options.date_range.map(|range| range.sample(rng));
            if !self.options.estimate_only {
                let record = FileRecord::new(sequence, size);
                let path = width_dir.join(record.file_name(self.spec.max_file_size));
                if path.exists() {
                    state.existing_files += 1;
                } else {
                    self.write_file(&path, size)?;
                    if let Some(ts) = stamp {
                        for target in [path.as_path(), width_dir, depth_dir] {
                            set_times(target, ts).map_err(|e| SynthError::io(target, e))?;
                        }
                        state.level_stamp = Some(ts);
                    }
                }
            }

            state.total_size += size;
            state.file_count += 1;
        }
        Ok(slots)
    }

    fn write_file(&self, path: &Path, size: u64) -> Result<(), SynthError> {
        let file = fs::File::create(path).map_err(|e| SynthError::io(path, e))?;
        let mut writer = BufWriter::with_capacity(self.options.write_chunk_size, file);
        write_random_bytes(
            &mut writer,
            size,
            self.options.write_chunk_size,
            &mut rand::thread_rng(),
        )
        .map_err(|e| SynthError::io(path, e))
    }
}
