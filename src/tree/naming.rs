//! File and directory naming for synthesized trees.
//!
//! File names carry the size chosen at build time so a later mutation pass can
//! restore a file to its original length without any side table:
//! `{sequence:04}{size:0W}.file`, where `W` is the digit count of the spec's
//! maximum file size.

use std::time::{SystemTime, UNIX_EPOCH};

pub const FILE_EXTENSION: &str = ".file";
const SEQUENCE_DIGITS: usize = 4;

/// A synthesized file: its position in the directory and its chosen size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRecord {
    pub sequence: u32,
    pub size: u64,
}

impl FileRecord {
    pub fn new(sequence: u32, size: u64) -> Self {
        Self { sequence, size }
    }

    pub fn file_name(&self, max_file_size: u64) -> String {
        format!(
            "{:0seq$}{:0width$}{}",
            self.sequence,
            self.size,
            FILE_EXTENSION,
            seq = SEQUENCE_DIGITS,
            width = size_width(max_file_size)
        )
    }
}

/// Decimal digits needed to print `max_file_size`.
pub fn size_width(max_file_size: u64) -> usize {
    max_file_size.to_string().len()
}

/// Recover the size encoded in a generated file name.
///
/// Returns `None` for names that were not produced by [`FileRecord::file_name`].
pub fn parse_encoded_size(name: &str) -> Option<u64> {
    let stem = name.strip_suffix(FILE_EXTENSION)?;
    if stem.len() <= SEQUENCE_DIGITS || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem[SEQUENCE_DIGITS..].parse().ok()
}

/// Monotonic, time-derived tag source for directory names
///
/// Each tag is `max(now in microseconds, previous + 1)`, so names stay unique
/// within a run and across repeated runs against the same root.
#[derive(Debug, Clone)]
pub struct NameClock {
    last: Option<u64>,
    fixed_start: Option<u64>,
}

impl NameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            fixed_start: None,
        }
    }

    /// A clock that ignores wall time and counts up from `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            last: None,
            fixed_start: Some(start),
        }
    }

    pub fn next_tag(&mut self) -> u64 {
        let candidate = match self.fixed_start {
            Some(start) => start,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_micros() as u64)
                .unwrap_or(0),
        };
        let tag = match self.last {
            Some(last) => candidate.max(last.saturating_add(1)),
            None => candidate,
        };
        self.last = Some(tag);
        tag
    }
}

impl Default for NameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub fn depth_dir_name(tag: u64, depth: u32) -> String {
    format!("L{:04}-{:x}", depth, tag)
}

pub fn width_dir_name(tag: u64, width: u32) -> String {
    format!("W{:04}-{:x}", width, tag)
}
