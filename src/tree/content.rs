//! Random file content and timestamp helpers shared by the builder and the mutator.

use chrono::{DateTime, Utc};
use filetime::FileTime;
use rand::RngCore;
use std::io::{self, Write};
use std::path::Path;

/// Write `len` random bytes to `writer`, `chunk_size` bytes at a time.
pub fn write_random_bytes<W, R>(
    writer: &mut W,
    len: u64,
    chunk_size: usize,
    rng: &mut R,
) -> io::Result<()>
where
    W: Write + ?Sized,
    R: RngCore + ?Sized,
{
    if len == 0 {
        return Ok(());
    }
    let chunk_size = chunk_size.max(1);
    let buf_len = usize::try_from(len).map_or(chunk_size, |l| l.min(chunk_size));
    let mut buf = vec![0u8; buf_len];
    let mut remaining = len;
    while remaining > 0 {
        let n = usize::try_from(remaining).map_or(buf_len, |r| r.min(buf_len));
        rng.fill_bytes(&mut buf[..n]);
        writer.write_all(&buf[..n])?;
        remaining -= n as u64;
    }
    writer.flush()
}

/// Set access and modification time of `path` to `ts`.
///
/// Creation time is not settable portably and is left untouched.
pub fn set_times(path: &Path, ts: DateTime<Utc>) -> io::Result<()> {
    let ft = FileTime::from_unix_time(ts.timestamp(), ts.timestamp_subsec_nanos());
    filetime::set_file_times(path, ft, ft)
}
