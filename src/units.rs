//! Human-readable byte sizes (binary, 1024-based units).

use crate::error::SynthError;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with two decimals in the largest unit below 1024.
///
/// `92160` formats as `90.00 KB`, `283115520` as `270.00 MB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Multiplier for a unit suffix, `None` when the suffix is unknown.
fn unit_multiplier(suffix: &str) -> Option<u64> {
    let upper = suffix.to_ascii_uppercase();
    let index = match upper.as_str() {
        "" | "B" => 0,
        "KB" | "K" => 1,
        "MB" | "M" => 2,
        "GB" | "G" => 3,
        "TB" | "T" => 4,
        "PB" | "P" => 5,
        _ => return None,
    };
    Some(1024u64.pow(index))
}

/// Parse a size such as `4096`, `10KB`, `1.5 MB` or `2gb` into bytes.
pub fn parse_size(input: &str) -> Result<u64, SynthError> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(split);

    if number.is_empty() {
        return Err(SynthError::InvalidSpec(format!(
            "size '{}' does not start with a number",
            input
        )));
    }

    let multiplier = unit_multiplier(suffix.trim()).ok_or_else(|| {
        SynthError::InvalidSpec(format!("unknown size unit '{}' in '{}'", suffix.trim(), input))
    })?;

    if number.contains('.') {
        let value: f64 = number
            .parse()
            .map_err(|_| SynthError::InvalidSpec(format!("invalid size '{}'", input)))?;
        let bytes = (value * multiplier as f64).round();
        if !bytes.is_finite() || bytes > u64::MAX as f64 {
            return Err(SynthError::InvalidSpec(format!("size '{}' is too large", input)));
        }
        Ok(bytes as u64)
    } else {
        let value: u64 = number
            .parse()
            .map_err(|_| SynthError::InvalidSpec(format!("invalid size '{}'", input)))?;
        value
            .checked_mul(multiplier)
            .ok_or_else(|| SynthError::InvalidSpec(format!("size '{}' is too large", input)))
    }
}
