//! Named file size presets.

use crate::error::SynthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset pair of minimum and maximum file sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeGauge {
    Empty,
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl SizeGauge {
    pub const ALL: [SizeGauge; 6] = [
        SizeGauge::Empty,
        SizeGauge::Tiny,
        SizeGauge::Small,
        SizeGauge::Medium,
        SizeGauge::Large,
        SizeGauge::Huge,
    ];

    /// `(min, max)` file size in bytes.
    pub fn bounds(self) -> (u64, u64) {
        match self {
            SizeGauge::Empty => (0, 0),
            SizeGauge::Tiny => (1, 4096),
            SizeGauge::Small => (4096, 262_144),
            SizeGauge::Medium => (262_144, 4_194_304),
            SizeGauge::Large => (4_194_304, 536_870_912),
            SizeGauge::Huge => (536_870_912, 671_088_640),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizeGauge::Empty => "empty",
            SizeGauge::Tiny => "tiny",
            SizeGauge::Small => "small",
            SizeGauge::Medium => "medium",
            SizeGauge::Large => "large",
            SizeGauge::Huge => "huge",
        }
    }
}

impl fmt::Display for SizeGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeGauge {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SizeGauge::ALL
            .into_iter()
            .find(|gauge| gauge.name() == wanted)
            .ok_or_else(|| {
                SynthError::InvalidSpec(format!(
                    "unknown gauge '{}' (expected one of empty, tiny, small, medium, large, huge)",
                    s
                ))
            })
    }
}
