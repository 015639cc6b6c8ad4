//! Timestamp ranges for backdated builds.

use crate::error::SynthError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, SynthError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        SynthError::InvalidSpec(format!("invalid date '{}' (expected YYYY-MM-DD): {}", input, e))
    })
}

/// Half-open timestamp range `[min, max)` used to draw random file times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
}

impl DateRange {
    pub fn new(min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Self, SynthError> {
        if max <= min {
            return Err(SynthError::InvalidSpec(format!(
                "maxDate ({}) must be after minDate ({})",
                max, min
            )));
        }
        Ok(Self { min, max })
    }

    /// Range between two calendar dates, each taken at midnight UTC.
    pub fn from_dates(min: NaiveDate, max: NaiveDate) -> Result<Self, SynthError> {
        Self::new(
            min.and_time(NaiveTime::MIN).and_utc(),
            max.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    pub fn min(&self) -> DateTime<Utc> {
        self.min
    }

    pub fn max(&self) -> DateTime<Utc> {
        self.max
    }

    /// Draw a timestamp uniformly by nanosecond offset from `min`.
    ///
    /// Spans too wide for nanosecond arithmetic fall back to whole seconds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let span = self.max - self.min;
        match span.num_nanoseconds() {
            Some(nanos) => self.min + Duration::nanoseconds(rng.gen_range(0..nanos)),
            None => self.min + Duration::seconds(rng.gen_range(0..span.num_seconds())),
        }
    }
}
