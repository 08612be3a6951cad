//! Recorded timings.

use std::fmt;
use std::time::Duration;

use crate::algorithm::Algorithm;

/// Granularity that elapsed times are truncated to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeUnit {
    #[default]
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Number of whole units in `duration`, rounding down.
    pub fn count(self, duration: Duration) -> u64 {
        let count = match self {
            TimeUnit::Milliseconds => duration.as_millis(),
            TimeUnit::Microseconds => duration.as_micros(),
            TimeUnit::Nanoseconds => duration.as_nanos(),
        };
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Drops everything below one unit.
    pub fn truncate(self, duration: Duration) -> Duration {
        self.duration(self.count(duration))
    }

    /// Converts a unit count back into a `Duration`.
    pub fn duration(self, count: u64) -> Duration {
        match self {
            TimeUnit::Milliseconds => Duration::from_millis(count),
            TimeUnit::Microseconds => Duration::from_micros(count),
            TimeUnit::Nanoseconds => Duration::from_nanos(count),
        }
    }

    /// Abbreviation used after numbers, e.g. `12ms`.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        }
    }

    /// Spelled-out name used in axis labels.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Outcome of timing one algorithm at one size.
///
/// `Skipped` is written as `0` in data files but is never "instantaneous":
/// fits, plots and analysis ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Measured(Duration),
    Skipped,
}

impl Timing {
    /// Whole units for data files; skipped timings yield the `0` sentinel.
    pub fn count(self, unit: TimeUnit) -> u64 {
        match self {
            Timing::Measured(d) => unit.count(d),
            Timing::Skipped => 0,
        }
    }

    /// Returns the count only when it is a real, non-zero measurement.
    pub fn nonzero(self, unit: TimeUnit) -> Option<u64> {
        match self {
            Timing::Measured(d) => Some(unit.count(d)).filter(|&c| c > 0),
            Timing::Skipped => None,
        }
    }

    pub fn is_skipped(self) -> bool {
        matches!(self, Timing::Skipped)
    }
}

/// One (size, algorithm, time) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub input_size: usize,
    pub algorithm: Algorithm,
    pub timing: Timing,
}

impl Measurement {
    pub fn new(input_size: usize, algorithm: Algorithm, timing: Timing) -> Self {
        Self {
            input_size,
            algorithm,
            timing,
        }
    }

    pub fn measured(input_size: usize, algorithm: Algorithm, elapsed: Duration) -> Self {
        Self::new(input_size, algorithm, Timing::Measured(elapsed))
    }

    pub fn skipped(input_size: usize, algorithm: Algorithm) -> Self {
        Self::new(input_size, algorithm, Timing::Skipped)
    }

    pub fn label(&self) -> &'static str {
        self.algorithm.label()
    }
}
