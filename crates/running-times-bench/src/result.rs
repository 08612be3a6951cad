//! Experiment result types.

use std::time::Duration;

use running_times_core::{Algorithm, Measurement, TimeUnit, Timing};

/// One data-file row: a size and one timing per algorithm column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub size: usize,
    pub timings: Vec<Timing>,
}

impl Row {
    /// Timing counts as written to data files, sentinel `0` for skipped.
    pub fn counts(&self, unit: TimeUnit) -> Vec<u64> {
        self.timings.iter().map(|t| t.count(unit)).collect()
    }
}

/// All measurements of one experiment run, in recording order.
///
/// # Example
///
/// ```
/// use running_times_bench::ExperimentResult;
/// use running_times_core::{Algorithm, Measurement, TimeUnit};
/// use std::time::Duration;
///
/// let mut result = ExperimentResult::new(
///     "compare",
///     TimeUnit::Milliseconds,
///     vec![Algorithm::ComparisonSort, Algorithm::BubbleSort],
/// );
/// result.add(Measurement::measured(10, Algorithm::ComparisonSort, Duration::ZERO));
/// result.add(Measurement::skipped(10, Algorithm::BubbleSort));
///
/// let rows = result.rows();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].counts(TimeUnit::Milliseconds), vec![0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    /// Experiment name.
    pub name: String,
    /// Granularity of every recorded time.
    pub unit: TimeUnit,
    /// Algorithms in column order.
    pub algorithms: Vec<Algorithm>,
    /// Individual measurements.
    pub measurements: Vec<Measurement>,
    /// Wall-clock time of the whole run, generation included.
    pub total_time: Duration,
}

impl ExperimentResult {
    pub fn new(name: impl Into<String>, unit: TimeUnit, algorithms: Vec<Algorithm>) -> Self {
        Self {
            name: name.into(),
            unit,
            algorithms,
            measurements: Vec::new(),
            total_time: Duration::ZERO,
        }
    }

    /// Appends a measurement.
    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Distinct sizes in recording order.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = Vec::new();
        for m in &self.measurements {
            if sizes.last() != Some(&m.input_size) {
                sizes.push(m.input_size);
            }
        }
        sizes
    }

    /// Groups measurements into one row per size.
    ///
    /// An algorithm with no measurement at a size is reported as skipped.
    pub fn rows(&self) -> Vec<Row> {
        self.sizes()
            .into_iter()
            .map(|size| Row {
                size,
                timings: self
                    .algorithms
                    .iter()
                    .map(|&alg| self.timing(size, alg))
                    .collect(),
            })
            .collect()
    }

    /// Returns the timing of `algorithm` at `size`.
    pub fn timing(&self, size: usize, algorithm: Algorithm) -> Timing {
        self.measurements
            .iter()
            .find(|m| m.input_size == size && m.algorithm == algorithm)
            .map(|m| m.timing)
            .unwrap_or(Timing::Skipped)
    }

    /// (size, timing) pairs for one algorithm, ordered by size.
    pub fn series(&self, algorithm: Algorithm) -> Vec<(usize, Timing)> {
        self.measurements
            .iter()
            .filter(|m| m.algorithm == algorithm)
            .map(|m| (m.input_size, m.timing))
            .collect()
    }

    /// Largest size with a real, non-zero timing for `algorithm`.
    pub fn last_nonzero(&self, algorithm: Algorithm) -> Option<(usize, u64)> {
        self.series(algorithm)
            .into_iter()
            .filter_map(|(size, t)| t.nonzero(self.unit).map(|c| (size, c)))
            .last()
    }

    /// Returns the number of distinct sizes measured.
    pub fn size_count(&self) -> usize {
        self.sizes().len()
    }
}
