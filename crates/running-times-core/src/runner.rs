//! Timed algorithm execution.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::algorithm::{bubble_sort, comparison_sort, linear_search};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::measurement::TimeUnit;

/// Times single algorithm calls.
///
/// The clock wraps only the algorithm call. Sorting inputs are copied before
/// the clock starts so the caller's input can be reused by the next algorithm.
///
/// # Example
///
/// ```
/// use running_times_core::{Runner, TimeUnit};
///
/// let runner = Runner::new(TimeUnit::Nanoseconds).with_search_repetitions(10);
/// let elapsed = runner.linear_search(&[3, 1, 2]);
/// assert!(elapsed.as_nanos() < 1_000_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct Runner {
    unit: TimeUnit,
    search_repetitions: usize,
    absent_target: i32,
}

impl Runner {
    /// Creates a runner with 1000 search repetitions and `-1` as absent target.
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            unit,
            search_repetitions: 1000,
            absent_target: -1,
        }
    }

    /// Sets how many full scans one linear search timing covers.
    pub fn with_search_repetitions(mut self, repetitions: usize) -> Self {
        self.search_repetitions = repetitions;
        self
    }

    /// Sets the value linear search looks for. Must lie outside the input domain.
    pub fn with_absent_target(mut self, target: i32) -> Self {
        self.absent_target = target;
        self
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn search_repetitions(&self) -> usize {
        self.search_repetitions
    }

    pub fn absent_target(&self) -> i32 {
        self.absent_target
    }

    /// Runs `f` under the clock and truncates the elapsed time to whole units.
    pub fn time<R>(&self, f: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        let result = black_box(f());
        let elapsed = start.elapsed();
        (result, self.unit.truncate(elapsed))
    }

    /// Worst-case scans for the absent target, repeated `search_repetitions` times.
    pub fn linear_search(&self, values: &[i32]) -> Duration {
        let target = self.absent_target;
        let (_, elapsed) = self.time(|| {
            let mut found = false;
            for _ in 0..self.search_repetitions {
                found |= linear_search(black_box(values), black_box(target));
            }
            found
        });
        elapsed
    }

    pub fn comparison_sort(&self, values: &[i32]) -> Duration {
        let mut copy = values.to_vec();
        let (_, elapsed) = self.time(|| comparison_sort(&mut copy));
        black_box(&copy);
        elapsed
    }

    pub fn bubble_sort(&self, values: &[i32]) -> Duration {
        let mut copy = values.to_vec();
        let (_, elapsed) = self.time(|| bubble_sort(&mut copy));
        black_box(&copy);
        elapsed
    }

    pub fn matrix_multiply(&self, a: &Matrix, b: &Matrix) -> Result<Duration> {
        let (product, elapsed) = self.time(|| a.multiply(b));
        product?;
        Ok(elapsed)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(TimeUnit::default())
    }
}
