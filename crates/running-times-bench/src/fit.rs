//! Constant-factor fit of a growth model to measured times.

use running_times_core::{Algorithm, Complexity};

use crate::result::ExperimentResult;

/// Used when no measurement is non-zero and nothing can be averaged.
pub const FALLBACK_CONSTANT: f64 = 1e-6;

/// `time ≈ c · f(n)` with `c` averaged from observed `time / f(n)`.
///
/// # Example
///
/// ```
/// use running_times_bench::TheoreticalFit;
/// use running_times_core::Complexity;
///
/// let fit = TheoreticalFit::from_points(Complexity::Cubic, &[(10, 1), (20, 8)]);
/// assert!((fit.constant() - 1e-3).abs() < 1e-12);
/// assert!((fit.predict(30) - 27.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheoreticalFit {
    complexity: Complexity,
    constant: f64,
    samples: usize,
}

impl TheoreticalFit {
    /// Fits from (size, time) points; zero times are ignored as unmeasured.
    pub fn from_points(complexity: Complexity, points: &[(usize, u64)]) -> Self {
        let ratios: Vec<f64> = points
            .iter()
            .filter(|&&(n, t)| t > 0 && complexity.cost(n as f64) > 0.0)
            .map(|&(n, t)| t as f64 / complexity.cost(n as f64))
            .collect();

        let constant = if ratios.is_empty() {
            FALLBACK_CONSTANT
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        };

        Self {
            complexity,
            constant,
            samples: ratios.len(),
        }
    }

    /// Fits an algorithm's series from an experiment result.
    pub fn from_result(result: &ExperimentResult, algorithm: Algorithm) -> Self {
        let points: Vec<(usize, u64)> = result
            .series(algorithm)
            .into_iter()
            .filter_map(|(n, t)| t.nonzero(result.unit).map(|c| (n, c)))
            .collect();
        Self::from_points(algorithm.complexity(), &points)
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Number of measurements the constant was averaged over.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns true if the constant is the fallback rather than a fit.
    pub fn is_fallback(&self) -> bool {
        self.samples == 0
    }

    pub fn predict(&self, n: usize) -> f64 {
        self.constant * self.complexity.cost(n as f64)
    }

    /// Samples `(n, predicted)` from `first` to `last` inclusive, every `step`.
    pub fn curve(&self, first: usize, last: usize, step: usize) -> Vec<(usize, f64)> {
        (first..=last)
            .step_by(step.max(1))
            .map(|n| (n, self.predict(n)))
            .collect()
    }
}
