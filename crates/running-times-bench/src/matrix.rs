//! Naive matrix multiplication experiment.

use std::io::Write;
use std::time::Instant;

use running_times_config::MatrixConfig;
use running_times_core::{
    random_matrix, Algorithm, BenchError, Measurement, RandomSource, Result, Runner, Schedule,
    TimeUnit,
};
use tracing::{debug, info};

use crate::progress::ProgressTable;
use crate::result::{ExperimentResult, Row};

/// Times the triple-loop product of two fresh random matrices per size.
#[derive(Debug, Clone)]
pub struct MatrixExperiment {
    config: MatrixConfig,
    runner: Runner,
}

impl MatrixExperiment {
    pub const NAME: &'static str = "matrix";

    pub fn new(config: MatrixConfig, unit: TimeUnit) -> Self {
        Self {
            config,
            runner: Runner::new(unit),
        }
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn schedule(&self) -> Schedule {
        self.config.schedule()
    }

    /// Measures every size in order. Invalid settings yield [`BenchError::Invalid`].
    pub fn run<R, W>(&self, source: &mut R, progress: &mut W) -> Result<ExperimentResult>
    where
        R: RandomSource + ?Sized,
        W: Write + ?Sized,
    {
        self.config
            .validate()
            .map_err(|e| BenchError::Invalid(e.to_string()))?;

        let schedule = self.schedule();
        let unit = self.runner.unit();
        let algorithms = vec![Algorithm::MatrixMultiply];
        let table = ProgressTable::new(&algorithms, unit);
        let mut result = ExperimentResult::new(Self::NAME, unit, algorithms);

        info!(
            event = "experiment_start",
            experiment = Self::NAME,
            sizes = schedule.len() as u64,
            unit = unit.suffix(),
            "Experiment started"
        );

        writeln!(progress, "Running timing experiments...").map_err(BenchError::Output)?;
        table.write_header(progress).map_err(BenchError::Output)?;

        let start = Instant::now();
        for size in &schedule {
            let a = random_matrix(size, source);
            let b = random_matrix(size, source);
            let elapsed = self.runner.matrix_multiply(&a, &b)?;

            let measurement = Measurement::measured(size, Algorithm::MatrixMultiply, elapsed);
            let row = Row {
                size,
                timings: vec![measurement.timing],
            };
            table.write_row(progress, &row).map_err(BenchError::Output)?;

            debug!(
                event = "size_measured",
                experiment = Self::NAME,
                size = size as u64,
                time = unit.count(elapsed),
                "Size measured"
            );
            result.add(measurement);
        }
        result.total_time = start.elapsed();

        info!(
            event = "experiment_end",
            experiment = Self::NAME,
            sizes = result.size_count() as u64,
            duration_ms = result.total_time.as_millis() as u64,
            "Experiment ended"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use running_times_core::SeededSource;

    #[test]
    fn test_runs_every_size_in_order() {
        let config = MatrixConfig {
            sizes: vec![8, 2, 4],
            theory_step: 1,
        };
        let experiment = MatrixExperiment::new(config, TimeUnit::Nanoseconds);
        let mut progress = Vec::<u8>::new();
        let result = experiment
            .run(&mut SeededSource::new(2), &mut progress)
            .unwrap();

        assert_eq!(result.sizes(), vec![2, 4, 8]);
        assert!(result
            .measurements
            .iter()
            .all(|m| m.algorithm == Algorithm::MatrixMultiply && !m.timing.is_skipped()));

        let text = String::from_utf8(progress).unwrap();
        assert!(text.starts_with("Running timing experiments...\nSize\tTime (ns)\n"));
        assert_eq!(text.lines().count(), 3 + 3);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = MatrixConfig {
            sizes: vec![0, 4],
            theory_step: 1,
        };
        let experiment = MatrixExperiment::new(config, TimeUnit::Nanoseconds);

        let err = experiment
            .run(&mut SeededSource::new(2), &mut Vec::<u8>::new())
            .unwrap_err();
        assert!(matches!(err, BenchError::Invalid(_)));
    }
}
