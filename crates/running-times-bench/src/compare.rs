//! Search and sort experiment.

use std::io::Write;
use std::time::Instant;

use running_times_config::CompareConfig;
use running_times_core::{
    random_array, Algorithm, BenchError, Measurement, RandomSource, Result, Runner, Schedule,
    TimeUnit,
};
use tracing::{debug, info};

use crate::progress::ProgressTable;
use crate::result::{ExperimentResult, Row};

/// Times linear search, comparison sort and bubble sort over one merged schedule.
///
/// Each size gets a freshly generated array shared by the three algorithms.
/// Sorts work on copies, so every algorithm sees the same unsorted input.
/// Bubble sort only runs up to the configured ceiling; above it the
/// measurement is recorded as skipped.
///
/// # Example
///
/// ```
/// use running_times_bench::CompareExperiment;
/// use running_times_config::CompareConfig;
/// use running_times_core::{SeededSource, TimeUnit};
///
/// let config = CompareConfig {
///     small_sizes: vec![10, 20],
///     large_sizes: vec![20, 40],
///     bubble_ceiling: 20,
///     search_repetitions: 2,
///     ..CompareConfig::default()
/// };
/// let experiment = CompareExperiment::new(config, TimeUnit::Nanoseconds);
/// let mut progress = Vec::<u8>::new();
/// let result = experiment.run(&mut SeededSource::new(1), &mut progress).unwrap();
///
/// assert_eq!(result.sizes(), vec![10, 20, 40]);
/// ```
#[derive(Debug, Clone)]
pub struct CompareExperiment {
    config: CompareConfig,
    runner: Runner,
}

impl CompareExperiment {
    pub const NAME: &'static str = "compare";

    pub fn new(config: CompareConfig, unit: TimeUnit) -> Self {
        let runner = Runner::new(unit)
            .with_search_repetitions(config.search_repetitions)
            .with_absent_target(config.absent_target);
        Self { config, runner }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub fn schedule(&self) -> Schedule {
        self.config.schedule()
    }

    /// Runs every size in the merged schedule, writing the progress table to `progress`.
    ///
    /// The configuration is validated first; an invalid one yields
    /// [`BenchError::Invalid`] before any input is generated.
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
        let algorithms = Algorithm::SEARCH_SORT.to_vec();
        let table = ProgressTable::new(&algorithms, unit);
        let mut result = ExperimentResult::new(Self::NAME, unit, algorithms);

        info!(
            event = "experiment_start",
            experiment = Self::NAME,
            sizes = schedule.len() as u64,
            unit = unit.suffix(),
            "Experiment started"
        );

        writeln!(progress, "Running algorithm comparisons...").map_err(BenchError::Output)?;
        table.write_header(progress).map_err(BenchError::Output)?;

        let start = Instant::now();
        for size in &schedule {
            let input = random_array(size, self.config.domain(), source);

            let linear = self.runner.linear_search(&input);
            let sort = self.runner.comparison_sort(&input);
            let bubble = if self.config.runs_bubble(size) {
                Measurement::measured(size, Algorithm::BubbleSort, self.runner.bubble_sort(&input))
            } else {
                Measurement::skipped(size, Algorithm::BubbleSort)
            };

            let measurements = [
                Measurement::measured(size, Algorithm::LinearSearch, linear),
                Measurement::measured(size, Algorithm::ComparisonSort, sort),
                bubble,
            ];
            let row = Row {
                size,
                timings: measurements.iter().map(|m| m.timing).collect(),
            };
            table.write_row(progress, &row).map_err(BenchError::Output)?;

            debug!(
                event = "size_measured",
                experiment = Self::NAME,
                size = size as u64,
                linear = unit.count(linear),
                sort = unit.count(sort),
                bubble_skipped = bubble.timing.is_skipped(),
                "Size measured"
            );

            for m in measurements {
                result.add(m);
            }
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
    use running_times_core::{SeededSource, Timing};

    fn small_config() -> CompareConfig {
        CompareConfig {
            small_sizes: vec![10, 30, 50],
            large_sizes: vec![50, 60, 100],
            bubble_ceiling: 50,
            search_repetitions: 3,
            ..CompareConfig::default()
        }
    }

    #[test]
    fn test_bubble_skipped_above_ceiling() {
        let experiment = CompareExperiment::new(small_config(), TimeUnit::Nanoseconds);
        let result = experiment
            .run(&mut SeededSource::new(3), &mut Vec::<u8>::new())
            .unwrap();

        for (size, timing) in result.series(Algorithm::BubbleSort) {
            if size > 50 {
                assert_eq!(timing, Timing::Skipped, "size {}", size);
            } else {
                assert!(!timing.is_skipped(), "size {}", size);
            }
        }
    }

    #[test]
    fn test_one_measurement_per_algorithm_and_size() {
        let experiment = CompareExperiment::new(small_config(), TimeUnit::Nanoseconds);
        let result = experiment
            .run(&mut SeededSource::new(4), &mut Vec::<u8>::new())
            .unwrap();

        assert_eq!(result.sizes(), vec![10, 30, 50, 60, 100]);
        assert_eq!(result.measurements.len(), 15);
        assert_eq!(result.rows().len(), 5);
    }

    #[test]
    fn test_empty_value_domain_is_rejected() {
        let config = CompareConfig {
            value_min: 10,
            value_max: 1,
            ..small_config()
        };
        let experiment = CompareExperiment::new(config, TimeUnit::Nanoseconds);
        let mut progress = Vec::<u8>::new();

        let err = experiment
            .run(&mut SeededSource::new(6), &mut progress)
            .unwrap_err();

        assert!(matches!(err, BenchError::Invalid(_)));
        assert!(progress.is_empty());
    }

    #[test]
    fn test_progress_table_written() {
        let experiment = CompareExperiment::new(small_config(), TimeUnit::Milliseconds);
        let mut progress = Vec::<u8>::new();
        experiment
            .run(&mut SeededSource::new(5), &mut progress)
            .unwrap();

        let text = String::from_utf8(progress).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Running algorithm comparisons...");
        assert_eq!(lines[1], "Size\tLinear\tSort\tBubble");
        assert_eq!(lines.len(), 3 + 5);
        assert!(lines[7].starts_with("100\t"));
        assert!(lines[7].ends_with("\t0"));
    }
}
