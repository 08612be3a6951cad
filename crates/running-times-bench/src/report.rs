//! Data files, plotting scripts and analysis for finished experiments.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use running_times_config::{CompareConfig, MatrixConfig};
use running_times_core::{Algorithm, BenchError, Result};
use tracing::info;

use crate::analysis::{compare_analysis, matrix_analysis};
use crate::fit::TheoreticalFit;
use crate::render::RenderJob;
use crate::result::ExperimentResult;
use crate::script::{GnuplotScript, Panel, Series, Style};

const LINEAR_COLOR: &str = "#2ECC71";
const SORT_COLOR: &str = "#3498DB";
const BUBBLE_COLOR: &str = "#F39C12";
const MEASURED_COLOR: &str = "#16A085";
const THEORY_COLOR: &str = "#FF6B9D";

/// Files written for one experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub dir: PathBuf,
    pub data: PathBuf,
    pub theory: Option<PathBuf>,
    pub script: PathBuf,
    pub image: String,
}

impl Artifacts {
    /// Plotter job for the written script.
    pub fn render_job(&self) -> RenderJob {
        let script = self
            .script
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        RenderJob {
            working_dir: self.dir.clone(),
            script,
            image: self.image.clone(),
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| BenchError::io(path, e))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))
}

fn lines_points(point: u8, point_size: f64) -> Style {
    Style::LinesPoints {
        width: 2.0,
        point,
        point_size,
    }
}

/// Report for the search/sort experiment.
///
/// The data file holds `size linear sort bubble` per row; bubble is `0` where
/// it was not run, and every panel that could show that sentinel filters it.
pub struct CompareReport<'a> {
    result: &'a ExperimentResult,
    config: &'a CompareConfig,
}

impl<'a> CompareReport<'a> {
    pub const DATA_FILE: &'static str = "algorithm_data.txt";
    pub const SCRIPT_FILE: &'static str = "plot_algorithms.gnu";
    pub const IMAGE_FILE: &'static str = "algorithm_comparison_plot.png";

    pub fn new(result: &'a ExperimentResult, config: &'a CompareConfig) -> Self {
        Self { result, config }
    }

    /// Space-separated rows, one per size.
    pub fn data(&self) -> String {
        let mut out = String::new();
        for row in self.result.rows() {
            let counts: Vec<String> = row
                .counts(self.result.unit)
                .into_iter()
                .map(|c| c.to_string())
                .collect();
            let _ = writeln!(out, "{} {}", row.size, counts.join(" "));
        }
        out
    }

    fn column(&self, algorithm: Algorithm) -> usize {
        self.result
            .algorithms
            .iter()
            .position(|&a| a == algorithm)
            .map(|i| i + 2)
            .unwrap_or(2)
    }

    fn series(&self, algorithm: Algorithm, point_size: f64) -> Series {
        let (point, color) = match algorithm {
            Algorithm::LinearSearch => (7, LINEAR_COLOR),
            Algorithm::ComparisonSort => (9, SORT_COLOR),
            _ => (11, BUBBLE_COLOR),
        };
        Series::new(
            Self::DATA_FILE,
            self.column(algorithm),
            lines_points(point, point_size),
            color,
        )
    }

    /// Four panels: overview, fast algorithms, bubble detail, log-log.
    pub fn script(&self) -> GnuplotScript {
        let unit = self.result.unit;
        let time_long = format!("Time ({})", unit.name());
        let time_short = format!("Time ({})", unit.suffix());

        let overview = Panel::new(
            "Algorithm Comparison: Growth Rates Matter!",
            "Input Size (n)",
            time_long,
        )
        .with_fonts(14, 12)
        .with_series(
            self.series(Algorithm::LinearSearch, 1.0)
                .with_title("Linear Search O(n)"),
        )
        .with_series(
            self.series(Algorithm::ComparisonSort, 1.0)
                .with_title("Sort O(n log n)"),
        )
        .with_series(
            self.series(Algorithm::BubbleSort, 1.0)
                .with_title("Bubble Sort O(n^2)")
                .dropping_zeros(),
        );

        let fast = Panel::new(
            "Fast Algorithms: O(n) vs O(n log n)",
            "Input Size (n)",
            time_short.clone(),
        )
        .with_series(
            self.series(Algorithm::LinearSearch, 1.2)
                .with_title("Linear Search O(n)"),
        )
        .with_series(self.series(Algorithm::ComparisonSort, 1.2).with_title("Sort O(n log n)"));

        let bubble = Panel::new(
            "Bubble Sort: O(n^2) - Why It Gets Slow",
            "Input Size (n)",
            time_short,
        )
        .without_key()
        .with_series(self.series(Algorithm::BubbleSort, 1.2).dropping_zeros());

        let log_log = Panel::new(
            "Log-Log Plot: Identifying Complexity",
            "log(Input Size)",
            "log(Time)",
        )
        .log_log()
        .with_series(
            self.series(Algorithm::LinearSearch, 1.0)
                .with_title("Linear O(n)")
                .dropping_zeros(),
        )
        .with_series(
            self.series(Algorithm::ComparisonSort, 1.0)
                .with_title("Sort O(n log n)")
                .dropping_zeros(),
        )
        .with_series(
            self.series(Algorithm::BubbleSort, 1.0)
                .with_title("Bubble O(n^2)")
                .dropping_zeros(),
        );

        GnuplotScript::new(Self::IMAGE_FILE, (1600, 900), (2, 2))
            .with_panel(overview)
            .with_panel(fast)
            .with_panel(bubble)
            .with_panel(log_log)
    }

    /// Writes the data file and script into `dir`.
    pub fn write(&self, dir: &Path) -> Result<Artifacts> {
        ensure_dir(dir)?;
        let data = dir.join(Self::DATA_FILE);
        let script = dir.join(Self::SCRIPT_FILE);
        write_file(&data, &self.data())?;
        write_file(&script, &self.script().to_string())?;

        info!(
            event = "artifacts_written",
            data = %data.display(),
            script = %script.display(),
            "Report files written"
        );

        Ok(Artifacts {
            dir: dir.to_path_buf(),
            data,
            theory: None,
            script,
            image: Self::IMAGE_FILE.to_string(),
        })
    }

    pub fn analysis(&self) -> String {
        compare_analysis(self.result, self.config.extrapolation_factor)
    }
}

/// Report for the matrix experiment, including the cubic fit overlay.
pub struct MatrixReport<'a> {
    result: &'a ExperimentResult,
    config: &'a MatrixConfig,
    fit: TheoreticalFit,
}

impl<'a> MatrixReport<'a> {
    pub const DATA_FILE: &'static str = "matrix_data.txt";
    pub const THEORY_FILE: &'static str = "theory_data.txt";
    pub const SCRIPT_FILE: &'static str = "plot_matrix.gnu";
    pub const IMAGE_FILE: &'static str = "matrix_plot.png";

    pub fn new(result: &'a ExperimentResult, config: &'a MatrixConfig) -> Self {
        let fit = TheoreticalFit::from_result(result, Algorithm::MatrixMultiply);
        Self {
            result,
            config,
            fit,
        }
    }

    pub fn fit(&self) -> &TheoreticalFit {
        &self.fit
    }

    /// `size time` rows.
    pub fn data(&self) -> String {
        let mut out = String::new();
        for (size, timing) in self.result.series(Algorithm::MatrixMultiply) {
            let _ = writeln!(out, "{} {}", size, timing.count(self.result.unit));
        }
        out
    }

    /// `size predicted` rows sampled across the measured range.
    pub fn theory(&self) -> String {
        let sizes = self.result.sizes();
        let (Some(&first), Some(&last)) = (sizes.first(), sizes.last()) else {
            return String::new();
        };
        let mut out = String::new();
        for (n, predicted) in self.fit.curve(first, last, self.config.theory_step) {
            let _ = writeln!(out, "{} {}", n, predicted);
        }
        out
    }

    pub fn script(&self) -> GnuplotScript {
        let time_long = format!("Time ({})", self.result.unit.name());
        let measured_title = "Measured Time";

        let measured = Panel::new(
            "Matrix Multiplication: Running Time vs Input Size",
            "Matrix Size (n)",
            time_long.clone(),
        )
        .with_fonts(14, 12)
        .with_series(
            Series::new(Self::DATA_FILE, 2, lines_points(7, 1.5), MEASURED_COLOR)
                .with_title(measured_title),
        );

        let versus = Panel::new(
            "Measured vs Theoretical O(n^3)",
            "Matrix Size (n)",
            time_long,
        )
        .with_fonts(14, 12)
        .with_series(
            Series::new(
                Self::DATA_FILE,
                2,
                Style::Points {
                    point: 7,
                    point_size: 1.5,
                },
                MEASURED_COLOR,
            )
            .with_title(measured_title),
        )
        .with_series(
            Series::new(
                Self::THEORY_FILE,
                2,
                Style::Lines {
                    width: 2.0,
                    dash: 2,
                },
                THEORY_COLOR,
            )
            .with_title(format!("O(n^3) fit: {:.6e} * n^3", self.fit.constant())),
        );

        GnuplotScript::new(Self::IMAGE_FILE, (1200, 600), (1, 2))
            .with_panel(measured)
            .with_panel(versus)
    }

    /// Writes the data file, theory curve and script into `dir`.
    pub fn write(&self, dir: &Path) -> Result<Artifacts> {
        ensure_dir(dir)?;
        let data = dir.join(Self::DATA_FILE);
        let theory = dir.join(Self::THEORY_FILE);
        let script = dir.join(Self::SCRIPT_FILE);
        write_file(&data, &self.data())?;
        write_file(&theory, &self.theory())?;
        write_file(&script, &self.script().to_string())?;

        info!(
            event = "artifacts_written",
            data = %data.display(),
            script = %script.display(),
            "Report files written"
        );

        Ok(Artifacts {
            dir: dir.to_path_buf(),
            data,
            theory: Some(theory),
            script,
            image: Self::IMAGE_FILE.to_string(),
        })
    }

    pub fn analysis(&self) -> String {
        matrix_analysis(self.result, &self.fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use running_times_core::{Measurement, TimeUnit};
    use std::time::Duration;

    fn compare_result() -> ExperimentResult {
        let mut r = ExperimentResult::new(
            "compare",
            TimeUnit::Milliseconds,
            Algorithm::SEARCH_SORT.to_vec(),
        );
        for (n, bubble) in [(100, Some(3)), (200, None)] {
            r.add(Measurement::measured(n, Algorithm::LinearSearch, Duration::from_millis(1)));
            r.add(Measurement::measured(n, Algorithm::ComparisonSort, Duration::from_millis(2)));
            r.add(match bubble {
                Some(ms) => {
                    Measurement::measured(n, Algorithm::BubbleSort, Duration::from_millis(ms))
                }
                None => Measurement::skipped(n, Algorithm::BubbleSort),
            });
        }
        r
    }

    #[test]
    fn test_compare_data_rows() {
        let result = compare_result();
        let config = CompareConfig::default();
        let report = CompareReport::new(&result, &config);
        assert_eq!(report.data(), "100 1 2 3\n200 1 2 0\n");
    }

    #[test]
    fn test_compare_script_panels() {
        let result = compare_result();
        let config = CompareConfig::default();
        let script = CompareReport::new(&result, &config).script().to_string();

        assert!(script.starts_with("set terminal png size 1600,900 enhanced font 'Arial,12'\n"));
        assert!(script.contains("set output 'algorithm_comparison_plot.png'"));
        assert!(script.contains("set multiplot layout 2,2"));
        assert_eq!(script.matches("set title").count(), 4);
        assert!(script.contains("set ylabel 'Time (milliseconds)' font 'Arial,12'"));
        assert!(script.contains(
            "'algorithm_data.txt' using 1:($4 > 0 ? $4 : 1/0) with linespoints lw 2 pt 11 ps 1 lc rgb '#F39C12' title 'Bubble Sort O(n^2)'"
        ));
        assert!(script.contains(
            "'algorithm_data.txt' using 1:2 with linespoints lw 2 pt 7 ps 1.2 lc rgb '#2ECC71' title 'Linear Search O(n)'"
        ));
        assert!(script.contains("set logscale xy"));
        assert!(script.contains("unset key"));
    }

    #[test]
    fn test_matrix_theory_and_script() {
        let mut result = ExperimentResult::new(
            "matrix",
            TimeUnit::Milliseconds,
            vec![Algorithm::MatrixMultiply],
        );
        result.add(Measurement::measured(10, Algorithm::MatrixMultiply, Duration::ZERO));
        result.add(Measurement::measured(20, Algorithm::MatrixMultiply, Duration::from_millis(8)));
        let config = MatrixConfig {
            sizes: vec![10, 20],
            theory_step: 5,
        };
        let report = MatrixReport::new(&result, &config);

        assert_eq!(report.data(), "10 0\n20 8\n");
        assert!((report.fit().constant() - 1e-3).abs() < 1e-12);

        let theory = report.theory();
        let ns: Vec<&str> = theory
            .lines()
            .map(|l| l.split(' ').next().unwrap())
            .collect();
        assert_eq!(ns, vec!["10", "15", "20"]);
        assert!(theory.ends_with("20 8\n"));

        let script = report.script().to_string();
        assert!(script.contains("set multiplot layout 1,2"));
        assert!(script.contains(
            "'theory_data.txt' using 1:2 with lines lw 2 dt 2 lc rgb '#FF6B9D' title 'O(n^3) fit: 1.000000e-3 * n^3'"
        ));
    }

    #[test]
    fn test_render_job_uses_relative_script() {
        let artifacts = Artifacts {
            dir: PathBuf::from("out/run"),
            data: PathBuf::from("out/run/matrix_data.txt"),
            theory: None,
            script: PathBuf::from("out/run/plot_matrix.gnu"),
            image: "matrix_plot.png".to_string(),
        };
        let job = artifacts.render_job();
        assert_eq!(job.working_dir, PathBuf::from("out/run"));
        assert_eq!(job.script, "plot_matrix.gnu");
    }
}
