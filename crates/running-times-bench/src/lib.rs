//! Experiment drivers and reports for running-times.
//!
//! This crate measures how the reference algorithms of `running-times-core`
//! scale with input size and turns the measurements into artifacts:
//!
//! - Drive an experiment over a size schedule ([`CompareExperiment`],
//!   [`MatrixExperiment`]), printing a progress table as sizes complete
//! - Write whitespace-delimited data files and a multiplot gnuplot script
//!   ([`CompareReport`], [`MatrixReport`])
//! - Fit a constant-factor growth model for overlay ([`TheoreticalFit`])
//! - Render through a pluggable [`Renderer`]; plotter failures are not fatal
//! - Print a growth-rate analysis comparing observed and expected ratios
//!
//! # Example
//!
//! ```
//! use running_times_bench::{run_matrix, DisabledRenderer, RenderOutcome};
//! use running_times_config::BenchConfig;
//! use running_times_core::SeededSource;
//!
//! let dir = std::env::temp_dir().join("running-times-doc-matrix");
//! let mut config = BenchConfig::new().with_output_dir(&dir).without_plot();
//! config.matrix.sizes = vec![2, 4];
//!
//! let mut console = Vec::<u8>::new();
//! let mut source = SeededSource::new(1);
//! let run = run_matrix(&config, &mut source, &DisabledRenderer, &mut console).unwrap();
//!
//! assert_eq!(run.outcome, RenderOutcome::Skipped);
//! assert!(dir.join("matrix_data.txt").exists());
//! ```

pub mod analysis;
mod compare;
pub mod fit;
mod matrix;
mod pipeline;
mod progress;
pub mod render;
pub mod report;
mod result;
pub mod script;

pub use analysis::{growth_steps, GrowthStep};
pub use compare::CompareExperiment;
pub use fit::TheoreticalFit;
pub use matrix::MatrixExperiment;
pub use pipeline::{run_compare, run_matrix, ExperimentRun};
pub use progress::ProgressTable;
pub use render::{DisabledRenderer, GnuplotRenderer, RenderJob, RenderOutcome, Renderer};
pub use report::{Artifacts, CompareReport, MatrixReport};
pub use result::{ExperimentResult, Row};
