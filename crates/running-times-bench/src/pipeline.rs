//! End-to-end experiment runs: measure, write, plot, analyse.

use std::io::Write;

use running_times_config::BenchConfig;
use running_times_core::{BenchError, RandomSource, Result};

use crate::compare::CompareExperiment;
use crate::matrix::MatrixExperiment;
use crate::render::{RenderOutcome, Renderer};
use crate::report::{Artifacts, CompareReport, MatrixReport};
use crate::result::ExperimentResult;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct ExperimentRun {
    pub result: ExperimentResult,
    pub artifacts: Artifacts,
    pub outcome: RenderOutcome,
}

/// Runs the search/sort experiment and reports on it.
///
/// File write failures are fatal. A plotter failure is reported on `out` and
/// the run still succeeds.
pub fn run_compare<S, R, W>(
    config: &BenchConfig,
    source: &mut S,
    renderer: &R,
    out: &mut W,
) -> Result<ExperimentRun>
where
    S: RandomSource + ?Sized,
    R: Renderer + ?Sized,
    W: Write + ?Sized,
{
    let experiment = CompareExperiment::new(config.compare.clone(), config.time_unit);
    let result = experiment.run(source, out)?;

    let report = CompareReport::new(&result, &config.compare);
    let artifacts = report.write(&config.output_dir)?;
    let outcome = plot(renderer, &artifacts, out, &[], &["Error generating plot"])?;
    write!(out, "{}", report.analysis()).map_err(BenchError::Output)?;

    Ok(ExperimentRun {
        result,
        artifacts,
        outcome,
    })
}

/// Runs the matrix experiment and reports on it.
pub fn run_matrix<S, R, W>(
    config: &BenchConfig,
    source: &mut S,
    renderer: &R,
    out: &mut W,
) -> Result<ExperimentRun>
where
    S: RandomSource + ?Sized,
    R: Renderer + ?Sized,
    W: Write + ?Sized,
{
    let experiment = MatrixExperiment::new(config.matrix.clone(), config.time_unit);
    let result = experiment.run(source, out)?;

    let report = MatrixReport::new(&result, &config.matrix);
    let artifacts = report.write(&config.output_dir)?;

    let view_hint = [
        String::new(),
        "To view the plot:".to_string(),
        format!("  - Open {} with an image viewer", artifacts.image),
        format!(
            "  - Or: display {} (on Linux with ImageMagick)",
            artifacts.image
        ),
    ];
    let manual_hint = [
        "Error: gnuplot not found or failed to execute".to_string(),
        format!(
            "You can still plot manually using {}",
            MatrixReport::DATA_FILE
        ),
    ];
    let outcome = plot(renderer, &artifacts, out, &view_hint, &manual_hint)?;
    write!(out, "{}", report.analysis()).map_err(BenchError::Output)?;

    Ok(ExperimentRun {
        result,
        artifacts,
        outcome,
    })
}

fn plot<R, W, L>(
    renderer: &R,
    artifacts: &Artifacts,
    out: &mut W,
    on_success: &[L],
    on_failure: &[L],
) -> Result<RenderOutcome>
where
    R: Renderer + ?Sized,
    W: Write + ?Sized,
    L: AsRef<str>,
{
    if renderer.is_enabled() {
        writeln!(out, "\nGenerating plot...").map_err(BenchError::Output)?;
        out.flush().map_err(BenchError::Output)?;
    }

    let job = artifacts.render_job();
    let outcome = renderer.render(&job);

    let mut lines: Vec<String> = Vec::new();
    match &outcome {
        RenderOutcome::Skipped => {
            lines.push(String::new());
            lines.push(format!(
                "Plotting disabled; data in {}, script in {}",
                artifacts.data.display(),
                artifacts.script.display()
            ));
        }
        RenderOutcome::Rendered => {
            lines.push(format!("Plot saved to: {}", artifacts.image));
            lines.extend(on_success.iter().map(|l| l.as_ref().to_string()));
        }
        RenderOutcome::Failed(_) | RenderOutcome::Unavailable(_) => {
            lines.extend(on_failure.iter().map(|l| l.as_ref().to_string()));
        }
    }

    for line in lines {
        writeln!(out, "{}", line).map_err(BenchError::Output)?;
    }
    Ok(outcome)
}
