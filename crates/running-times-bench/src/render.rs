//! External plot rendering.

use std::path::PathBuf;
use std::process::Command;

use tracing::{info, warn};

/// A script ready to be handed to the plotter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Directory the plotter runs in; scripts reference data files relative to it.
    pub working_dir: PathBuf,
    /// Script file name inside `working_dir`.
    pub script: String,
    /// Image file name the script writes.
    pub image: String,
}

/// What happened when the plotter was asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Exit status 0.
    Rendered,
    /// Plotter ran but exited non-zero; `None` if killed by a signal.
    Failed(Option<i32>),
    /// Plotter could not be started.
    Unavailable(String),
    /// Plotting was disabled.
    Skipped,
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Rendered)
    }
}

/// Turns a generated script into an image.
///
/// Failures are reported through [`RenderOutcome`], never as errors: a
/// missing plotter must not fail a measurement run.
pub trait Renderer {
    fn render(&self, job: &RenderJob) -> RenderOutcome;

    /// Returns false if `render` never starts a plotter.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, job: &RenderJob) -> RenderOutcome {
        (**self).render(job)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, job: &RenderJob) -> RenderOutcome {
        (**self).render(job)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Runs gnuplot (or a compatible program) as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    program: String,
}

impl GnuplotRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GnuplotRenderer {
    fn default() -> Self {
        Self::new("gnuplot")
    }
}

impl Renderer for GnuplotRenderer {
    fn render(&self, job: &RenderJob) -> RenderOutcome {
        let status = Command::new(&self.program)
            .arg(&job.script)
            .current_dir(&job.working_dir)
            .status();

        match status {
            Ok(status) if status.success() => {
                info!(event = "plot_rendered", image = %job.image, "Plot rendered");
                RenderOutcome::Rendered
            }
            Ok(status) => {
                warn!(
                    event = "plot_failed",
                    program = %self.program,
                    code = status.code().unwrap_or(-1) as i64,
                    "Plotter exited with failure"
                );
                RenderOutcome::Failed(status.code())
            }
            Err(e) => {
                warn!(
                    event = "plot_failed",
                    program = %self.program,
                    reason = %e,
                    "Plotter could not be started"
                );
                RenderOutcome::Unavailable(e.to_string())
            }
        }
    }
}

/// Renderer used when plotting is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRenderer;

impl Renderer for DisabledRenderer {
    fn render(&self, _job: &RenderJob) -> RenderOutcome {
        RenderOutcome::Skipped
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> RenderJob {
        RenderJob {
            working_dir: std::env::temp_dir(),
            script: "missing.gnu".to_string(),
            image: "missing.png".to_string(),
        }
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let renderer = GnuplotRenderer::new("running-times-no-such-plotter");
        assert!(matches!(
            renderer.render(&job()),
            RenderOutcome::Unavailable(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failed() {
        let renderer = GnuplotRenderer::new("false");
        assert_eq!(renderer.render(&job()), RenderOutcome::Failed(Some(1)));
    }

    #[test]
    fn test_disabled_renderer_skips() {
        let outcome = DisabledRenderer.render(&job());
        assert_eq!(outcome, RenderOutcome::Skipped);
        assert!(!outcome.is_success());
        assert!(!DisabledRenderer.is_enabled());
        assert!(GnuplotRenderer::default().is_enabled());
    }

    #[test]
    fn test_boxed_renderer() {
        let renderer: Box<dyn Renderer> = Box::new(DisabledRenderer);
        assert_eq!(renderer.render(&job()), RenderOutcome::Skipped);
        assert!(!renderer.is_enabled());
    }
}
