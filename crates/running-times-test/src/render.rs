//! Renderer test double.

use std::cell::RefCell;

use running_times_bench::{RenderJob, RenderOutcome, Renderer};

/// Records every job and answers with a fixed outcome.
#[derive(Debug)]
pub struct RecordingRenderer {
    outcome: RenderOutcome,
    jobs: RefCell<Vec<RenderJob>>,
}

impl RecordingRenderer {
    /// A renderer that reports success.
    pub fn succeeding() -> Self {
        Self::with_outcome(RenderOutcome::Rendered)
    }

    /// A renderer that reports the plotter as missing.
    pub fn unavailable() -> Self {
        Self::with_outcome(RenderOutcome::Unavailable("not installed".to_string()))
    }

    pub fn with_outcome(outcome: RenderOutcome) -> Self {
        Self {
            outcome,
            jobs: RefCell::new(Vec::new()),
        }
    }

    /// Jobs received so far.
    pub fn jobs(&self) -> Vec<RenderJob> {
        self.jobs.borrow().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, job: &RenderJob) -> RenderOutcome {
        self.jobs.borrow_mut().push(job.clone());
        self.outcome.clone()
    }

    fn is_enabled(&self) -> bool {
        self.outcome != RenderOutcome::Skipped
    }
}
