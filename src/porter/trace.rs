//! Observability hooks for the stemming pipeline.
//!
//! The pipeline itself has no side effects. Callers that want to see what each
//! phase did pass a [`PhaseObserver`] to
//! [`PorterStemmer::stem_with_observer`](super::PorterStemmer::stem_with_observer).

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::phase::Phase;

/// Receives the input and output of every phase that runs.
pub trait PhaseObserver {
    /// Called once per executed phase, in pipeline order.
    fn on_phase(&mut self, phase: Phase, before: &str, after: &str);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {
    fn on_phase(&mut self, _phase: Phase, _before: &str, _after: &str) {}
}

/// Observer that emits a `tracing` event for every phase that changed the word.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PhaseObserver for TracingObserver {
    fn on_phase(&mut self, phase: Phase, before: &str, after: &str) {
        if before != after {
            trace!(phase = phase.name(), before, after, "stemming phase rewrote word");
        }
    }
}

/// One recorded phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStep {
    pub phase: Phase,
    pub input: String,
    pub output: String,
}

impl PhaseStep {
    /// Whether this phase changed the word.
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

/// Observer that records every phase, for display or assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    pub steps: Vec<PhaseStep>,
}

impl StemTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The final word, if any phase ran.
    pub fn result(&self) -> Option<&str> {
        self.steps.last().map(|step| step.output.as_str())
    }

    /// Phases that changed the word.
    pub fn changes(&self) -> impl Iterator<Item = &PhaseStep> {
        self.steps.iter().filter(|step| step.changed())
    }
}

impl PhaseObserver for StemTrace {
    fn on_phase(&mut self, phase: Phase, before: &str, after: &str) {
        self.steps.push(PhaseStep {
            phase,
            input: before.to_string(),
            output: after.to_string(),
        });
    }
}
