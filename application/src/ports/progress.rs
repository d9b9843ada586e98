//! Progress notification port
//!
//! Defines the interface for reporting progress during an analysis run.

use rent_quorum_domain::Source;

/// Stages of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking every source the question
    Query,
    /// Computing cross-source agreement
    Consensus,
    /// Persisting the report
    Report,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Query => "query",
            Phase::Consensus => "consensus",
            Phase::Report => "report",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a source has been queried
    fn on_source_complete(&self, source: Source, answered: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_source_complete(&self, _source: Source, _answered: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
