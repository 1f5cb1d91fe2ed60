use predprey_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots from every step, the initial state first.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the last recorded snapshot.
    ///
    /// The history always holds at least the initial snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot<I, O>> {
        self.history.last()
    }
}
