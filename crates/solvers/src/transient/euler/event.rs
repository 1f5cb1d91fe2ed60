use predprey_core::Snapshot;

/// Event emitted by the Euler solver for each snapshot.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Snapshot of the model input and output at this step.
    pub snapshot: &'a Snapshot<I, O>,
}

impl<'a, I, O> Event<'a, I, O> {
    pub(crate) fn new(step: usize, snapshot: &'a Snapshot<I, O>) -> Self {
        Self { step, snapshot }
    }
}
