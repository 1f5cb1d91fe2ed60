/// What an observer may ask the Euler solver to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run; the solution keeps every snapshot up to this event.
    StopEarly,
}
