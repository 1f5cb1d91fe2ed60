/// Receives events from a solver and optionally returns a control action.
///
/// The event and action types are chosen by each solver. Returning `None`
/// lets the solver continue normally.
///
/// Implemented for `()` (ignore every event) and for any
/// `FnMut(&E) -> Option<A>` closure, so most callers never name a type.
pub trait Observer<E, A> {
    /// Handles a single event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
