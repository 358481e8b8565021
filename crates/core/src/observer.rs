/// A hook an optimizer calls with one event per iteration.
///
/// The event type `E` is specific to each optimizer (for example the
/// current parameters and objective value), and `A` is the set of actions
/// that optimizer honours. Returning `None` means "carry on".
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is needed.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
