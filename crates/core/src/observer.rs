/// Hook called once per Newton iteration or per scanned seed.
///
/// The CLI's trace output and any early stop of a run or a seed scan go
/// through this trait. Returning `None` leaves the run alone; `Some(action)`
/// hands the solver one of its own actions, such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` to run
/// without one.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally asks the solver to act.
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

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
