/// Actions an observer can take while a method iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the method and return the current iterate.
    ///
    /// The returned [`Solution`](crate::Solution) has status
    /// [`Status::StoppedByObserver`](crate::Status::StoppedByObserver).
    StopEarly,
}
