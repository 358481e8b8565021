/// Actions an observer can take during optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the optimizer and return the best solution found so far.
    StopEarly,
}
