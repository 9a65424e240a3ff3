/// Control actions an observer can return to the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before the next step and return the points computed so far.
    StopEarly,
}
