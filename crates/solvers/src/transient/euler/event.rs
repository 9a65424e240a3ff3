use marcher_core::Point;

/// Event emitted by the Euler solver for each point.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The time and approximate state at this step.
    pub point: Point,
}
