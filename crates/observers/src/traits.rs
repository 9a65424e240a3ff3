//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use marcher_core::Observer;
//! use marcher_observers::traits::CanStopEarly;
//!
//! struct MaxEvents {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E, A: CanStopEarly> Observer<E, A> for MaxEvents {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use marcher_solvers::transient::euler;

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
