//! Solvers for transient problems — marching a state forward in time.
//!
//! # Solvers
//!
//! - [`euler`] — explicit (forward) Euler with a fixed step size

pub mod euler;
