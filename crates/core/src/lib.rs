//! Core traits and types for scalar time-marching integration.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Derivative`] — the right-hand side `f(t, y)` of `dy/dt = f(t, y)`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Point`] — a single `(t, y)` pair along a trajectory

mod derivative;
mod observer;
mod point;

pub use derivative::{Derivative, FromFn, TryFromFn, from_fn, try_from_fn};
pub use observer::Observer;
pub use point::Point;
