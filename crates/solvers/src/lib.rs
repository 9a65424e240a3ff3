//! Fixed-step time-marching solvers for scalar ODEs `dy/dt = f(t, y)`.
//!
//! # Modules
//!
//! - [`transient`] — solvers that march a state forward in time
//!
//! The right-hand side is any [`Derivative`]; closures are adapted with
//! [`from_fn`] and [`try_from_fn`].
//!
//! [`Derivative`]: marcher_core::Derivative
//! [`from_fn`]: marcher_core::from_fn
//! [`try_from_fn`]: marcher_core::try_from_fn

pub mod transient;
