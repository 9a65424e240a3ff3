//! Reusable observers for marcher solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `marcher-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers ([`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopFlag`] — stops a solver between steps once a shared flag is raised
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: marcher_core::Observer
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_flag;

pub use stop_flag::StopFlag;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
