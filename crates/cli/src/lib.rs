//! Command-line front end for forward Euler integration.
//!
//! Defines a handful of built-in right-hand sides, integrates one of them with
//! [`euler`], and prints the resulting trajectory as a step / time / value
//! table.
//!
//! [`euler`]: marcher_solvers::transient::euler

mod args;
mod equation;
mod table;

pub use args::Cli;
pub use equation::Equation;
pub use table::write_table;

use log::{error, info};
use marcher_solvers::transient::euler::{self, Trajectory};

/// Integrates the equation selected on the command line.
///
/// # Errors
///
/// Returns an error if the derivative is undefined at any visited point.
pub fn run(cli: &Cli) -> Result<Trajectory, euler::Error> {
    let request = cli.request();
    info!(
        "integrating {} from (t0 = {}, y0 = {}) with h = {} over {} steps",
        cli.equation.describe(cli.rate),
        request.t0(),
        request.y0(),
        request.h(),
        request.steps(),
    );

    let derivative = cli.equation.derivative(cli.rate);
    euler::solve_unobserved(&derivative, &request)
        .map(|solution| solution.trajectory)
        .inspect_err(|err| error!("integration failed: {err}"))
}
