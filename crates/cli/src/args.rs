use clap::{ArgAction, Parser};
use marcher_solvers::transient::euler::{Request, StepCount};

use crate::Equation;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Integrate dy/dt = f(t, y) with the explicit Euler method",
    long_about = None
)]
pub struct Cli {
    /// Right-hand side f(t, y) to integrate.
    #[arg(short, long, value_enum, default_value_t = Equation::Demo)]
    pub equation: Equation,

    /// Rate constant k used by the decay, growth, and constant equations.
    #[arg(short = 'k', long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Initial time.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub t0: f64,

    /// Initial state at t0.
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub y0: f64,

    /// Step size h.
    #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub step: f64,

    /// Number of forward steps (a non-negative whole number).
    #[arg(short = 'n', long, default_value = "50", allow_negative_numbers = true)]
    pub steps: StepCount,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Open a plot of the trajectory after printing the table.
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,
}

impl Cli {
    /// Builds the solver request from the parsed arguments.
    #[must_use]
    pub fn request(&self) -> Request {
        Request::with_step_count(self.t0, self.y0, self.step, self.steps)
    }

    /// Returns the default log filter for the requested verbosity.
    ///
    /// `RUST_LOG` still takes precedence when set.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
