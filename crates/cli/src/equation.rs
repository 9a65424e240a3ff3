use std::convert::Infallible;

use clap::ValueEnum;
use marcher_core::{Derivative, from_fn};

/// Built-in right-hand sides selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Equation {
    /// dy/dt = 7 t² (y − 4)^(3/5); undefined in the reals once y < 4.
    Demo,
    /// dy/dt = −k y
    Decay,
    /// dy/dt = k y
    Growth,
    /// dy/dt = k
    Constant,
}

impl Equation {
    /// Evaluates the right-hand side at `(t, y)` with rate constant `k`.
    ///
    /// `Demo` ignores `k`. For `y < 4` it returns `NaN`, which the solver
    /// reports as a domain error.
    #[must_use]
    pub fn rate_of_change(self, k: f64, t: f64, y: f64) -> f64 {
        match self {
            Self::Demo => 7.0 * t.powi(2) * (y - 4.0).powf(3.0 / 5.0),
            Self::Decay => -k * y,
            Self::Growth => k * y,
            Self::Constant => k,
        }
    }

    /// Returns the equation as a [`Derivative`] with rate constant `k`.
    pub fn derivative(self, k: f64) -> impl Derivative<Error = Infallible> {
        from_fn(move |t, y| self.rate_of_change(k, t, y))
    }

    /// Human-readable form of the equation, used in logs and plot titles.
    #[must_use]
    pub fn describe(self, k: f64) -> String {
        match self {
            Self::Demo => "dy/dt = 7t²(y − 4)^(3/5)".to_owned(),
            Self::Decay => format!("dy/dt = −{k}·y"),
            Self::Growth => format!("dy/dt = {k}·y"),
            Self::Constant => format!("dy/dt = {k}"),
        }
    }
}
