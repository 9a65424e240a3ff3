use std::error::Error as StdError;

use thiserror::Error;

use super::StepCountError;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] StepCountError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The derivative could not produce a real rate of change at some point.
///
/// `step` is the index of the point the derivative was evaluated at, so the
/// failing pair is `(t_vals[step], y_vals[step])`.
#[derive(Debug, Error)]
#[error("derivative undefined at step {step} (t = {t}, y = {y}): {cause}")]
pub struct DomainError {
    pub step: usize,
    pub t: f64,
    pub y: f64,
    #[source]
    pub cause: DomainCause,
}

/// Why a derivative evaluation was rejected.
#[derive(Debug, Error)]
pub enum DomainCause {
    #[error("derivative failed")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative returned non-finite value {0}")]
    NonFinite(f64),
}

impl DomainError {
    pub(crate) fn failed<E: StdError + Send + Sync + 'static>(
        step: usize,
        t: f64,
        y: f64,
        err: E,
    ) -> Self {
        Self {
            step,
            t,
            y,
            cause: DomainCause::Failed(Box::new(err)),
        }
    }

    pub(crate) fn non_finite(step: usize, t: f64, y: f64, value: f64) -> Self {
        Self {
            step,
            t,
            y,
            cause: DomainCause::NonFinite(value),
        }
    }
}
