use std::str::FromStr;

use thiserror::Error;

/// A validated, non-negative number of integration steps.
///
/// Converting from signed or floating-point values rejects anything that is
/// not a non-negative whole number representable as `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StepCount(usize);

/// Errors that can occur when validating a step count.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepCountError {
    #[error("step count must be non-negative")]
    Negative,

    #[error("step count must be a whole number")]
    NonIntegral,

    #[error("step count must be finite")]
    NonFinite,

    #[error("step count is too large")]
    TooLarge,

    #[error("step count is not a number")]
    Unparsable,
}

impl StepCount {
    /// Creates a step count from an unsigned value.
    #[must_use]
    pub const fn new(steps: usize) -> Self {
        Self(steps)
    }

    /// Returns the number of steps.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for StepCount {
    fn from(steps: usize) -> Self {
        Self(steps)
    }
}

impl From<StepCount> for usize {
    fn from(steps: StepCount) -> Self {
        steps.0
    }
}

impl TryFrom<i64> for StepCount {
    type Error = StepCountError;

    fn try_from(steps: i64) -> Result<Self, Self::Error> {
        if steps < 0 {
            return Err(StepCountError::Negative);
        }
        usize::try_from(steps)
            .map(Self)
            .map_err(|_| StepCountError::TooLarge)
    }
}

impl TryFrom<f64> for StepCount {
    type Error = StepCountError;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn try_from(steps: f64) -> Result<Self, Self::Error> {
        if !steps.is_finite() {
            return Err(StepCountError::NonFinite);
        }
        if steps < 0.0 {
            return Err(StepCountError::Negative);
        }
        if steps.fract() != 0.0 {
            return Err(StepCountError::NonIntegral);
        }
        // `usize::MAX as f64` rounds up to 2^64, which itself is out of range.
        if steps >= usize::MAX as f64 {
            return Err(StepCountError::TooLarge);
        }
        Ok(Self(steps as usize))
    }
}

impl FromStr for StepCount {
    type Err = StepCountError;

    /// Parses a whole number such as `"50"`; `"50.0"` is accepted, `"2.5"`
    /// and `"-3"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(steps) = s.parse::<i64>() {
            return Self::try_from(steps);
        }
        s.parse::<f64>()
            .map_err(|_| StepCountError::Unparsable)
            .and_then(Self::try_from)
    }
}
