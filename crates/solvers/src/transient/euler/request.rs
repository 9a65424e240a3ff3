use super::{Error, StepCount, StepCountError};

/// Initial conditions and step parameters for a forward Euler integration.
///
/// Only the step count is validated. `h` may be zero or negative, and no
/// value is checked for finiteness; the solver applies the update rule
/// literally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    t0: f64,
    y0: f64,
    h: f64,
    steps: usize,
}

impl Request {
    /// Creates a request from an unsigned step count.
    #[must_use]
    pub const fn new(t0: f64, y0: f64, h: f64, steps: usize) -> Self {
        Self { t0, y0, h, steps }
    }

    /// Creates a request from an already validated step count.
    #[must_use]
    pub const fn with_step_count(t0: f64, y0: f64, h: f64, steps: StepCount) -> Self {
        Self::new(t0, y0, h, steps.get())
    }

    /// Creates a request from a raw step count such as an `i64` or `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `steps` is negative, non-integral,
    /// non-finite, or too large.
    pub fn try_new<S>(t0: f64, y0: f64, h: f64, steps: S) -> Result<Self, Error>
    where
        S: TryInto<StepCount, Error = StepCountError>,
    {
        let steps = steps.try_into()?;
        Ok(Self::with_step_count(t0, y0, h, steps))
    }

    /// Returns the initial time.
    #[must_use]
    pub const fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the initial state.
    #[must_use]
    pub const fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the step size.
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.h
    }

    /// Returns the number of forward steps.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_whole_counts() {
        let request = Request::try_new(0.0, 1.0, 0.5, 4_i64).expect("valid request");
        assert_eq!(request, Request::new(0.0, 1.0, 0.5, 4));
    }

    #[test]
    fn try_new_rejects_negative_counts() {
        let err = Request::try_new(0.0, 1.0, 0.5, -1_i64).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(StepCountError::Negative)));
    }

    #[test]
    fn try_new_rejects_fractional_counts() {
        let err = Request::try_new(0.0, 1.0, 0.5, 1.5).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(StepCountError::NonIntegral)));
    }

    #[test]
    fn step_size_is_not_validated() {
        let request = Request::new(0.0, 1.0, 0.0, 3);
        assert_eq!(request.h(), 0.0);

        let request = Request::new(0.0, 1.0, -0.25, 3);
        assert_eq!(request.h(), -0.25);
    }
}
