use std::{convert::Infallible, marker::PhantomData};

/// The right-hand side of a scalar ODE `dy/dt = f(t, y)`.
///
/// Implementations must be deterministic: the same `(t, y)` always yields the
/// same rate of change. Solvers borrow a derivative for the duration of a
/// single call and never store it.
///
/// Plain closures can be adapted with [`from_fn`] (infallible) or
/// [`try_from_fn`] (fallible).
pub trait Derivative {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the instantaneous rate of change at `(t, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative is undefined at `(t, y)`.
    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<D: Derivative + ?Sized> Derivative for &D {
    type Error = D::Error;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        (**self).evaluate(t, y)
    }
}

/// A derivative backed by an infallible closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

/// Wraps `f(t, y) -> f64` as a [`Derivative`] that never fails.
///
/// A non-finite return value is still rejected by solvers, so closures such as
/// `|_, y| (y - 4.0).powf(0.6)` surface a domain error instead of silently
/// propagating `NaN`.
pub const fn from_fn<F>(function: F) -> FromFn<F>
where
    F: Fn(f64, f64) -> f64,
{
    FromFn { function }
}

impl<F> Derivative for FromFn<F>
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(t, y))
    }
}

/// A derivative backed by a fallible closure. See [`try_from_fn`].
pub struct TryFromFn<F, E> {
    function: F,
    _marker: PhantomData<fn() -> E>,
}

/// Wraps `f(t, y) -> Result<f64, E>` as a [`Derivative`].
pub const fn try_from_fn<F, E>(function: F) -> TryFromFn<F, E>
where
    F: Fn(f64, f64) -> Result<f64, E>,
{
    TryFromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, E> Derivative for TryFromFn<F, E>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        (self.function)(t, y)
    }
}
