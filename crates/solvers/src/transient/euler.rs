//! Forward Euler solver for scalar ODEs.
//!
//! Steps `dy/dt = f(t, y)` forward from an initial condition using explicit
//! Euler with a fixed step size `h`:
//!
//! ```text
//! y_{n+1} = y_n + h * f(t_n, y_n)
//! t_{n+1} = t_n + h
//! ```
//!
//! The derivative is always evaluated at the current pair before time
//! advances.
//!
//! # Example
//!
//! ```
//! use marcher_core::from_fn;
//! use marcher_solvers::transient::euler;
//!
//! let f = from_fn(|_t, _y| 2.0);
//! let trajectory = euler::integrate(&f, 0.0, 0.0, 1.0, 3)?;
//!
//! assert_eq!(trajectory.t_vals(), [0.0, 1.0, 2.0, 3.0]);
//! assert_eq!(trajectory.y_vals(), [0.0, 2.0, 4.0, 6.0]);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod error;
mod event;
mod request;
mod solution;
mod step_count;
mod trajectory;

pub use action::Action;
pub use error::{DomainCause, DomainError, Error};
pub use event::Event;
pub use request::Request;
pub use solution::{Solution, Status};
pub use step_count::{StepCount, StepCountError};
pub use trajectory::Trajectory;

use log::{debug, trace, warn};
use marcher_core::{Derivative, Observer, Point};

/// Integrates `dy/dt = f(t, y)` with forward Euler over `n_steps` steps.
///
/// Returns a trajectory of `n_steps + 1` points starting at `(t0, y0)`.
/// With `n_steps == 0` the derivative is never evaluated.
///
/// # Errors
///
/// Returns [`Error::Domain`] if the derivative fails or returns a non-finite
/// value at any point. The call fails as a whole; no partial trajectory is
/// returned.
pub fn integrate<D>(
    derivative: &D,
    t0: f64,
    y0: f64,
    h: f64,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    D: Derivative,
{
    let request = Request::new(t0, y0, h, n_steps);
    solve_unobserved(derivative, &request).map(|solution| solution.trajectory)
}

/// Integrates a request using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial point and emit step 0 to the observer.
/// 2. For each step:
///    - Evaluate the derivative at the current `(t, y)`.
///    - Reject failures and non-finite rates.
///    - Advance the state: `y + h * rate`.
///    - Advance time: `t + h`.
///    - Record the point and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial point and after each
/// integration step, and may return [`Action::StopEarly`] to end the run
/// between steps. This is the cancellation point for callers.
///
/// # Errors
///
/// Returns [`Error::Domain`] if the derivative fails or returns a non-finite
/// value at any point.
pub fn solve<D, Obs>(
    derivative: &D,
    request: &Request,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative,
    Obs: Observer<Event, Action>,
{
    let (h, steps) = (request.h(), request.steps());
    let (mut t, mut y) = (request.t0(), request.y0());

    debug!("forward Euler: t0 = {t}, y0 = {y}, h = {h}, steps = {steps}");

    let mut trajectory = Trajectory::start(t, y, steps);

    let event = Event {
        step: 0,
        point: Point::new(t, y),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!("forward Euler stopped by observer before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        });
    }

    for step in 1..=steps {
        let rate = rate_at(derivative, step - 1, t, y).inspect_err(|err| warn!("{err}"))?;

        y += h * rate;
        t += h;
        trajectory.push(t, y);

        trace!("step {step}: t = {t}, y = {y}");

        let event = Event {
            step,
            point: Point::new(t, y),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("forward Euler stopped by observer after {step} of {steps} steps");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            });
        }
    }

    debug!("forward Euler finished: t = {t}, y = {y}");

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates a request using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Domain`] if the derivative fails or returns a non-finite
/// value at any point.
pub fn solve_unobserved<D>(derivative: &D, request: &Request) -> Result<Solution, Error>
where
    D: Derivative,
{
    solve(derivative, request, ())
}

/// Evaluates the derivative at the point with index `step`.
fn rate_at<D>(derivative: &D, step: usize, t: f64, y: f64) -> Result<f64, DomainError>
where
    D: Derivative,
{
    let rate = derivative
        .evaluate(t, y)
        .map_err(|err| DomainError::failed(step, t, y, err))?;

    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(DomainError::non_finite(step, t, y, rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;
    use marcher_core::{from_fn, try_from_fn};

    // --- Test fixtures ---

    #[derive(Debug)]
    struct Undefined;

    impl fmt::Display for Undefined {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("undefined")
        }
    }

    impl std::error::Error for Undefined {}

    /// dy/dt = 7 t² (y − 4)^(3/5), undefined in the reals for y < 4.
    fn demo(t: f64, y: f64) -> f64 {
        7.0 * t.powi(2) * (y - 4.0).powf(0.6)
    }

    // --- Tests ---

    #[test]
    fn zero_steps_returns_initial_condition() {
        let f = from_fn(|_t, _y| -> f64 { panic!("derivative must not be evaluated") });

        let trajectory = integrate(&f, 5.0, 2.0, 0.1, 0).expect("should return initial");

        assert_eq!(trajectory.t_vals(), [5.0]);
        assert_eq!(trajectory.y_vals(), [2.0]);
    }

    #[test]
    fn zero_derivative_keeps_state_constant() {
        let f = from_fn(|_t, _y| 0.0);

        let trajectory = integrate(&f, 0.0, 1.0, 0.5, 4).expect("should solve");

        assert_eq!(trajectory.t_vals(), [0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(trajectory.y_vals(), [1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn constant_derivative_grows_linearly() {
        let k = 2.0;
        let f = from_fn(move |_t, _y| k);

        let trajectory = integrate(&f, 0.0, 0.0, 1.0, 3).expect("should solve");

        assert_eq!(trajectory.y_vals(), [0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn lengths_match_step_count_plus_one() {
        let f = from_fn(|t, y| t - y);

        for n in [0, 1, 7, 100] {
            let trajectory = integrate(&f, 0.3, -1.2, 0.01, n).expect("should solve");
            assert_eq!(trajectory.t_vals().len(), n + 1);
            assert_eq!(trajectory.y_vals().len(), n + 1);
            assert_eq!(trajectory.t_vals()[0], 0.3);
            assert_eq!(trajectory.y_vals()[0], -1.2);
        }
    }

    #[test]
    fn time_advances_linearly() {
        let f = from_fn(|t, y| t * y);
        let (t0, h) = (1.5, 0.1);

        let trajectory = integrate(&f, t0, 1.0, h, 50).expect("should solve");

        for (i, t) in trajectory.t_vals().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = t0 + i as f64 * h;
            assert_relative_eq!(*t, expected, max_relative = 1e-12);
        }
        for pair in trajectory.t_vals().windows(2) {
            assert_eq!(pair[1], pair[0] + h);
        }
    }

    #[test]
    fn exponential_decay_matches_discrete_solution() {
        // Euler on y' = -y gives y_n = (1 - h)^n exactly in exact arithmetic.
        let f = from_fn(|_t, y| -y);

        let trajectory = integrate(&f, 0.0, 1.0, 0.1, 10).expect("should solve");

        assert_relative_eq!(trajectory.last().y, 0.9_f64.powi(10), epsilon = 1e-12);
        assert_relative_eq!(trajectory.last().t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn derivative_is_evaluated_at_current_point() {
        // y' = t: forward Euler sums h * t_i for i < n, never t_n.
        let f = from_fn(|t, _y| t);

        let trajectory = integrate(&f, 0.0, 0.0, 1.0, 3).expect("should solve");

        assert_eq!(trajectory.y_vals(), [0.0, 0.0, 1.0, 3.0]);
    }

    #[test]
    fn zero_step_size_is_applied_literally() {
        let f = from_fn(|_t, _y| 3.0);

        let trajectory = integrate(&f, 2.0, 1.0, 0.0, 3).expect("should solve");

        assert_eq!(trajectory.t_vals(), [2.0, 2.0, 2.0, 2.0]);
        assert_eq!(trajectory.y_vals(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn negative_step_size_marches_backwards() {
        let f = from_fn(|_t, _y| 1.0);

        let trajectory = integrate(&f, 1.0, 0.0, -0.5, 2).expect("should solve");

        assert_eq!(trajectory.t_vals(), [1.0, 0.5, 0.0]);
        assert_eq!(trajectory.y_vals(), [0.0, -0.5, -1.0]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let f = from_fn(|t, y| (t * y).sin() + y.cos());

        let first = integrate(&f, 0.0, 0.5, 0.01, 200).expect("should solve");
        let second = integrate(&f, 0.0, 0.5, 0.01, 200).expect("should solve");

        assert_eq!(first, second);
    }

    #[test]
    fn demo_equation_from_equilibrium_stays_put() {
        let f = from_fn(demo);

        let trajectory = integrate(&f, 0.0, 4.0, 0.05, 50).expect("should solve");

        assert!(trajectory.y_vals().iter().all(|&y| y == 4.0));
        assert_relative_eq!(trajectory.last().t, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_derivative_is_a_domain_error() {
        let f = from_fn(demo);

        let err = integrate(&f, 0.0, 3.0, 0.05, 10).unwrap_err();

        let err = match err {
            Error::Domain(err) => err,
            other => panic!("expected a domain error, got {other:?}"),
        };
        assert_eq!(err.step, 0);
        assert_eq!(err.t, 0.0);
        assert_eq!(err.y, 3.0);
        assert!(matches!(err.cause, DomainCause::NonFinite(v) if v.is_nan()));
    }

    #[test]
    fn failing_derivative_aborts_at_failing_step() {
        let f = try_from_fn(|t, y| if t >= 1.0 { Err(Undefined) } else { Ok(y) });

        let err = integrate(&f, 0.0, 1.0, 0.25, 10).unwrap_err();

        let err = match err {
            Error::Domain(err) => err,
            other => panic!("expected a domain error, got {other:?}"),
        };
        assert_eq!(err.step, 4);
        assert_eq!(err.t, 1.0);
        assert!(matches!(err.cause, DomainCause::Failed(_)));
        assert!(err.to_string().contains("step 4"));
    }

    #[test]
    fn observer_can_stop_early() {
        let f = from_fn(|_t, _y| 1.0);
        let request = Request::new(0.0, 0.0, 0.1, 100);

        let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(&f, &request, observer).expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6);
    }

    #[test]
    fn observer_can_stop_before_first_step() {
        let f = from_fn(|_t, _y| -> f64 { panic!("derivative must not be evaluated") });
        let request = Request::new(0.0, 0.0, 0.1, 10);

        let solution =
            solve(&f, &request, |_: &Event| Some(Action::StopEarly)).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.trajectory.len(), 1);
    }

    #[test]
    fn observer_sees_every_point() {
        let f = from_fn(|_t, _y| 2.0);
        let request = Request::new(0.0, 0.0, 0.25, 4);

        let mut events = Vec::new();
        let solution = solve(&f, &request, |event: &Event| {
            events.push(*event);
            None
        })
        .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 4);

        let steps: Vec<_> = events.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);

        let points: Vec<_> = events.iter().map(|e| e.point).collect();
        let expected: Vec<_> = solution.trajectory.points().collect();
        assert_eq!(points, expected);
    }
}
