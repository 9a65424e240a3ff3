use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use log::debug;
use marcher_core::Observer;

use crate::traits::CanStopEarly;

/// An observer that stops a solver once a shared flag is raised.
///
/// Clones share the same flag, so one handle can be passed to the solver while
/// another is raised from elsewhere, including another thread. The flag is
/// checked once per event, which for time-marching solvers means between steps.
///
/// # Example
///
/// ```
/// use marcher_core::from_fn;
/// use marcher_observers::StopFlag;
/// use marcher_solvers::transient::euler::{self, Request, Status};
///
/// let flag = StopFlag::new();
/// flag.raise();
///
/// let f = from_fn(|_t, y| -y);
/// let solution = euler::solve(&f, &Request::new(0.0, 1.0, 0.1, 10), flag.clone())?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// # Ok::<(), euler::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    raised: Arc<AtomicBool>,
}

impl StopFlag {
    /// Creates a new, lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Every clone observes the change.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    /// Lowers the flag so it can be reused for another run.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }

    /// Returns `true` once the flag has been raised.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopFlag {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_raised() {
            debug!("stop flag raised, requesting early stop");
            return Some(A::stop_early());
        }
        None
    }
}
