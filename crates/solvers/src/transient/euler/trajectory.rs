use marcher_core::Point;

/// Index-aligned time and state sequences produced by an integration.
///
/// `t_vals()[i]` is the time at which `y_vals()[i]` is the approximate state.
/// A trajectory always holds at least the initial point.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t_vals: Vec<f64>,
    y_vals: Vec<f64>,
}

impl Trajectory {
    /// Starts a trajectory at the initial point, reserving room for `steps`
    /// further points.
    pub(crate) fn start(t0: f64, y0: f64, steps: usize) -> Self {
        let mut t_vals = Vec::with_capacity(steps.saturating_add(1));
        let mut y_vals = Vec::with_capacity(steps.saturating_add(1));
        t_vals.push(t0);
        y_vals.push(y0);
        Self { t_vals, y_vals }
    }

    pub(crate) fn push(&mut self, t: f64, y: f64) {
        self.t_vals.push(t);
        self.y_vals.push(y);
    }

    /// Returns the time values.
    #[must_use]
    pub fn t_vals(&self) -> &[f64] {
        &self.t_vals
    }

    /// Returns the state values.
    #[must_use]
    pub fn y_vals(&self) -> &[f64] {
        &self.y_vals
    }

    /// Returns the number of points, which is the step count plus one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t_vals.len()
    }

    /// Always `false`; kept for parity with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t_vals.is_empty()
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.t_vals.get(index)?, *self.y_vals.get(index)?))
    }

    /// Returns the final point.
    #[must_use]
    pub fn last(&self) -> Point {
        let i = self.len() - 1;
        Point::new(self.t_vals[i], self.y_vals[i])
    }

    /// Iterates over the `(t, y)` points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.t_vals
            .iter()
            .zip(&self.y_vals)
            .map(|(&t, &y)| Point::new(t, y))
    }

    /// Consumes the trajectory, returning `(t_vals, y_vals)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.t_vals, self.y_vals)
    }
}
