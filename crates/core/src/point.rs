/// A single `(t, y)` pair: the approximate state `y` at time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub t: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((t, y): (f64, f64)) -> Self {
        Self::new(t, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.t, point.y)
    }
}
