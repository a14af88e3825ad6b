//! Reference motion laws
//!
//! Position and heading laws are independent functions of the normalized
//! parameter. Heading is deliberately not derived from the velocity
//! direction; the two laws may sweep in opposite directions.

use crate::common::Point2D;

/// Linear sweep of a scalar over the normalized parameter u in [0, 1]
#[derive(Debug, Clone, Copy)]
pub struct LinearSweep {
    pub start: f64,
    pub end: f64,
}

impl LinearSweep {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Value at parameter `u`, with u = 0 at `start` and u = 1 at `end`.
    pub fn at(&self, u: f64) -> f64 {
        self.start + (self.end - self.start) * u
    }

    /// The sweep as a heading law.
    pub fn into_law(self) -> impl Fn(f64) -> f64 {
        move |u| self.at(u)
    }
}

/// Unit-circle position law: the swept angle maps to (sin, cos)
///
/// Note the x = sin, y = cos convention: the sweep starts at (0, 1) and
/// traverses the circle clockwise for an increasing angle.
pub fn circle_position(sweep: LinearSweep) -> impl Fn(f64) -> Point2D {
    move |u| {
        let theta = sweep.at(u);
        Point2D::new(theta.sin(), theta.cos())
    }
}
