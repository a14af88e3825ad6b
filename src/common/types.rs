//! Common types used throughout rigid_motion

use nalgebra::Vector2;

use crate::common::error::{MotionError, MotionResult};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// One time step of a rigid-body trajectory: position and heading [rad]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Point2D,
    pub heading: f64,
}

impl Sample {
    pub fn new(position: Point2D, heading: f64) -> Self {
        Self { position, heading }
    }
}

/// Ordered sequence of samples, fixed at generation time
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub samples: Vec<Sample>,
}

impl Trajectory {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn positions(&self) -> Vec<Point2D> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Positions of the first `count` samples, for a trailing path trace.
    /// `count` is clamped to the trajectory length.
    pub fn position_prefix(&self, count: usize) -> Vec<Point2D> {
        let n = count.min(self.samples.len());
        self.samples[..n].iter().map(|s| s.position).collect()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position.y).collect()
    }
}

/// Closed polygon outline in the body's local frame
///
/// The first and last vertex coincide by convention so the outline
/// closes when drawn as a line sequence.
#[derive(Debug, Clone)]
pub struct BodyPolygon {
    pub points: Vec<Point2D>,
}

impl BodyPolygon {
    /// Build a polygon from explicit body-frame points.
    pub fn from_points(points: Vec<Point2D>) -> MotionResult<Self> {
        if points.is_empty() {
            return Err(MotionError::InvalidParameter(
                "body polygon must not be empty".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Axis-aligned rectangle of length `l` (along body x) and width `w`
    /// (along body y), centered on the body origin. The first corner is
    /// repeated to close the outline.
    pub fn rectangle(l: f64, w: f64) -> Self {
        Self {
            points: vec![
                Point2D::new(l / 2.0, w / 2.0),
                Point2D::new(l / 2.0, -w / 2.0),
                Point2D::new(-l / 2.0, -w / 2.0),
                Point2D::new(-l / 2.0, w / 2.0),
                Point2D::new(l / 2.0, w / 2.0),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the outline is explicitly closed (first vertex == last).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Body polygon transformed into the world frame for one sample
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPolygon {
    pub points: Vec<Point2D>,
}

impl WorldPolygon {
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}
