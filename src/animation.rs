//! Animation frame assembly
//!
//! Packs a trajectory and its projected shapes into per-step frames of
//! labeled curves: the trailing path trace up to the current step and the
//! world-frame shape outline at that step. Frame labels are the step
//! indices as strings, suitable as slider step identifiers.

use crate::common::{MotionError, MotionResult, Trajectory, WorldPolygon};

/// Series name of the trailing path trace
pub const POSITION_SERIES: &str = "position";
/// Series name of the shape outline
pub const SHAPE_SERIES: &str = "ship shape";

/// A named 2D curve within one frame
#[derive(Debug, Clone)]
pub struct LabeledCurve {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl LabeledCurve {
    pub fn new(name: &str, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// One animation step: a label and the curves to draw for it
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub label: String,
    pub curves: Vec<LabeledCurve>,
}

impl AnimationFrame {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            curves: Vec::new(),
        }
    }

    pub fn push_curve(&mut self, curve: LabeledCurve) {
        self.curves.push(curve);
    }
}

/// Assemble one frame per trajectory sample.
///
/// Frame i carries the positions of samples 0..=i as the "position" series
/// and the i-th world polygon as the "ship shape" series. `shapes` must
/// have exactly one polygon per sample.
pub fn build_frames(
    trajectory: &Trajectory,
    shapes: &[WorldPolygon],
) -> MotionResult<Vec<AnimationFrame>> {
    if trajectory.len() != shapes.len() {
        return Err(MotionError::InvalidParameter(format!(
            "trajectory has {} samples but {} shapes were given",
            trajectory.len(),
            shapes.len()
        )));
    }

    let frames = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let trace = trajectory.position_prefix(i + 1);
            let mut frame = AnimationFrame::new(&i.to_string());
            frame.push_curve(LabeledCurve::new(
                POSITION_SERIES,
                trace.iter().map(|p| p.x).collect(),
                trace.iter().map(|p| p.y).collect(),
            ));
            frame.push_curve(LabeledCurve::new(
                SHAPE_SERIES,
                shape.x_coords(),
                shape.y_coords(),
            ));
            frame
        })
        .collect();
    Ok(frames)
}
