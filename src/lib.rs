//! rigid_motion - 2D rigid-body trajectory animation
//!
//! This crate computes planar rigid-body trajectories (position and heading
//! over time), projects a body-frame polygon outline into the world frame
//! for every time step, and assembles the result into labeled per-frame
//! curves ready for an animation sink.

// Core modules
pub mod common;
pub mod utils;

// Kinematics modules
pub mod trajectory;
pub mod projection;
pub mod animation;

// Re-export common types for convenience
pub use common::{Point2D, Sample, Trajectory, BodyPolygon, WorldPolygon};
pub use common::FrameSink;
pub use common::{MotionError, MotionResult};
