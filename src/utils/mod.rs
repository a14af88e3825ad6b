//! Utility modules for rigid_motion

pub mod visualization;

pub use visualization::{AnimationConfig, AnimationRenderer, PathStyle, Visualizer, colors};
