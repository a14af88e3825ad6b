//! Trajectory generation from decoupled motion laws

pub mod generator;
pub mod laws;

pub use generator::TrajectoryGenerator;
pub use laws::{LinearSweep, circle_position};
