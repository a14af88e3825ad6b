//! Trajectory generator
//!
//! Samples a pair of motion laws at evenly spaced points of the
//! normalized parameter, inclusive of both ends.

use crate::common::{MotionError, MotionResult, Point2D, Sample, Trajectory};

/// Samples (position, heading) motion laws into a fixed-length trajectory
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryGenerator {
    n_steps: usize,
}

impl TrajectoryGenerator {
    /// Create a generator producing `n_steps` samples per trajectory.
    ///
    /// `n_steps` must be positive; a zero count is rejected rather than
    /// degrading to an empty trajectory.
    pub fn new(n_steps: usize) -> MotionResult<Self> {
        if n_steps == 0 {
            return Err(MotionError::InvalidParameter(
                "n_steps must be positive".to_string(),
            ));
        }
        Ok(Self { n_steps })
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Sample both laws at `n_steps` evenly spaced parameters in [0, 1].
    ///
    /// The first sample is evaluated at u = 0 and the last at u = 1, so a
    /// linear sweep hits its start and end values exactly. A single-step
    /// trajectory contains only the start evaluation.
    pub fn generate<P, H>(&self, position_law: P, heading_law: H) -> Trajectory
    where
        P: Fn(f64) -> Point2D,
        H: Fn(f64) -> f64,
    {
        let samples = (0..self.n_steps)
            .map(|i| {
                let u = if self.n_steps > 1 {
                    i as f64 / (self.n_steps - 1) as f64
                } else {
                    0.0
                };
                Sample::new(position_law(u), heading_law(u))
            })
            .collect();
        Trajectory::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::laws::{circle_position, LinearSweep};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn reference_trajectory(n_steps: usize) -> Trajectory {
        let gen = TrajectoryGenerator::new(n_steps).unwrap();
        gen.generate(
            circle_position(LinearSweep::new(0.0, 2.0 * PI)),
            LinearSweep::new(2.0 * PI, 0.0).into_law(),
        )
    }

    #[test]
    fn test_sample_count() {
        for &n in &[1, 2, 4, 100] {
            assert_eq!(reference_trajectory(n).len(), n);
        }
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = TrajectoryGenerator::new(0);
        assert!(matches!(result, Err(MotionError::InvalidParameter(_))));
    }

    #[test]
    fn test_endpoints_match_law_extremes() {
        let traj = reference_trajectory(100);
        let first = &traj.samples[0];
        let last = &traj.samples[99];
        assert!((first.heading - 2.0 * PI).abs() < TOL);
        assert!(last.heading.abs() < TOL);
        // full revolution returns to the start point
        assert!(first.position.distance(&last.position) < TOL);
    }

    #[test]
    fn test_single_step_is_start_evaluation() {
        let traj = reference_trajectory(1);
        assert_eq!(traj.len(), 1);
        let s = &traj.samples[0];
        assert!(s.position.x.abs() < TOL);
        assert!((s.position.y - 1.0).abs() < TOL);
        assert!((s.heading - 2.0 * PI).abs() < TOL);
    }

    #[test]
    fn test_four_step_reference_scenario() {
        // angles [0, 2pi/3, 4pi/3, 2pi], headings swept the opposite way
        let traj = reference_trajectory(4);
        let expected_headings = [2.0 * PI, 4.0 * PI / 3.0, 2.0 * PI / 3.0, 0.0];
        for (sample, &expected) in traj.samples.iter().zip(expected_headings.iter()) {
            assert!((sample.heading - expected).abs() < TOL);
        }
        assert!(traj.samples[0].position.distance(&Point2D::new(0.0, 1.0)) < TOL);
        assert!(traj.samples[3].position.distance(&Point2D::new(0.0, 1.0)) < TOL);
        let mid = traj.samples[1].position;
        assert!((mid.x - (2.0 * PI / 3.0).sin()).abs() < TOL);
        assert!((mid.y - (2.0 * PI / 3.0).cos()).abs() < TOL);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = reference_trajectory(25);
        let b = reference_trajectory(25);
        for (sa, sb) in a.samples.iter().zip(b.samples.iter()) {
            assert_eq!(sa, sb);
        }
    }
}
