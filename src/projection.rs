//! Shape projection
//!
//! Transforms a body-frame polygon into the world frame for every
//! trajectory sample: rotate each vertex by the sample heading, then
//! translate by the sample position. Every sample is recomputed from the
//! body polygon independently, so frames carry no state between them.

use nalgebra::Matrix2;

use crate::common::{BodyPolygon, MotionError, MotionResult, Sample, Trajectory, WorldPolygon};

/// Standard 2D rotation matrix for angle `theta` [rad]
pub fn rotation_matrix(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// Transform the body polygon into the world frame for one sample.
pub fn project_sample(body: &BodyPolygon, sample: &Sample) -> WorldPolygon {
    let rot = rotation_matrix(sample.heading);
    let translation = sample.position.to_vector();
    let points = body
        .points
        .iter()
        .map(|v| (rot * v.to_vector() + translation).into())
        .collect();
    WorldPolygon::from_points(points)
}

/// Transform the body polygon into the world frame for every sample.
///
/// Returns one world polygon per sample, in sample order, each with the
/// same vertex count and winding as the body polygon. Fails before any
/// computation if the polygon or the trajectory is empty.
pub fn project(body: &BodyPolygon, trajectory: &Trajectory) -> MotionResult<Vec<WorldPolygon>> {
    if body.is_empty() {
        return Err(MotionError::InvalidParameter(
            "body polygon must not be empty".to_string(),
        ));
    }
    if trajectory.is_empty() {
        return Err(MotionError::InvalidParameter(
            "trajectory must not be empty".to_string(),
        ));
    }

    Ok(trajectory
        .samples
        .iter()
        .map(|sample| project_sample(body, sample))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Point2D, Sample};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn single_sample_trajectory(x: f64, y: f64, heading: f64) -> Trajectory {
        Trajectory::from_samples(vec![Sample::new(Point2D::new(x, y), heading)])
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let p = Point2D::new(0.7, -1.3);
        let body = BodyPolygon::from_points(vec![p]).unwrap();
        for &theta in &[0.0, 0.4, PI / 2.0, PI, 5.1, 2.0 * PI] {
            let traj = single_sample_trajectory(0.0, 0.0, theta);
            let out = project(&body, &traj).unwrap();
            let q = out[0].points[0];
            let norm_in = p.distance(&Point2D::origin());
            let norm_out = q.distance(&Point2D::origin());
            assert!((norm_in - norm_out).abs() < TOL);
        }
    }

    #[test]
    fn test_quarter_turn_rotation() {
        let body = BodyPolygon::from_points(vec![Point2D::new(1.0, 0.0)]).unwrap();
        let traj = single_sample_trajectory(0.0, 0.0, PI / 2.0);
        let out = project(&body, &traj).unwrap();
        assert!(out[0].points[0].distance(&Point2D::new(0.0, 1.0)) < TOL);
    }

    #[test]
    fn test_zero_heading_is_pure_translation() {
        let body = BodyPolygon::rectangle(1.0, 0.5);
        let traj = single_sample_trajectory(3.0, -2.0, 0.0);
        let out = project(&body, &traj).unwrap();
        for (v, w) in body.points.iter().zip(out[0].points.iter()) {
            assert!((w.x - (v.x + 3.0)).abs() < TOL);
            assert!((w.y - (v.y - 2.0)).abs() < TOL);
        }
    }

    #[test]
    fn test_closure_survives_projection() {
        let body = BodyPolygon::rectangle(1.0, 0.5);
        assert!(body.is_closed());
        let traj = single_sample_trajectory(0.3, 0.8, 1.1);
        let out = project(&body, &traj).unwrap();
        let poly = &out[0];
        assert_eq!(poly.len(), body.len());
        assert_eq!(poly.points[0], poly.points[poly.len() - 1]);
    }

    #[test]
    fn test_one_polygon_per_sample() {
        let body = BodyPolygon::rectangle(1.0, 0.5);
        let traj = Trajectory::from_samples(
            (0..7)
                .map(|i| Sample::new(Point2D::new(i as f64, 0.0), 0.1 * i as f64))
                .collect(),
        );
        let out = project(&body, &traj).unwrap();
        assert_eq!(out.len(), 7);
        for poly in &out {
            assert_eq!(poly.len(), body.len());
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let body = BodyPolygon::rectangle(1.0, 0.5);
        let traj = single_sample_trajectory(0.2, 0.4, 2.7);
        let a = project(&body, &traj).unwrap();
        let b = project(&body, &traj).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let body = BodyPolygon { points: Vec::new() };
        let traj = single_sample_trajectory(0.0, 0.0, 0.0);
        assert!(matches!(
            project(&body, &traj),
            Err(MotionError::InvalidParameter(_))
        ));

        let body = BodyPolygon::rectangle(1.0, 0.5);
        let empty = Trajectory::from_samples(Vec::new());
        assert!(matches!(
            project(&body, &empty),
            Err(MotionError::InvalidParameter(_))
        ));
    }
}
