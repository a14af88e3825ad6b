//! Ship Animation Example
//!
//! Sweeps a rectangular ship outline around the unit circle while its
//! heading rotates the opposite way, and writes one PNG per time step.

use std::f64::consts::PI;

use rigid_motion::animation::build_frames;
use rigid_motion::common::BodyPolygon;
use rigid_motion::projection;
use rigid_motion::trajectory::{circle_position, LinearSweep, TrajectoryGenerator};
use rigid_motion::utils::{colors, AnimationConfig, AnimationRenderer, PathStyle, Visualizer};

fn main() {
    println!("Ship animation start!!");

    // Parameters
    let n_timesteps = 100;
    let length = 1.0;
    let width = 0.5;

    let generator = match TrajectoryGenerator::new(n_timesteps) {
        Ok(g) => g,
        Err(e) => {
            println!("Setup failed: {}", e);
            return;
        }
    };

    // Position runs around the unit circle while the heading sweeps the
    // full turn in the opposite direction.
    let trajectory = generator.generate(
        circle_position(LinearSweep::new(0.0, 2.0 * PI)),
        LinearSweep::new(2.0 * PI, 0.0).into_law(),
    );
    println!("Generated {} samples", trajectory.len());

    let body = BodyPolygon::rectangle(length, width);
    let shapes = match projection::project(&body, &trajectory) {
        Ok(shapes) => shapes,
        Err(e) => {
            println!("Projection failed: {}", e);
            return;
        }
    };

    let frames = match build_frames(&trajectory, &shapes) {
        Ok(frames) => frames,
        Err(e) => {
            println!("Frame assembly failed: {}", e);
            return;
        }
    };

    let config = AnimationConfig {
        x_range: Some((-2.0, 2.0)),
        y_range: Some((-2.0, 2.0)),
        ..AnimationConfig::default()
    };
    match AnimationRenderer::new("img/ship_animation", config) {
        Ok(mut renderer) => match renderer.render_all(&frames) {
            Ok(()) => println!(
                "Wrote {} frames to img/ship_animation/",
                renderer.frames_written()
            ),
            Err(e) => println!("Rendering failed: {}", e),
        },
        Err(e) => println!("Could not create output directory: {}", e),
    }

    // Static overview: full path with the final shape pose
    let mut vis = Visualizer::new();
    vis.set_title("Ship trajectory overview");
    vis.set_x_range(-2.0, 2.0);
    vis.set_y_range(-2.0, 2.0);
    vis.plot_path_xy(
        &trajectory.x_coords(),
        &trajectory.y_coords(),
        &PathStyle::new(colors::PATH, "position"),
    );
    vis.plot_polygon(
        &shapes[shapes.len() - 1],
        &PathStyle::new(colors::SHAPE, "ship shape"),
    );
    match vis.save_svg("img/ship_animation/overview.svg", 800, 600) {
        Ok(()) => println!("Wrote img/ship_animation/overview.svg"),
        Err(e) => println!("Overview plot failed: {}", e),
    }

    println!("Ship animation finish!!");
}
