// Static overview plot of the ship trajectory: the full circular path
// plus the shape outline at a few time steps, saved as a single SVG.
use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::view::ContinuousView;
use plotlib::style::LineStyle;

use std::f64::consts::PI;

use rigid_motion::common::BodyPolygon;
use rigid_motion::projection;
use rigid_motion::trajectory::{circle_position, LinearSweep, TrajectoryGenerator};

fn main() {
    let n_timesteps = 100;

    let generator = TrajectoryGenerator::new(n_timesteps).unwrap();
    let trajectory = generator.generate(
        circle_position(LinearSweep::new(0.0, 2.0 * PI)),
        LinearSweep::new(2.0 * PI, 0.0).into_law(),
    );

    let body = BodyPolygon::rectangle(1.0, 0.5);
    let shapes = projection::project(&body, &trajectory).unwrap();

    let path: Vec<(f64, f64)> = trajectory
        .x_coords()
        .into_iter()
        .zip(trajectory.y_coords())
        .collect();

    let mut v = ContinuousView::new()
        .x_range(-2.0, 2.0)
        .y_range(-2.0, 2.0)
        .x_label("x [m]")
        .y_label("y [m]");

    let s0: Plot = Plot::new(path).line_style(
        LineStyle::new()
            .colour("#35C788"),
    );
    v = v.add(s0);

    // shape outline every quarter revolution
    for i in (0..n_timesteps).step_by(n_timesteps / 4) {
        let outline: Vec<(f64, f64)> = shapes[i]
            .points
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        let s: Plot = Plot::new(outline).line_style(
            LineStyle::new()
                .colour("#0000FF"),
        );
        v = v.add(s);
    }

    Page::single(&v).save("./img/ship_trajectory.svg").unwrap();
    println!("Saved ./img/ship_trajectory.svg");
}
