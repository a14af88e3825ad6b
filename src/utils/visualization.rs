//! Visualization utilities for rigid_motion
//!
//! Provides a gnuplot-backed frame sink for trajectory animations.

use std::path::PathBuf;

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth};
use itertools::Itertools;
use itertools::MinMaxResult;

use crate::animation::{AnimationFrame, POSITION_SERIES, SHAPE_SERIES};
use crate::common::{FrameSink, MotionError, MotionResult, WorldPolygon};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const PATH: &str = "#35C788";
    pub const SHAPE: &str = BLUE;
}

/// Style for curve rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Path")
    }
}

/// Recognized layout options for the animation sink
///
/// Anything beyond these (widget styling, playback timing) belongs to the
/// consumer of the rendered frames, not to this crate.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Fixed x-axis range, or None to fit the data
    pub x_range: Option<(f64, f64)>,
    /// Fixed y-axis range, or None to fit the data
    pub y_range: Option<(f64, f64)>,
    /// Lock the aspect ratio to 1:1 so the shape is not distorted
    pub lock_aspect: bool,
    /// Prefix prepended to the frame label in each frame title
    pub label_prefix: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            x_range: Some((-20.0, 20.0)),
            y_range: None,
            lock_aspect: true,
            label_prefix: "Time step: ".to_string(),
        }
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Set aspect ratio (None for auto)
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) -> &mut Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Plot a curve from x,y vectors
    pub fn plot_path_xy(&mut self, x: &[f64], y: &[f64], style: &PathStyle) -> &mut Self {
        self.figure.axes2d()
            .lines(x, y, &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self
    }

    /// Plot a closed shape outline
    pub fn plot_polygon(&mut self, polygon: &WorldPolygon, style: &PathStyle) -> &mut Self {
        self.plot_path_xy(&polygon.x_coords(), &polygon.y_coords(), style)
    }

    /// Plot all curves of one animation frame with semantic colors
    pub fn plot_frame(&mut self, frame: &AnimationFrame) -> &mut Self {
        for curve in &frame.curves {
            let color = match curve.name.as_str() {
                POSITION_SERIES => colors::PATH,
                SHAPE_SERIES => colors::SHAPE,
                _ => colors::GRAY,
            };
            let style = PathStyle::new(color, &curve.name);
            self.plot_path_xy(&curve.x, &curve.y, &style);
        }
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> MotionResult<()> {
        self.apply_settings();
        self.figure.show()
            .map_err(|e| MotionError::VisualizationError(e.to_string()))
            .map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> MotionResult<()> {
        self.apply_settings();
        self.figure.save_to_png(path, width, height)
            .map_err(|e| MotionError::VisualizationError(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str, width: u32, height: u32) -> MotionResult<()> {
        self.apply_settings();
        self.figure.save_to_svg(path, width, height)
            .map_err(|e| MotionError::VisualizationError(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis ranges covering every curve of every frame
///
/// Returns None for an axis with no finite extent (e.g. no frames).
pub fn fit_ranges(frames: &[AnimationFrame]) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
    let xs = frames.iter().flat_map(|f| f.curves.iter()).flat_map(|c| c.x.iter().copied());
    let ys = frames.iter().flat_map(|f| f.curves.iter()).flat_map(|c| c.y.iter().copied());
    (minmax_range(xs), minmax_range(ys))
}

fn minmax_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Frame sink writing one PNG per frame into a directory
///
/// Frames are numbered in arrival order (frame_0000.png, ...), so the
/// file sequence matches the slider step order of the frame labels.
pub struct AnimationRenderer {
    config: AnimationConfig,
    out_dir: PathBuf,
    frames_written: usize,
}

impl AnimationRenderer {
    /// Create a renderer writing into `out_dir`, creating it if needed.
    pub fn new(out_dir: &str, config: AnimationConfig) -> MotionResult<Self> {
        std::fs::create_dir_all(out_dir)?;
        Ok(Self {
            config,
            out_dir: PathBuf::from(out_dir),
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Fill any unconfigured axis range from the data of the whole frame
    /// sequence, so every frame shares one frame of reference instead of
    /// being auto-ranged individually.
    fn fit_unconfigured_ranges(&mut self, frames: &[AnimationFrame]) {
        if self.config.x_range.is_some() && self.config.y_range.is_some() {
            return;
        }
        let (x, y) = fit_ranges(frames);
        if self.config.x_range.is_none() {
            self.config.x_range = x;
        }
        if self.config.y_range.is_none() {
            self.config.y_range = y;
        }
    }

    /// Render a whole frame sequence in order.
    ///
    /// Axes without a configured range are fitted to the full sequence
    /// before the first frame is drawn.
    pub fn render_all(&mut self, frames: &[AnimationFrame]) -> MotionResult<()> {
        self.fit_unconfigured_ranges(frames);
        for frame in frames {
            self.render_frame(frame)?;
        }
        Ok(())
    }
}

impl FrameSink for AnimationRenderer {
    fn render_frame(&mut self, frame: &AnimationFrame) -> MotionResult<()> {
        let mut vis = Visualizer::new();
        vis.set_title(&format!("{}{}", self.config.label_prefix, frame.label));
        if let Some((min, max)) = self.config.x_range {
            vis.set_x_range(min, max);
        }
        if let Some((min, max)) = self.config.y_range {
            vis.set_y_range(min, max);
        }
        if !self.config.lock_aspect {
            vis.set_aspect_ratio(None);
        }
        vis.plot_frame(frame);

        let path = self.out_dir.join(format!("frame_{:04}.png", self.frames_written));
        let path = path.to_string_lossy().into_owned();
        vis.save_png(&path, 800, 600)?;
        self.frames_written += 1;
        Ok(())
    }
}
