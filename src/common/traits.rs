//! Common traits defining interfaces for rigid_motion

use crate::animation::AnimationFrame;
use crate::common::error::MotionResult;

/// Trait for animation frame consumers (the visualization sink boundary)
///
/// The core hands each assembled frame to a sink in sample order; what a
/// sink does with it (draw, encode, buffer) is outside this crate's core.
pub trait FrameSink {
    /// Consume one frame
    fn render_frame(&mut self, frame: &AnimationFrame) -> MotionResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationFrame;

    struct CountingSink {
        frames: usize,
    }

    impl FrameSink for CountingSink {
        fn render_frame(&mut self, _frame: &AnimationFrame) -> MotionResult<()> {
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_frame_sink_trait() {
        let mut sink = CountingSink { frames: 0 };
        let frame = AnimationFrame::new("0");
        assert!(sink.render_frame(&frame).is_ok());
        assert_eq!(sink.frames, 1);
    }
}
