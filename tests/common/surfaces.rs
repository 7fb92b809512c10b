//! Render-sink and capture test doubles

use visuomotor_rs::capture::{PointerCapture, RenderSink};
use visuomotor_rs::{Point, PointerId, Result, VisuomotorError};

/// A drawn segment as received by the sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnSegment {
    pub from: Point,
    pub to: Point,
    pub pressure: f64,
}

/// Surface double recording every instruction it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub path_starts: Vec<Point>,
    pub segments: Vec<DrawnSegment>,
    pub clears: usize,
    pub capture_requests: Vec<PointerId>,
    /// When true, capture requests fail (the non-fatal degradation path)
    pub fail_capture: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_capture() -> Self {
        Self {
            fail_capture: true,
            ..Self::default()
        }
    }
}

impl RenderSink for RecordingSurface {
    fn begin_path(&mut self, at: Point) {
        self.path_starts.push(at);
    }

    fn draw_segment(&mut self, from: Point, to: Point, pressure: f64) {
        self.segments.push(DrawnSegment { from, to, pressure });
    }

    fn clear_and_redraw_guides(&mut self) {
        self.segments.clear();
        self.clears += 1;
    }
}

impl PointerCapture for RecordingSurface {
    fn request_capture(&mut self, pointer: PointerId) -> Result<()> {
        self.capture_requests.push(pointer);
        if self.fail_capture {
            Err(VisuomotorError::Capture(
                "platform refused capture".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
