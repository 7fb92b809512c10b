//! Capture-surface canvas pane
//!
//! Translates egui pointer input into normalized [`PointerEvent`]s for the
//! dispatcher and implements the [`RenderSink`] side: because egui is
//! immediate-mode, drawn segments are retained here and repainted every
//! frame together with the house guide.

use egui::{Color32, Painter, Pos2, Rect, Sense, Stroke, Ui};

use crate::capture::{InputDispatcher, PointerCapture, RenderSink, TelemetryLog};
use crate::error::Result;
use crate::frontend::guide;
use crate::types::{Point, PointerEvent, PointerId};

/// Base rendered stroke width in logical pixels
const BASE_STROKE_WIDTH: f32 = 2.0;
/// Additional width at full pressure
const PRESSURE_WIDTH_GAIN: f32 = 4.0;

/// Rendered width for a given pressure
fn stroke_width(pressure: f64) -> f32 {
    BASE_STROKE_WIDTH + pressure as f32 * PRESSURE_WIDTH_GAIN
}

/// One retained stroke segment, in capture-surface coordinates
#[derive(Debug, Clone, Copy)]
struct StrokeSegment {
    from: Point,
    to: Point,
    pressure: f64,
}

/// The drawing canvas: event intake plus retained stroke rendering
pub struct CanvasPane {
    /// Segments drawn since the last clear
    segments: Vec<StrokeSegment>,
    /// Start of the current path, shown as a contact dot until the first
    /// segment arrives
    path_start: Option<Point>,
    /// Most recent touch force reported by the platform, if any
    last_touch_force: Option<f64>,
}

impl Default for CanvasPane {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasPane {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            path_start: None,
            last_touch_force: None,
        }
    }

    /// Number of retained segments (for the status bar)
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Render the canvas and feed this frame's pointer events through the
    /// dispatcher
    pub fn show(
        &mut self,
        ui: &mut Ui,
        dispatcher: &mut InputDispatcher,
        telemetry: &mut TelemetryLog,
    ) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::drag());
        let rect = response.rect;

        let events = self.collect_events(ui, &response, rect);
        for event in events {
            dispatcher.handle_event(event, self, telemetry);
        }

        self.paint(&painter, rect);
    }

    /// Translate egui input into normalized pointer events, in order
    fn collect_events(&mut self, ui: &Ui, response: &egui::Response, rect: Rect) -> Vec<PointerEvent> {
        // egui exposes a single unified logical pointer; the id stays
        // constant and multi-contact policy is enforced by the dispatcher
        let pointer = PointerId(0);
        let mut events = Vec::new();

        // Track touch force for pressure reporting; mouse input leaves this
        // None and the dispatcher substitutes the documented default
        ui.input(|i| {
            for event in &i.events {
                if let egui::Event::Touch { phase, force, .. } = event {
                    match phase {
                        egui::TouchPhase::Start | egui::TouchPhase::Move => {
                            self.last_touch_force = force.map(|f| f as f64);
                        }
                        egui::TouchPhase::End => {
                            self.last_touch_force = None;
                        }
                        egui::TouchPhase::Cancel => {
                            self.last_touch_force = None;
                            events.push(PointerEvent::Cancel { pointer });
                        }
                    }
                }
            }
        });

        let local = |pos: Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Down {
                    pointer,
                    position: local(pos),
                    // egui hit-testing already routed this press to the
                    // canvas widget
                    on_surface: rect.contains(pos),
                });
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Move {
                    pointer,
                    position: local(pos),
                    pressure: self.last_touch_force,
                    // Native window: no competing default gestures to honor
                    cancelable: true,
                });
            }
        }

        if response.drag_stopped() {
            events.push(PointerEvent::Up { pointer });
        }

        events
    }

    /// Repaint background, guide, and retained strokes
    fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        guide::draw_house_guide(painter, rect);

        let to_screen =
            |p: Point| Pos2::new(rect.min.x + p.x as f32, rect.min.y + p.y as f32);

        // Contact dot before the first move of the session arrives
        if self.segments.is_empty() {
            if let Some(start) = self.path_start {
                painter.circle_filled(to_screen(start), BASE_STROKE_WIDTH, Color32::BLACK);
            }
        }

        for segment in &self.segments {
            painter.line_segment(
                [to_screen(segment.from), to_screen(segment.to)],
                Stroke::new(stroke_width(segment.pressure), Color32::BLACK),
            );
        }
    }
}

impl RenderSink for CanvasPane {
    fn begin_path(&mut self, at: Point) {
        self.path_start = Some(at);
    }

    fn draw_segment(&mut self, from: Point, to: Point, pressure: f64) {
        self.segments.push(StrokeSegment { from, to, pressure });
    }

    fn clear_and_redraw_guides(&mut self) {
        // Guides repaint every frame; only the strokes are retained
        self.segments.clear();
        self.path_start = None;
    }
}

impl PointerCapture for CanvasPane {
    fn request_capture(&mut self, _pointer: PointerId) -> Result<()> {
        // egui captures drags for the pressed widget automatically, so
        // subsequent moves keep arriving even outside the canvas bounds
        Ok(())
    }
}
