//! Input event dispatcher — the capture state machine
//!
//! Consumes normalized [`PointerEvent`]s in delivery order, drives the
//! [`StrokeSession`], applies the coordinate transform, and emits two side
//! effects per processed move: a render instruction to the [`RenderSink`]
//! and an appended [`TelemetryLog`] sample. Processing is synchronous; one
//! event is fully handled before the next is dispatched.
//!
//! The active experiment mode is held here and changed through an explicit
//! setter; there is no ambient/global mode state.

use crate::capture::session::StrokeSession;
use crate::capture::telemetry::TelemetryLog;
use crate::capture::transform::{self, Rotation};
use crate::error::Result;
use crate::types::{ExperimentMode, Point, PointerEvent, PointerId};

/// Logical drawing instructions consumed by the platform renderer
///
/// The core never touches pixels; it only issues these.
pub trait RenderSink {
    /// Begin a new stroke path at `at`
    fn begin_path(&mut self, at: Point);
    /// Draw one segment of the active stroke
    fn draw_segment(&mut self, from: Point, to: Point, pressure: f64);
    /// Clear all drawn strokes and redraw the static guides
    fn clear_and_redraw_guides(&mut self);
}

/// Pointer capture requests towards the input platform
pub trait PointerCapture {
    /// Request exclusive delivery of subsequent events for `pointer`, so a
    /// stroke continues even when the pointer leaves the surface bounds.
    fn request_capture(&mut self, pointer: PointerId) -> Result<()>;
}

/// What the dispatcher did with one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event was dropped: wrong target, non-owning pointer, or no active
    /// stroke. State and log are untouched.
    Ignored,
    /// A new stroke began
    StrokeStarted { stroke_id: u64 },
    /// A segment was rendered and one sample logged
    Sampled {
        /// Whether platform default gestures should be suppressed; false
        /// when the event was not cancelable
        suppress_default: bool,
    },
    /// The active stroke ended
    StrokeEnded,
}

impl EventOutcome {
    /// Whether the platform should suppress its default gesture handling
    /// (scroll/zoom/selection) for this event
    pub fn suppresses_default(&self) -> bool {
        match self {
            EventOutcome::StrokeStarted { .. } => true,
            EventOutcome::Sampled { suppress_default } => *suppress_default,
            EventOutcome::Ignored | EventOutcome::StrokeEnded => false,
        }
    }

    /// Whether the event changed dispatcher state
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventOutcome::Ignored)
    }
}

/// State machine turning raw pointer events into strokes and samples
#[derive(Debug)]
pub struct InputDispatcher {
    mode: ExperimentMode,
    rotation: Rotation,
    /// Pressure substituted when the device reports none
    default_pressure: f64,
    session: StrokeSession,
}

impl InputDispatcher {
    /// Create a dispatcher with the given perturbation rotation and
    /// default pressure, starting in baseline mode
    pub fn new(rotation: Rotation, default_pressure: f64) -> Self {
        Self {
            mode: ExperimentMode::Baseline,
            rotation,
            default_pressure,
            session: StrokeSession::new(),
        }
    }

    /// Currently active experiment mode
    pub fn mode(&self) -> ExperimentMode {
        self.mode
    }

    /// Select the experiment mode; takes effect from the next move event
    pub fn set_mode(&mut self, mode: ExperimentMode) {
        self.mode = mode;
    }

    /// The configured perturbation rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Read access to the stroke session state
    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    /// Process one pointer event
    ///
    /// Events must be delivered in platform order; samples are appended to
    /// `log` in that same order.
    pub fn handle_event<S>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
        log: &mut TelemetryLog,
    ) -> EventOutcome
    where
        S: RenderSink + PointerCapture,
    {
        match event {
            PointerEvent::Down {
                pointer,
                position,
                on_surface,
            } => self.on_down(pointer, position, on_surface, surface),
            PointerEvent::Move {
                pointer,
                position,
                pressure,
                cancelable,
            } => self.on_move(pointer, position, pressure, cancelable, surface, log),
            PointerEvent::Up { pointer } | PointerEvent::Cancel { pointer } => {
                self.on_release(pointer)
            }
        }
    }

    fn on_down<S>(
        &mut self,
        pointer: PointerId,
        position: Point,
        on_surface: bool,
        surface: &mut S,
    ) -> EventOutcome
    where
        S: RenderSink + PointerCapture,
    {
        // Only the capture surface may start a stroke
        if !on_surface {
            return EventOutcome::Ignored;
        }

        // Single-pointer model: a second contact while a stroke is active is
        // ignored and the first stroke continues
        if self.session.is_active() {
            tracing::debug!(
                pointer = pointer.0,
                owner = self.session.owner().0,
                "ignoring down from second pointer during active stroke"
            );
            return EventOutcome::Ignored;
        }

        let stroke_id = self.session.begin(pointer, position);

        // Capture failure degrades gracefully: the stroke continues, but
        // moves outside the surface may be delivered late or not at all
        if let Err(e) = surface.request_capture(pointer) {
            tracing::warn!(pointer = pointer.0, error = %e, "pointer capture failed");
        }

        surface.begin_path(position);
        EventOutcome::StrokeStarted { stroke_id }
    }

    fn on_move<S>(
        &mut self,
        pointer: PointerId,
        position: Point,
        pressure: Option<f64>,
        cancelable: bool,
        surface: &mut S,
        log: &mut TelemetryLog,
    ) -> EventOutcome
    where
        S: RenderSink,
    {
        if !self.session.is_active() || pointer != self.session.owner() {
            return EventOutcome::Ignored;
        }

        let pressure = pressure.unwrap_or(self.default_pressure);

        let (dx, dy) = position.delta_from(self.session.last_physical());
        let last_visual = self.session.last_visual();
        let next_visual = transform::advance(self.mode, self.rotation, last_visual, dx, dy);

        surface.draw_segment(last_visual, next_visual, pressure);
        log.append(
            self.mode,
            self.session.stroke_id(),
            position,
            next_visual,
            pressure,
        );
        self.session.advance(position, next_visual);

        EventOutcome::Sampled {
            suppress_default: cancelable,
        }
    }

    fn on_release(&mut self, pointer: PointerId) -> EventOutcome {
        if !self.session.is_active() || pointer != self.session.owner() {
            return EventOutcome::Ignored;
        }
        self.session.end();
        EventOutcome::StrokeEnded
    }
}
