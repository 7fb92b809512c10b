//! Input capture core: transform, session state, dispatcher, telemetry
//!
//! This is the research-critical part of the apparatus. The dispatcher turns
//! a stream of raw pointer events into an incrementally rendered stroke and
//! an append-only telemetry record, with the visual path optionally rotated
//! against the physical path by the perturbation transform.
//!
//! # Main Types
//!
//! - [`InputDispatcher`] - State machine over pointer down/move/up/cancel
//! - [`StrokeSession`] - Active-stroke bookkeeping (id, last positions)
//! - [`TelemetryLog`] - Ordered sample log with CSV export
//! - [`Rotation`] - Fixed perturbation rotation with cached sin/cos

pub mod dispatcher;
pub mod session;
pub mod telemetry;
pub mod transform;

pub use dispatcher::{EventOutcome, InputDispatcher, PointerCapture, RenderSink};
pub use session::StrokeSession;
pub use telemetry::{Sample, TelemetryLog, CSV_HEADER};
pub use transform::{advance, visual_delta, Rotation};
