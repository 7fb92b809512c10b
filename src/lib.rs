//! # visuomotor-rs: Visuomotor Rotation Experiment Apparatus
//!
//! A desktop application for visuomotor-rotation research. The subject
//! draws on a capture surface; under perturbation the rendered stroke is
//! rotated by a fixed angle relative to the physical movement, and every
//! move event is logged with physical/visual coordinates, pressure, and
//! timing for later analysis.
//!
//! ## Architecture
//!
//! - **Capture core**: the input dispatcher state machine, coordinate
//!   transform, stroke session state, and append-only telemetry log.
//!   Pure of any windowing concerns; the platform is reached only through
//!   the [`capture::RenderSink`] and [`capture::PointerCapture`] traits.
//! - **Frontend**: eframe/egui shell translating platform input into
//!   normalized pointer events and repainting the retained strokes.
//! - **Config**: persisted app state (preferences, experiment parameters)
//!   stored as JSON under the platform data directory.
//!
//! ## Data flow
//!
//! raw pointer event → [`capture::InputDispatcher`] →
//! [`capture::transform`] (using [`capture::StrokeSession`]) →
//! render sink draws a segment, [`capture::TelemetryLog`] appends a
//! sample → session state updated.

pub mod capture;
pub mod config;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use capture::{EventOutcome, InputDispatcher, Rotation, Sample, TelemetryLog};
pub use config::{AppState, ExperimentConfig};
pub use error::{Result, VisuomotorError};
pub use frontend::VisuomotorApp;
pub use types::{ExperimentMode, Point, PointerEvent, PointerId};
