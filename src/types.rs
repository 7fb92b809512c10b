//! Shared data types for the visuomotor apparatus
//!
//! Positions are device coordinates relative to the capture surface origin,
//! in logical pixels. The core works in `f64` end to end so that logged
//! samples carry full input precision until rounding at log time.

use serde::{Deserialize, Serialize};

/// A 2D position or displacement in capture-surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`
    pub fn delta_from(&self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    /// Translate by a displacement
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Identifier of a pointing device contact, as reported by the platform
///
/// Used to grant one pointer exclusive ownership of the active stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// Experiment mode selecting how visual position is derived from movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentMode {
    /// Unperturbed 1:1 tracking, recorded before the perturbation block
    #[default]
    Baseline,
    /// Movement deltas are rotated by the perturbation angle
    Perturbation,
    /// Unperturbed again, recorded after the perturbation block
    Aftereffect,
}

impl ExperimentMode {
    /// All modes in experiment order
    pub const ALL: [ExperimentMode; 3] = [
        ExperimentMode::Baseline,
        ExperimentMode::Perturbation,
        ExperimentMode::Aftereffect,
    ];

    /// Identifier used in exported data rows
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentMode::Baseline => "baseline",
            ExperimentMode::Perturbation => "perturbation",
            ExperimentMode::Aftereffect => "aftereffect",
        }
    }

    /// Display name for the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ExperimentMode::Baseline => "Baseline",
            ExperimentMode::Perturbation => "Perturbation",
            ExperimentMode::Aftereffect => "Aftereffect",
        }
    }

    /// Whether movement deltas are rotated in this mode
    pub fn is_perturbed(&self) -> bool {
        matches!(self, ExperimentMode::Perturbation)
    }
}

/// A raw pointer lifecycle event, normalized at the platform boundary
///
/// The frontend translates platform input into these before dispatch, so the
/// core never touches the windowing layer. Pressure is optional here: devices
/// without pressure reporting leave it `None` and the dispatcher resolves the
/// documented default exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Contact began
    Down {
        pointer: PointerId,
        position: Point,
        /// Whether the event originated on the capture surface.
        /// Down events from anywhere else are ignored.
        on_surface: bool,
    },
    /// Contact moved
    Move {
        pointer: PointerId,
        position: Point,
        /// Contact pressure in [0, 1], `None` if the device reports none
        pressure: Option<f64>,
        /// Whether default-gesture suppression is legal for this event
        cancelable: bool,
    },
    /// Contact ended
    Up { pointer: PointerId },
    /// Contact aborted by the platform (e.g. palm rejection, focus loss)
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    /// The pointer this event belongs to
    pub fn pointer(&self) -> PointerId {
        match self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer }
            | PointerEvent::Cancel { pointer } => *pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_delta() {
        let a = Point::new(10.0, 4.0);
        let b = Point::new(3.0, 1.0);
        assert_eq!(a.delta_from(b), (7.0, 3.0));
        assert_eq!(b.offset(7.0, 3.0), a);
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(ExperimentMode::Baseline.as_str(), "baseline");
        assert_eq!(ExperimentMode::Perturbation.display_name(), "Perturbation");
        assert!(ExperimentMode::Perturbation.is_perturbed());
        assert!(!ExperimentMode::Aftereffect.is_perturbed());
    }

    #[test]
    fn test_event_pointer_accessor() {
        let ev = PointerEvent::Up { pointer: PointerId(3) };
        assert_eq!(ev.pointer(), PointerId(3));
    }
}
