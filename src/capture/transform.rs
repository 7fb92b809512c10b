//! Coordinate transform mapping physical movement to visual movement
//!
//! Pure arithmetic, parameterized by experiment mode and a fixed rotation
//! angle. Baseline and aftereffect integrate the raw delta; perturbation
//! rotates the delta before integration. Both branches go through delta
//! integration so the perturbed and unperturbed code paths stay symmetric.

use crate::types::{ExperimentMode, Point};

/// A fixed 2D rotation with precomputed sine and cosine
///
/// Constructed once from the configured perturbation angle; not mutable per
/// event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    degrees: f64,
    cos: f64,
    sin: f64,
}

impl Rotation {
    /// Create a rotation from an angle in degrees (positive = clockwise in
    /// screen coordinates, where y grows downward)
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            degrees,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    /// The configured angle in degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Rotate a displacement vector
    pub fn apply(&self, dx: f64, dy: f64) -> (f64, f64) {
        (
            dx * self.cos - dy * self.sin,
            dx * self.sin + dy * self.cos,
        )
    }
}

/// Map a physical movement delta to a visual movement delta for `mode`
pub fn visual_delta(mode: ExperimentMode, rotation: Rotation, dx: f64, dy: f64) -> (f64, f64) {
    if mode.is_perturbed() {
        rotation.apply(dx, dy)
    } else {
        (dx, dy)
    }
}

/// Advance the visual position by a physical delta under `mode`
pub fn advance(
    mode: ExperimentMode,
    rotation: Rotation,
    last_visual: Point,
    dx: f64,
    dy: f64,
) -> Point {
    let (vx, vy) = visual_delta(mode, rotation, dx, dy);
    last_visual.offset(vx, vy)
}
