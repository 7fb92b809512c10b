//! Property-based tests for the coordinate transform

mod common;

use proptest::prelude::*;

use visuomotor_rs::capture::{advance, visual_delta, Rotation};
use visuomotor_rs::{ExperimentMode, Point};

fn delta() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64)
}

proptest! {
    /// Baseline: visual tracks physical exactly, for any delta sequence.
    /// Both positions start equal and apply the identical additions in the
    /// same order, so equality is exact, not approximate.
    #[test]
    fn baseline_visual_equals_physical(deltas in prop::collection::vec(delta(), 1..50)) {
        let rotation = Rotation::from_degrees(30.0);
        let mut physical = Point::new(100.0, 100.0);
        let mut visual = physical;

        for (dx, dy) in deltas {
            physical = physical.offset(dx, dy);
            visual = advance(ExperimentMode::Baseline, rotation, visual, dx, dy);
        }

        prop_assert_eq!(visual, physical);
    }

    /// Aftereffect uses the same identity mapping as baseline
    #[test]
    fn aftereffect_matches_baseline((dx, dy) in delta()) {
        let rotation = Rotation::from_degrees(30.0);
        prop_assert_eq!(
            visual_delta(ExperimentMode::Aftereffect, rotation, dx, dy),
            visual_delta(ExperimentMode::Baseline, rotation, dx, dy)
        );
    }

    /// Rotation is an isometry: the delta's length is preserved
    #[test]
    fn perturbation_preserves_delta_length((dx, dy) in delta()) {
        let rotation = Rotation::from_degrees(30.0);
        let (rx, ry) = visual_delta(ExperimentMode::Perturbation, rotation, dx, dy);
        let original = dx.hypot(dy);
        let rotated = rx.hypot(ry);
        prop_assert!((original - rotated).abs() <= 1e-9 * original.max(1.0));
    }

    /// Rotating by the inverse angle recovers the original delta
    #[test]
    fn inverse_rotation_round_trips((dx, dy) in delta()) {
        let forward = Rotation::from_degrees(30.0);
        let back = Rotation::from_degrees(-30.0);
        let (rx, ry) = forward.apply(dx, dy);
        let (ox, oy) = back.apply(rx, ry);
        prop_assert!((ox - dx).abs() <= 1e-9 * dx.abs().max(1.0));
        prop_assert!((oy - dy).abs() <= 1e-9 * dy.abs().max(1.0));
    }
}
