//! Stroke session state
//!
//! Tracks whether a stroke is in progress, which pointer owns it, and the
//! last known physical and visual positions. One instance lives for the
//! whole application and is mutated in place by the dispatcher; it never
//! holds history beyond the immediately preceding sample.

use crate::types::{Point, PointerId};

/// Mutable state of the (single) active stroke
#[derive(Debug, Clone, Default)]
pub struct StrokeSession {
    /// True between a down event and the matching up/cancel
    active: bool,
    /// Pointer that owns the active stroke; meaningful only while active
    owner: PointerId,
    /// Monotonic stroke counter, incremented on every accepted down event
    stroke_id: u64,
    /// Last known physical (raw input) position
    last_physical: Point,
    /// Last known visually rendered position
    last_visual: Point,
}

impl StrokeSession {
    /// Create a fresh session with no stroke recorded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is currently in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The pointer owning the active stroke
    pub fn owner(&self) -> PointerId {
        self.owner
    }

    /// Identifier of the current (or most recent) stroke
    pub fn stroke_id(&self) -> u64 {
        self.stroke_id
    }

    /// Last known physical position; meaningful only while active
    pub fn last_physical(&self) -> Point {
        self.last_physical
    }

    /// Last known visual position; meaningful only while active
    pub fn last_visual(&self) -> Point {
        self.last_visual
    }

    /// Start a new stroke at `position`, owned by `pointer`
    ///
    /// Physical and visual positions start equal regardless of mode; any
    /// divergence accumulates from subsequent move deltas.
    pub fn begin(&mut self, pointer: PointerId, position: Point) -> u64 {
        self.active = true;
        self.owner = pointer;
        self.stroke_id += 1;
        self.last_physical = position;
        self.last_visual = position;
        self.stroke_id
    }

    /// Record the positions reached by a processed move event
    pub fn advance(&mut self, physical: Point, visual: Point) {
        self.last_physical = physical;
        self.last_visual = visual;
    }

    /// End the active stroke
    ///
    /// Positions are intentionally retained; they are reset by the next
    /// `begin`.
    pub fn end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_positions() {
        let mut session = StrokeSession::new();
        session.begin(PointerId(1), Point::new(5.0, 6.0));
        session.advance(Point::new(9.0, 9.0), Point::new(8.0, 10.0));
        session.end();

        let id = session.begin(PointerId(2), Point::new(1.0, 2.0));
        assert_eq!(id, 2);
        assert_eq!(session.last_physical(), Point::new(1.0, 2.0));
        assert_eq!(session.last_visual(), Point::new(1.0, 2.0));
        assert_eq!(session.owner(), PointerId(2));
    }

    #[test]
    fn test_stroke_id_increments_per_begin() {
        let mut session = StrokeSession::new();
        assert_eq!(session.stroke_id(), 0);
        assert_eq!(session.begin(PointerId(0), Point::default()), 1);
        session.end();
        assert_eq!(session.begin(PointerId(0), Point::default()), 2);
        assert_eq!(session.stroke_id(), 2);
    }

    #[test]
    fn test_end_retains_positions() {
        let mut session = StrokeSession::new();
        session.begin(PointerId(0), Point::new(3.0, 4.0));
        session.advance(Point::new(7.0, 8.0), Point::new(6.5, 8.5));
        session.end();
        assert!(!session.is_active());
        assert_eq!(session.last_physical(), Point::new(7.0, 8.0));
        assert_eq!(session.last_visual(), Point::new(6.5, 8.5));
    }
}
