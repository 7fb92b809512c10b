//! Test data builders for pointer event sequences

use visuomotor_rs::{Point, PointerEvent, PointerId};

/// Down event on the capture surface from pointer 0
pub fn down(x: f64, y: f64) -> PointerEvent {
    down_from(0, x, y)
}

/// Down event on the capture surface from a specific pointer
pub fn down_from(pointer: u64, x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        pointer: PointerId(pointer),
        position: Point::new(x, y),
        on_surface: true,
    }
}

/// Down event that missed the capture surface
pub fn down_off_surface(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        pointer: PointerId(0),
        position: Point::new(x, y),
        on_surface: false,
    }
}

/// Cancelable move event without device pressure, from pointer 0
pub fn move_to(x: f64, y: f64) -> PointerEvent {
    move_from(0, x, y, None)
}

/// Move event with explicit pressure, from pointer 0
pub fn move_with_pressure(x: f64, y: f64, pressure: f64) -> PointerEvent {
    move_from(0, x, y, Some(pressure))
}

/// Move event from a specific pointer
pub fn move_from(pointer: u64, x: f64, y: f64, pressure: Option<f64>) -> PointerEvent {
    PointerEvent::Move {
        pointer: PointerId(pointer),
        position: Point::new(x, y),
        pressure,
        cancelable: true,
    }
}

/// Up event from pointer 0
pub fn up() -> PointerEvent {
    up_from(0)
}

/// Up event from a specific pointer
pub fn up_from(pointer: u64) -> PointerEvent {
    PointerEvent::Up {
        pointer: PointerId(pointer),
    }
}

/// Cancel event from pointer 0
pub fn cancel() -> PointerEvent {
    PointerEvent::Cancel {
        pointer: PointerId(0),
    }
}
