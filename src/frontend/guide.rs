//! House tracing guide drawn behind the subject's strokes
//!
//! A faint house outline (base rectangle plus roof) sized to 35% of the
//! canvas and placed slightly below center, matching the reference task
//! material. Repainted every frame, so clear and resize need no special
//! handling.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

/// Fraction of the canvas occupied by the guide in each dimension
const GUIDE_SCALE: f32 = 0.35;
/// Roof eaves overhang in logical pixels
const EAVES_OVERHANG: f32 = 20.0;
/// Guide line width
const GUIDE_STROKE_WIDTH: f32 = 4.0;

/// Draw the house guide into `rect`
pub fn draw_house_guide(painter: &Painter, rect: Rect) {
    let w = rect.width() * GUIDE_SCALE;
    let h = rect.height() * GUIDE_SCALE;
    let x = rect.min.x + (rect.width() - w) / 2.0;
    // Slightly lower than true center
    let y = rect.min.y + (rect.height() - h) / 2.0 + h * 0.1;

    let stroke = Stroke::new(GUIDE_STROKE_WIDTH, Color32::from_black_alpha(38));
    let base_top = y + h * 0.35;

    // Base
    painter.add(Shape::closed_line(
        vec![
            Pos2::new(x, base_top),
            Pos2::new(x + w, base_top),
            Pos2::new(x + w, y + h),
            Pos2::new(x, y + h),
        ],
        stroke,
    ));

    // Roof
    painter.add(Shape::line(
        vec![
            Pos2::new(x - EAVES_OVERHANG, base_top),
            Pos2::new(x + w / 2.0, y),
            Pos2::new(x + w + EAVES_OVERHANG, base_top),
        ],
        stroke,
    ));
}
