//! Conversions from kurbo/peniko values to egui values.

use egui::{Color32, Pos2, Vec2};
use kurbo::{Point, Size};
use peniko::Color;

/// Convert an unpremultiplied peniko color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Narrow a kurbo point to egui's `f32` space.
pub fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Narrow a kurbo size to an egui vector.
pub fn to_vec2(size: Size) -> Vec2 {
    Vec2::new(size.width as f32, size.height as f32)
}

/// egui measures in `f32`; layout runs in `f64`.
pub fn to_size(vec: Vec2) -> Size {
    Size::new(f64::from(vec.x), f64::from(vec.y))
}
