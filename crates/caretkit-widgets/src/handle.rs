//! Painting selection handles with an egui painter.

use caretkit_core::{HandleCanvas, HandleWidget};
use egui::{Context, Id, LayerId, Order, Painter, Pos2, Shape, Stroke};
use kurbo::{Affine, Circle, Point, Rect};
use peniko::Color;

use crate::convert::{to_color32, to_pos2};

/// `HandleCanvas` backed by an egui painter.
pub struct EguiCanvas<'p> {
    painter: &'p Painter,
    transform: Affine,
}

impl<'p> EguiCanvas<'p> {
    /// Create a canvas with the identity transform.
    pub fn new(painter: &'p Painter) -> Self {
        Self {
            painter,
            transform: Affine::IDENTITY,
        }
    }
}

impl HandleCanvas for EguiCanvas<'_> {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        let (center, radius) = transformed_circle(self.transform, circle);
        self.painter.circle_filled(center, radius, to_color32(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let corners = transformed_corners(self.transform, rect);
        self.painter.add(Shape::convex_polygon(
            corners.to_vec(),
            to_color32(color),
            Stroke::NONE,
        ));
    }
}

/// Center and radius after a rotation/translation/uniform scale.
fn transformed_circle(transform: Affine, circle: Circle) -> (Pos2, f32) {
    let scale = transform.determinant().abs().sqrt();
    (
        to_pos2(transform * circle.center),
        (circle.radius * scale) as f32,
    )
}

/// Rect corners in clockwise order, mapped through `transform`.
fn transformed_corners(transform: Affine, rect: Rect) -> [Pos2; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
    .map(|p| to_pos2(transform * p))
}

/// Paint `handle` with its padded box's origin at `origin`.
pub fn paint_handle(painter: &Painter, origin: Point, handle: &HandleWidget) {
    let mut canvas = EguiCanvas::new(painter);
    handle.paint(&mut canvas, origin);
}

/// Paint `handle` on a foreground layer so it draws above the text.
pub fn show_handle(ctx: &Context, id: Id, origin: Point, handle: &HandleWidget) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, id));
    paint_handle(&painter, origin, handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use caretkit_core::{HandleRole, SelectionControls, TextSelectionControls};
    use egui::RawInput;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity_corners() {
        let corners = transformed_corners(Affine::IDENTITY, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            corners,
            [
                Pos2::new(0.0, 0.0),
                Pos2::new(10.0, 0.0),
                Pos2::new(10.0, 10.0),
                Pos2::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_rotated_corners() {
        let quarter = Affine::rotate(90f64.to_radians());
        let corners = transformed_corners(quarter, Rect::new(0.0, 0.0, 10.0, 10.0));
        // y-down screen space: +90° maps +x onto +y
        assert!(close(corners[1], Pos2::new(0.0, 10.0)));
        assert!(close(corners[2], Pos2::new(-10.0, 10.0)));
    }

    #[test]
    fn test_circle_keeps_radius_under_rotation() {
        let transform = Affine::translate((100.0, 50.0)) * Affine::rotate(45f64.to_radians());
        let (center, radius) = transformed_circle(transform, Circle::new((10.0, 0.0), 10.0));
        assert!((radius - 10.0).abs() < 1e-4);
        let d = 10.0 / 2f32.sqrt();
        assert!(close(center, Pos2::new(100.0 + d, 50.0 + d)));
    }

    #[test]
    fn test_show_handle_paints_rotated_glyph() {
        let handle = SelectionControls::new().build_handle(HandleRole::Left, 16.0);
        let ctx = Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            show_handle(ctx, Id::new("left_handle"), Point::new(100.0, 100.0), &handle);
        });

        let circles: Vec<_> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Circle(circle) => Some(circle.clone()),
                _ => None,
            })
            .collect();
        let polygons: Vec<_> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Path(path) => Some(path.points.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(circles.len(), 1);
        // glyph center (10, 10) turned a quarter lands at (-10, 10)
        assert!(close(circles[0].center, Pos2::new(90.0, 110.0)));
        assert!((circles[0].radius - 10.0).abs() < 1e-4);
        assert_eq!(circles[0].fill, egui::Color32::from_rgb(255, 0, 0));

        assert_eq!(polygons.len(), 1);
        let expected = [
            Pos2::new(100.0, 100.0),
            Pos2::new(100.0, 110.0),
            Pos2::new(90.0, 110.0),
            Pos2::new(90.0, 100.0),
        ];
        assert_eq!(polygons[0].len(), 4);
        for (got, want) in polygons[0].iter().zip(expected) {
            assert!(close(*got, want));
        }
    }
}
