//! Selection handle glyph: a teardrop made of a circle and a square corner.

use kurbo::{Affine, Circle, Rect, Size};
use peniko::Color;

/// Which end of the selection a handle marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRole {
    /// Start of a ranged selection (points up-right).
    Left,
    /// End of a ranged selection (points up-left).
    Right,
    /// A caret with no selected text (points up).
    Collapsed,
}

/// Rotation in degrees, indexed by `HandleRole as usize`.
const ROTATION_DEGREES: [f64; 3] = [90.0, 0.0, 45.0];

impl HandleRole {
    /// Rotation applied to the glyph for this role, in degrees.
    pub fn rotation_degrees(self) -> f64 {
        ROTATION_DEGREES[self as usize]
    }

    /// Rotation about the handle box origin.
    pub fn rotation(self) -> Affine {
        Affine::rotate(self.rotation_degrees().to_radians())
    }
}

/// A surface the handle glyph can be painted onto.
///
/// Shapes arrive in glyph-local coordinates; the canvas applies the current
/// transform when it rasterizes them.
pub trait HandleCanvas {
    /// Replace the transform applied to subsequent shapes.
    fn set_transform(&mut self, transform: Affine);

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Fill an axis-aligned (in local space) rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A recorded shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphShape {
    Circle(Circle),
    Rect(Rect),
}

/// One fill operation captured by `PaintRecorder`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintOp {
    pub shape: GlyphShape,
    pub color: Color,
    pub transform: Affine,
}

/// A canvas that keeps a display list instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct PaintRecorder {
    transform: Affine,
    ops: Vec<PaintOp>,
}

impl PaintRecorder {
    /// Create an empty recorder with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, in paint order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Recorded shapes without their transforms.
    pub fn shapes(&self) -> Vec<GlyphShape> {
        self.ops.iter().map(|op| op.shape).collect()
    }

    /// Drop all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl HandleCanvas for PaintRecorder {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(PaintOp {
            shape: GlyphShape::Circle(circle),
            color,
            transform: self.transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp {
            shape: GlyphShape::Rect(rect),
            color,
            transform: self.transform,
        });
    }
}

/// Paints the handle glyph in a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePainter {
    pub color: Color,
}

impl HandlePainter {
    /// Create a painter for `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Paint the glyph into a box of `size`, origin at the top-left.
    ///
    /// The circle fills the box width; the square covers the top-left
    /// quadrant so the glyph narrows to a point there.
    pub fn paint(&self, canvas: &mut impl HandleCanvas, size: Size) {
        let radius = size.width / 2.0;
        canvas.fill_circle(Circle::new((radius, radius), radius), self.color);
        canvas.fill_rect(Rect::new(0.0, 0.0, radius, radius), self.color);
    }

    /// Repaint only when the color changed.
    pub fn should_repaint(&self, old: &HandlePainter) -> bool {
        self.color != old.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing;
    use crate::theme;

    #[test]
    fn test_glyph_shapes() {
        let mut canvas = PaintRecorder::new();
        HandlePainter::new(theme::HANDLE).paint(&mut canvas, sizing::glyph_size());

        assert_eq!(
            canvas.shapes(),
            vec![
                GlyphShape::Circle(Circle::new((10.0, 10.0), 10.0)),
                GlyphShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            ]
        );
        assert!(canvas.ops().iter().all(|op| op.color == theme::HANDLE));
        assert!(canvas.ops().iter().all(|op| op.transform == Affine::IDENTITY));
    }

    #[test]
    fn test_radius_follows_width() {
        let mut canvas = PaintRecorder::new();
        HandlePainter::new(theme::HANDLE).paint(&mut canvas, Size::new(22.0, 22.0));
        match canvas.shapes()[0] {
            GlyphShape::Circle(c) => assert!((c.radius - 11.0).abs() < f64::EPSILON),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_painting_is_deterministic() {
        let painter = HandlePainter::new(Color::from_rgba8(0, 120, 255, 255));
        let mut a = PaintRecorder::new();
        let mut b = PaintRecorder::new();
        painter.paint(&mut a, sizing::glyph_size());
        painter.paint(&mut b, sizing::glyph_size());
        assert_eq!(a.ops(), b.ops());
    }

    #[test]
    fn test_should_repaint_on_color_change() {
        let red = HandlePainter::new(theme::HANDLE);
        let also_red = HandlePainter::new(Color::from_rgba8(255, 0, 0, 255));
        let blue = HandlePainter::new(Color::from_rgba8(0, 0, 255, 255));
        assert!(!red.should_repaint(&also_red));
        assert!(red.should_repaint(&blue));
    }

    #[test]
    fn test_rotation_table() {
        assert!((HandleRole::Left.rotation_degrees() - 90.0).abs() < f64::EPSILON);
        assert!(HandleRole::Right.rotation_degrees().abs() < f64::EPSILON);
        assert!((HandleRole::Collapsed.rotation_degrees() - 45.0).abs() < f64::EPSILON);
        assert_eq!(HandleRole::Right.rotation(), Affine::rotate(0.0));
    }

    #[test]
    fn test_recorder_applies_transform() {
        let mut canvas = PaintRecorder::new();
        canvas.set_transform(HandleRole::Left.rotation());
        HandlePainter::new(theme::HANDLE).paint(&mut canvas, sizing::glyph_size());
        assert!(
            canvas
                .ops()
                .iter()
                .all(|op| op.transform == HandleRole::Left.rotation())
        );
        canvas.clear();
        assert!(canvas.ops().is_empty());
    }
}
