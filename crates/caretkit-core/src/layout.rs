//! Toolbar placement: anchor the toolbar above the selection and keep it on screen.

use kurbo::{Point, Rect, Size, Vec2};

use crate::constraints::BoxConstraints;
use crate::sizing::TOOLBAR_SCREEN_PADDING;

/// Layout delegate that positions the toolbar child inside the editable region's box.
///
/// The toolbar is centered horizontally on the anchor with its bottom edge on
/// the anchor, then clamped so it stays `padding` away from the screen edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarLayout {
    /// Size of the whole screen.
    pub screen_size: Size,
    /// The editable text region, in screen coordinates.
    pub editable_region: Rect,
    /// Anchor offset relative to the editable region's top-left.
    pub position: Vec2,
    /// Minimum distance from the screen edges.
    pub padding: f64,
}

impl ToolbarLayout {
    /// Create a layout with the standard screen padding.
    pub fn new(screen_size: Size, editable_region: Rect, position: Vec2) -> Self {
        Self {
            screen_size,
            editable_region,
            position,
            padding: TOOLBAR_SCREEN_PADDING,
        }
    }

    /// Set the screen-edge padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// The child may take any size up to the parent's maximum.
    pub fn constraints_for_child(&self, constraints: BoxConstraints) -> BoxConstraints {
        constraints.loosen()
    }

    /// Top-left of the child, in screen coordinates.
    ///
    /// `_size` is the parent's size; placement only depends on the screen.
    pub fn position_for_child(&self, _size: Size, child_size: Size) -> Point {
        place_with_padding(
            self.screen_size,
            self.editable_region,
            self.position,
            child_size,
            self.padding,
        )
    }

    /// Only a moved anchor invalidates the previous placement.
    pub fn should_relayout(&self, old: &ToolbarLayout) -> bool {
        self.position != old.position
    }
}

/// Place a toolbar of `child_size` using the standard screen padding.
pub fn place(screen_size: Size, editable_region: Rect, anchor: Vec2, child_size: Size) -> Point {
    place_with_padding(
        screen_size,
        editable_region,
        anchor,
        child_size,
        TOOLBAR_SCREEN_PADDING,
    )
}

/// Place a toolbar of `child_size` keeping `padding` from the screen edges.
pub fn place_with_padding(
    screen_size: Size,
    editable_region: Rect,
    anchor: Vec2,
    child_size: Size,
    padding: f64,
) -> Point {
    let global = editable_region.origin() + anchor;

    let unclamped = Point::new(
        global.x - child_size.width / 2.0,
        global.y - child_size.height,
    );
    let placed = Point::new(
        clamp_axis(unclamped.x, child_size.width, screen_size.width, padding),
        clamp_axis(unclamped.y, child_size.height, screen_size.height, padding),
    );

    if placed != unclamped {
        log::trace!(
            "toolbar clamped from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            unclamped.x,
            unclamped.y,
            placed.x,
            placed.y
        );
    }
    placed
}

/// The near edge wins: a box failing the low check is never moved by the high check.
fn clamp_axis(low: f64, extent: f64, available: f64, padding: f64) -> f64 {
    if low < padding {
        padding
    } else if low + extent > available - padding {
        available - extent - padding
    } else {
        low
    }
}
