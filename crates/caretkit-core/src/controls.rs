//! Selection controls: build the toolbar and handles for an editable text field.
//!
//! Hosts construct a `SelectionControls` value (usually once) and hand it to
//! their text editor. The editor calls `build_toolbar` and `build_handle`
//! during layout and renders the returned descriptions.

use std::rc::Rc;

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};

use crate::config::SelectionStyle;
use crate::constraints::BoxConstraints;
use crate::handle::{HandleCanvas, HandlePainter, HandleRole};
use crate::layout::ToolbarLayout;
use crate::sizing::{self, HANDLE_PADDING};
use crate::toolbar::{Callback, Toolbar, ToolbarAction, ToolbarActions, ToolbarView};

/// What the text editor can do with its current selection.
///
/// Implemented by the host editor. Mutations take `&self`; editors keep their
/// state behind interior mutability.
pub trait TextSelectionDelegate {
    fn can_cut(&self) -> bool;
    fn can_copy(&self) -> bool;
    fn can_paste(&self) -> bool;
    fn can_select_all(&self) -> bool;

    fn cut(&self);
    fn copy(&self);
    fn paste(&self);
    fn select_all(&self);
}

/// The interface a text editor programs against.
pub trait TextSelectionControls {
    /// Size of a selection handle.
    fn handle_size(&self) -> Size;

    /// Build the toolbar for the current selection.
    ///
    /// `position` is the anchor relative to `editable_region`'s top-left.
    fn build_toolbar(
        &self,
        screen_size: Size,
        editable_region: Rect,
        position: Vec2,
        delegate: Rc<dyn TextSelectionDelegate>,
    ) -> ToolbarWidget;

    /// Build the handle for one end of the selection.
    fn build_handle(&self, role: HandleRole, line_height: f64) -> HandleWidget;
}

/// The toolbar row positioned inside a box the size of the editable region.
#[derive(Debug, Clone)]
pub struct ToolbarWidget {
    /// Tight to the editable region's size.
    pub constraints: BoxConstraints,
    /// Places the row on screen.
    pub layout: ToolbarLayout,
    /// The row itself.
    pub toolbar: ToolbarView,
}

impl ToolbarWidget {
    /// Screen rect of the row once it reports `child_size`.
    pub fn layout(&self, child_size: Size) -> Rect {
        let child_constraints = self.layout.constraints_for_child(self.constraints);
        let size = child_constraints.constrain(child_size);
        let origin = self.layout.position_for_child(self.constraints.max, size);
        Rect::from_origin_size(origin, size)
    }

    /// Whether replacing `old` with `self` needs a fresh placement.
    pub fn should_relayout(&self, old: &ToolbarWidget) -> bool {
        self.layout.should_relayout(&old.layout)
    }
}

/// A painted handle glyph, padded and rotated for its role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleWidget {
    pub role: HandleRole,
    /// Padding around the glyph box.
    pub padding: Insets,
    /// Box the glyph is painted into.
    pub glyph_size: Size,
    pub painter: HandlePainter,
    pub rotation_degrees: f64,
}

impl HandleWidget {
    /// Rotation about the padded box's origin.
    pub fn transform(&self) -> Affine {
        Affine::rotate(self.rotation_degrees.to_radians())
    }

    /// Glyph plus padding, before rotation.
    pub fn outer_size(&self) -> Size {
        Size::new(
            self.glyph_size.width + self.padding.x0 + self.padding.x1,
            self.glyph_size.height + self.padding.y0 + self.padding.y1,
        )
    }

    /// Paint with the padded box's origin at `origin`.
    pub fn paint(&self, canvas: &mut impl HandleCanvas, origin: Point) {
        let transform = Affine::translate(origin.to_vec2())
            * self.transform()
            * Affine::translate((self.padding.x0, self.padding.y0));
        canvas.set_transform(transform);
        self.painter.paint(canvas, self.glyph_size);
    }
}

/// Material-style selection controls.
#[derive(Debug, Clone, Default)]
pub struct SelectionControls {
    style: SelectionStyle,
}

impl SelectionControls {
    /// Controls with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls with a custom style.
    pub fn with_style(style: SelectionStyle) -> Self {
        Self { style }
    }

    /// The active style.
    pub fn style(&self) -> &SelectionStyle {
        &self.style
    }
}

impl TextSelectionControls for SelectionControls {
    fn handle_size(&self) -> Size {
        sizing::handle_size()
    }

    fn build_toolbar(
        &self,
        screen_size: Size,
        editable_region: Rect,
        position: Vec2,
        delegate: Rc<dyn TextSelectionDelegate>,
    ) -> ToolbarWidget {
        let actions = ToolbarActions {
            cut: bind(&delegate, ToolbarAction::Cut),
            copy: bind(&delegate, ToolbarAction::Copy),
            paste: bind(&delegate, ToolbarAction::Paste),
            select_all: bind(&delegate, ToolbarAction::SelectAll),
        };
        log::debug!("building selection toolbar with {actions:?}");

        let toolbar = Toolbar::new(actions)
            .height(self.style.toolbar_height)
            .color(self.style.toolbar_color())
            .button_style(
                Insets::uniform(self.style.button_padding),
                self.style.button_background(),
            )
            .build();

        ToolbarWidget {
            constraints: BoxConstraints::tight(editable_region.size()),
            layout: ToolbarLayout::new(screen_size, editable_region, position)
                .with_padding(self.style.screen_padding),
            toolbar,
        }
    }

    fn build_handle(&self, role: HandleRole, _line_height: f64) -> HandleWidget {
        HandleWidget {
            role,
            padding: Insets::new(0.0, 0.0, HANDLE_PADDING, HANDLE_PADDING),
            glyph_size: sizing::glyph_size(),
            painter: HandlePainter::new(self.style.handle_color()),
            rotation_degrees: role.rotation_degrees(),
        }
    }
}

/// A callback for `action` if the delegate currently allows it.
fn bind(delegate: &Rc<dyn TextSelectionDelegate>, action: ToolbarAction) -> Option<Callback> {
    let allowed = match action {
        ToolbarAction::Cut => delegate.can_cut(),
        ToolbarAction::Copy => delegate.can_copy(),
        ToolbarAction::Paste => delegate.can_paste(),
        ToolbarAction::SelectAll => delegate.can_select_all(),
    };
    if !allowed {
        return None;
    }

    let delegate = Rc::clone(delegate);
    let callback: Callback = Rc::new(move || match action {
        ToolbarAction::Cut => delegate.cut(),
        ToolbarAction::Copy => delegate.copy(),
        ToolbarAction::Paste => delegate.paste(),
        ToolbarAction::SelectAll => delegate.select_all(),
    });
    Some(callback)
}
