//! caretkit Core Library
//!
//! Platform-agnostic descriptions of text selection chrome: the handles
//! dragged at either end of a selection and the cut/copy/paste toolbar
//! floating above it. Hosts render the returned values; see
//! `caretkit-widgets` for the egui backend.

pub mod config;
pub mod constraints;
pub mod controls;
pub mod handle;
pub mod layout;
pub mod toolbar;

pub use config::{ConfigError, ConfigResult, SelectionStyle};
pub use constraints::BoxConstraints;
pub use controls::{
    HandleWidget, SelectionControls, TextSelectionControls, TextSelectionDelegate, ToolbarWidget,
};
pub use handle::{GlyphShape, HandleCanvas, HandlePainter, HandleRole, PaintOp, PaintRecorder};
pub use layout::{ToolbarLayout, place, place_with_padding};
pub use toolbar::{Callback, Toolbar, ToolbarAction, ToolbarActions, ToolbarButton, ToolbarView};

/// Fixed sizes shared by the handle and toolbar descriptions.
pub mod sizing {
    use kurbo::Size;

    /// Size reported to the host for hit testing and caret alignment.
    pub const HANDLE_SIZE: f64 = 22.0;
    /// Side of the square the handle glyph is painted into.
    pub const HANDLE_GLYPH_SIZE: f64 = 20.0;
    /// Right and bottom padding around the glyph, aligning its pivot with the caret.
    pub const HANDLE_PADDING: f64 = 26.0;
    /// Minimum distance between the toolbar and the screen edges.
    pub const TOOLBAR_SCREEN_PADDING: f64 = 8.0;
    /// Toolbar row height.
    pub const TOOLBAR_HEIGHT: f64 = 44.0;
    /// Padding on every side of a toolbar button label.
    pub const BUTTON_PADDING: f64 = 8.0;

    /// The handle size as a `Size`.
    pub const fn handle_size() -> Size {
        Size::new(HANDLE_SIZE, HANDLE_SIZE)
    }

    /// The glyph box as a `Size`.
    pub const fn glyph_size() -> Size {
        Size::new(HANDLE_GLYPH_SIZE, HANDLE_GLYPH_SIZE)
    }
}

/// Standard colors used by the default style.
pub mod theme {
    use peniko::Color;

    /// Handle glyph fill (red).
    pub const HANDLE: Color = Color::from_rgba8(255, 0, 0, 255);
    /// Toolbar row fill (light gray).
    pub const TOOLBAR_BG: Color = Color::from_rgba8(239, 239, 239, 255);
    /// Button background (transparent).
    pub const BUTTON_BG: Color = Color::from_rgba8(0, 0, 0, 0);
}
