//! egui rendering for caretkit selection controls.
//!
//! - **Buttons**: the pressable toolbar button
//! - **Toolbar**: measuring, placing and showing the toolbar row
//! - **Handle**: painting the rotated handle glyph
//! - **Convert**: kurbo/peniko to egui conversions

pub mod buttons;
pub mod convert;
pub mod handle;
pub mod toolbar;

pub use buttons::ActionButton;
pub use convert::{to_color32, to_pos2, to_size, to_vec2};
pub use handle::{EguiCanvas, paint_handle, show_handle};
pub use toolbar::{ToolbarResponse, measure_row, show_toolbar, toolbar_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Button label font size.
    pub const LABEL_FONT: f32 = 14.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
}
