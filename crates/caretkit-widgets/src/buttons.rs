//! Button components: the pressable toolbar button.

use caretkit_core::ToolbarButton;
use egui::{Align2, CornerRadius, CursorIcon, FontId, Rect, Sense, Ui, Vec2, vec2};

use crate::convert::to_color32;
use crate::{sizing, theme};

/// Shows a `ToolbarButton` and fires its callback when clicked.
pub struct ActionButton<'a> {
    button: &'a ToolbarButton,
    height: Option<f32>,
    font_size: f32,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(button: &'a ToolbarButton) -> Self {
        Self {
            button,
            height: None,
            font_size: sizing::LABEL_FONT,
        }
    }

    /// Stretch the allocated slot to `height`; the background keeps its natural height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Label plus padding.
    pub fn natural_size(&self, ui: &Ui) -> Vec2 {
        natural_size(ui.painter(), self.button, self.font_size)
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let natural = self.natural_size(ui);
        let slot = vec2(natural.x, self.height.unwrap_or(natural.y).max(natural.y));
        let (rect, response) = ui.allocate_exact_size(slot, Sense::click());

        if ui.is_rect_visible(rect) {
            let background = Rect::from_center_size(rect.center(), natural);
            ui.painter().rect_filled(
                background,
                CornerRadius::same(sizing::CORNER_RADIUS),
                to_color32(self.button.background),
            );

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.button.label,
                FontId::proportional(self.font_size),
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        if clicked {
            log::debug!("toolbar button tapped: {:?}", self.button.action);
            self.button.tap();
        }
        clicked
    }
}

/// Size of a button's label plus its padding.
pub(crate) fn natural_size(painter: &egui::Painter, button: &ToolbarButton, font_size: f32) -> Vec2 {
    let galley = painter.layout_no_wrap(
        button.label.to_string(),
        FontId::proportional(font_size),
        theme::TEXT,
    );
    let padding = button.padding;
    galley.size()
        + vec2(
            (padding.x0 + padding.x1) as f32,
            (padding.y0 + padding.y1) as f32,
        )
}
