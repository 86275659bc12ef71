//! The floating selection toolbar.

use caretkit_core::{ToolbarAction, ToolbarView, ToolbarWidget};
use egui::{Context, Frame, Id, LayerId, Margin, Order, Painter, Vec2, vec2};

use crate::buttons::{ActionButton, natural_size};
use crate::convert::{to_color32, to_pos2, to_size};
use crate::sizing;

/// Where the toolbar ended up and what was tapped this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarResponse {
    /// Placed rect in screen coordinates.
    pub rect: kurbo::Rect,
    /// The action whose button was clicked, if any.
    pub tapped: Option<ToolbarAction>,
}

/// Frame behind the button row: solid fill, no margin.
pub fn toolbar_frame(view: &ToolbarView) -> Frame {
    Frame::new()
        .fill(to_color32(view.color))
        .inner_margin(Margin::ZERO)
}

/// Size of the button row: the sum of button widths at the row height.
pub fn measure_row(painter: &Painter, view: &ToolbarView) -> Vec2 {
    let width: f32 = view
        .buttons
        .iter()
        .map(|button| natural_size(painter, button, sizing::LABEL_FONT).x)
        .sum();
    vec2(width, view.height as f32)
}

/// Show the toolbar as a foreground area placed by its layout.
///
/// Tapped buttons fire their callbacks before this returns.
pub fn show_toolbar(ctx: &Context, id: Id, widget: &ToolbarWidget) -> ToolbarResponse {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, id));
    let row = measure_row(&painter, &widget.toolbar);
    let rect = widget.layout(to_size(row));
    let size = vec2(rect.width() as f32, rect.height() as f32);

    let mut tapped = None;
    egui::Area::new(id)
        .order(Order::Foreground)
        .fixed_pos(to_pos2(rect.origin()))
        .constrain(false)
        .show(ctx, |ui| {
            toolbar_frame(&widget.toolbar).show(ui, |ui| {
                ui.set_min_size(size);
                ui.set_max_size(size);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for button in &widget.toolbar.buttons {
                        if ActionButton::new(button).height(size.y).show(ui) {
                            tapped = Some(button.action);
                        }
                    }
                });
            });
        });

    ToolbarResponse { rect, tapped }
}
