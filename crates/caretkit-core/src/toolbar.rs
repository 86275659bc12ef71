//! Toolbar description: a row of cut/copy/paste/select-all buttons.

use std::fmt;
use std::rc::Rc;

use kurbo::Insets;
use peniko::Color;

use crate::sizing::{BUTTON_PADDING, TOOLBAR_HEIGHT};
use crate::theme;

/// A zero-argument action fired on tap.
pub type Callback = Rc<dyn Fn()>;

/// An entry the toolbar can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl ToolbarAction {
    /// Display order, left to right.
    pub const ALL: [ToolbarAction; 4] = [
        ToolbarAction::Cut,
        ToolbarAction::Copy,
        ToolbarAction::Paste,
        ToolbarAction::SelectAll,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Cut => "Cut",
            ToolbarAction::Copy => "Copy",
            ToolbarAction::Paste => "Paste",
            ToolbarAction::SelectAll => "Select All",
        }
    }
}

/// The callbacks available for the current selection. `None` omits the button.
#[derive(Clone, Default)]
pub struct ToolbarActions {
    pub cut: Option<Callback>,
    pub copy: Option<Callback>,
    pub paste: Option<Callback>,
    pub select_all: Option<Callback>,
}

impl ToolbarActions {
    /// No actions at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the callback for `action`.
    pub fn with(mut self, action: ToolbarAction, callback: impl Fn() + 'static) -> Self {
        *self.slot_mut(action) = Some(Rc::new(callback));
        self
    }

    /// The callback bound to `action`, if any.
    pub fn get(&self, action: ToolbarAction) -> Option<&Callback> {
        match action {
            ToolbarAction::Cut => self.cut.as_ref(),
            ToolbarAction::Copy => self.copy.as_ref(),
            ToolbarAction::Paste => self.paste.as_ref(),
            ToolbarAction::SelectAll => self.select_all.as_ref(),
        }
    }

    fn slot_mut(&mut self, action: ToolbarAction) -> &mut Option<Callback> {
        match action {
            ToolbarAction::Cut => &mut self.cut,
            ToolbarAction::Copy => &mut self.copy,
            ToolbarAction::Paste => &mut self.paste,
            ToolbarAction::SelectAll => &mut self.select_all,
        }
    }
}

impl fmt::Debug for ToolbarActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarActions")
            .field("cut", &self.cut.is_some())
            .field("copy", &self.copy.is_some())
            .field("paste", &self.paste.is_some())
            .field("select_all", &self.select_all.is_some())
            .finish()
    }
}

/// A pressable label: padding, background and a tap handler.
#[derive(Clone)]
pub struct ToolbarButton {
    /// Which action this button fires.
    pub action: ToolbarAction,
    /// Text shown on the button.
    pub label: &'static str,
    /// Space around the label.
    pub padding: Insets,
    /// Fill behind the label.
    pub background: Color,
    on_pressed: Callback,
}

impl ToolbarButton {
    /// Create a button with the standard padding and a transparent background.
    pub fn new(action: ToolbarAction, on_pressed: Callback) -> Self {
        Self {
            action,
            label: action.label(),
            padding: Insets::uniform(BUTTON_PADDING),
            background: theme::BUTTON_BG,
            on_pressed,
        }
    }

    /// Set the label padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Fire the bound callback.
    pub fn tap(&self) {
        (self.on_pressed)();
    }
}

impl fmt::Debug for ToolbarButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarButton")
            .field("action", &self.action)
            .field("label", &self.label)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

/// The built toolbar row.
#[derive(Debug, Clone)]
pub struct ToolbarView {
    /// Buttons in display order.
    pub buttons: Vec<ToolbarButton>,
    /// Row height.
    pub height: f64,
    /// Row fill.
    pub color: Color,
}

impl ToolbarView {
    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether no action is offered.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Actions in display order.
    pub fn actions(&self) -> Vec<ToolbarAction> {
        self.buttons.iter().map(|b| b.action).collect()
    }

    /// The button for `action`, if offered.
    pub fn button(&self, action: ToolbarAction) -> Option<&ToolbarButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

/// Builds a `ToolbarView` from the available actions.
#[derive(Debug, Clone)]
pub struct Toolbar {
    actions: ToolbarActions,
    height: f64,
    color: Color,
    button_padding: Insets,
    button_background: Color,
}

impl Toolbar {
    /// Create a toolbar with the default look.
    pub fn new(actions: ToolbarActions) -> Self {
        Self {
            actions,
            height: TOOLBAR_HEIGHT,
            color: theme::TOOLBAR_BG,
            button_padding: Insets::uniform(BUTTON_PADDING),
            button_background: theme::BUTTON_BG,
        }
    }

    /// Set the row height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the row fill.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set padding and background for every button.
    pub fn button_style(mut self, padding: Insets, background: Color) -> Self {
        self.button_padding = padding;
        self.button_background = background;
        self
    }

    /// One button per present action, in `ToolbarAction::ALL` order.
    pub fn build(&self) -> ToolbarView {
        let buttons = ToolbarAction::ALL
            .iter()
            .filter_map(|&action| {
                self.actions.get(action).map(|callback| {
                    ToolbarButton::new(action, Rc::clone(callback))
                        .with_padding(self.button_padding)
                        .with_background(self.button_background)
                })
            })
            .collect();

        ToolbarView {
            buttons,
            height: self.height,
            color: self.color,
        }
    }
}
