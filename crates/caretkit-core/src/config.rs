//! Visual configuration for the selection controls.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sizing::{BUTTON_PADDING, TOOLBAR_HEIGHT, TOOLBAR_SCREEN_PADDING};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse style: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Colors and spacing of the toolbar and handles.
///
/// Colors are stored as RGBA8 so the style serializes as plain arrays.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionStyle {
    /// Handle glyph fill.
    pub handle_color: [u8; 4],
    /// Toolbar row fill.
    pub toolbar_color: [u8; 4],
    /// Fill behind each button label.
    pub button_background: [u8; 4],
    /// Padding on every side of a button label.
    pub button_padding: f64,
    /// Minimum distance from the toolbar to the screen edges.
    pub screen_padding: f64,
    /// Toolbar row height.
    pub toolbar_height: f64,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            handle_color: [255, 0, 0, 255],
            toolbar_color: [239, 239, 239, 255],
            button_background: [0, 0, 0, 0],
            button_padding: BUTTON_PADDING,
            screen_padding: TOOLBAR_SCREEN_PADDING,
            toolbar_height: TOOLBAR_HEIGHT,
        }
    }
}

impl SelectionStyle {
    /// Parse and validate a style from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative or non-finite lengths.
    pub fn validate(&self) -> ConfigResult<()> {
        let lengths = [
            ("button_padding", self.button_padding),
            ("screen_padding", self.screen_padding),
            ("toolbar_height", self.toolbar_height),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }

    pub fn handle_color(&self) -> Color {
        rgba(self.handle_color)
    }

    pub fn toolbar_color(&self) -> Color {
        rgba(self.toolbar_color)
    }

    pub fn button_background(&self) -> Color {
        rgba(self.button_background)
    }
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_default_matches_theme() {
        let style = SelectionStyle::default();
        assert_eq!(style.handle_color(), theme::HANDLE);
        assert_eq!(style.toolbar_color(), theme::TOOLBAR_BG);
        assert_eq!(style.button_background(), theme::BUTTON_BG);
        assert!((style.screen_padding - 8.0).abs() < f64::EPSILON);
        assert!((style.toolbar_height - 44.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let style = SelectionStyle::from_json(r#"{ "handle_color": [0, 128, 255, 255] }"#).unwrap();
        assert_eq!(style.handle_color, [0, 128, 255, 255]);
        assert_eq!(style.toolbar_color, SelectionStyle::default().toolbar_color);
        assert!((style.button_padding - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let style = SelectionStyle {
            toolbar_height: 40.0,
            ..SelectionStyle::default()
        };
        let json = style.to_json().unwrap();
        assert_eq!(SelectionStyle::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_rejects_negative_padding() {
        let err = SelectionStyle::from_json(r#"{ "screen_padding": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "screen_padding",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SelectionStyle::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse style"));
    }
}
