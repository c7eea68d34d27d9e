use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::scroll::ScrollBehavior;
use crate::types::{Color, Direction, Length};

/// Configuration for a [`crate::Tab`] widget.
///
/// JSON keys are camelCase. Missing keys take their default, so a partial
/// object is merged over [`TabOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TabOptions {
    pub direction: Direction,
    /// Slider thickness for a vertical bar.
    pub width: Length,
    /// Slider thickness for a horizontal bar.
    pub height: Length,
    /// Slider color, also used as the active tab's text color.
    pub background_color: Color,
    pub hide_slider: bool,
    /// Keep the active tab visible inside a `.tab__scroll` container.
    pub auto_scroll: bool,
    pub scroll_behavior: ScrollBehavior,
}

impl Default for TabOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            width: Length::px(2.0),
            height: Length::px(2.0),
            background_color: Color::rgb(0x18, 0x90, 0xff),
            hide_slider: false,
            auto_scroll: false,
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}

impl TabOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn hide_slider(mut self, hide: bool) -> Self {
        self.hide_slider = hide;
        self
    }

    pub fn auto_scroll(mut self, enabled: bool) -> Self {
        self.auto_scroll = enabled;
        self
    }

    pub fn scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }
}
