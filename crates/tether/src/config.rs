//! Configuration types for Tether layouts.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining text metrics and style settings.
//! - [`TextMetrics`] - Monospace glyph metrics used to size text elements.
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use tether::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.text().line_height(), 9);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use tether_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text measurement section.
    #[serde(default)]
    text: TextMetrics,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given sections.
    pub fn new(text: TextMetrics, style: StyleConfig) -> Self {
        Self { text, style }
    }

    /// Returns the text metrics.
    pub fn text(&self) -> TextMetrics {
        self.text
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Monospace glyph metrics in unscaled pixels.
///
/// Text elements are `char_width` wide per character and `line_height` tall,
/// before their scale is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextMetrics {
    char_width: i32,
    line_height: i32,
}

impl TextMetrics {
    pub fn new(char_width: i32, line_height: i32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    pub fn char_width(&self) -> i32 {
        self.char_width
    }

    pub fn line_height(&self) -> i32 {
        self.line_height
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(6, 9)
    }
}

/// Visual styling configuration for rendered surfaces.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the surface, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
