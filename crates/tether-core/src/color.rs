//! CSS colors for element fills.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use thiserror::Error;

/// Returned when a string is not a CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct InvalidColor {
    input: String,
    reason: String,
}

impl InvalidColor {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A fill color, parsed from any CSS color syntax.
///
/// Equality and hashing go through the CSS serialization, so two colors are
/// equal when they print the same.
///
/// # Examples
///
/// ```
/// use tether_core::color::Color;
///
/// let amber: Color = "#ffbf00".parse().unwrap();
/// assert_eq!(amber.alpha(), 1.0);
/// assert!(!amber.with_alpha(0.5).is_opaque());
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(DynamicColor);

impl Color {
    /// Parses a CSS color string such as `#ff0000`, `rgb(255, 0, 0)` or `red`.
    pub fn new(css: &str) -> Result<Self, InvalidColor> {
        css.parse()
    }

    /// Returns this color with its alpha replaced by `alpha` (`0.0..=1.0`).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self(self.0.with_alpha(alpha))
    }

    pub fn alpha(&self) -> f32 {
        self.0.components[3]
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha() >= 1.0
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(css: &str) -> Result<Self, Self::Err> {
        DynamicColor::from_str(css)
            .map(Self)
            .map_err(|err| InvalidColor {
                input: css.to_string(),
                reason: err.to_string(),
            })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("white").expect("white is a CSS named color")
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        color.to_string().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "sparkly".parse::<Color>().unwrap_err();
        assert_eq!(err.input(), "sparkly");
        assert!(err.to_string().starts_with("invalid color `sparkly`"));
    }

    #[test]
    fn test_default_is_opaque_white() {
        let white = Color::default();
        assert_eq!(white.to_string(), "white");
        assert!(white.is_opaque());
    }

    #[test]
    fn test_with_alpha() {
        let faded = Color::new("red").unwrap().with_alpha(0.25);
        assert!((faded.alpha() - 0.25).abs() < 0.001);
        assert!(!faded.is_opaque());
    }

    #[test]
    fn test_equal_colors_share_hash() {
        use std::collections::HashSet;

        let set: HashSet<Color> = ["#30c030", "#30c030", "blue"]
            .into_iter()
            .map(|css| css.parse().unwrap())
            .collect();
        assert_eq!(set.len(), 2);
    }
}
