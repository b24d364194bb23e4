use color::DynamicColor;
use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// This provides convenience methods for working with colors throughout the
/// Slate drawing surface. A color prints as a CSS color string, which is also
/// the form the SVG exporter embeds in stroke and fill attributes.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Create a `Color` from 8-bit RGB channel values.
    ///
    /// Style sheets specify their palette as integer channels, so this is the
    /// form the style database uses after validating the channel range.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(&format!("rgb({r}, {g}, {b})"))
            .unwrap_or_else(|err| unreachable!("rgb triple failed to parse: {err}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}
