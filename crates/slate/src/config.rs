//! Raw style sheet configuration.
//!
//! A [`StyleSheet`] is the deserialized form of the style configuration an
//! application ships: its color palette, line and text styles, dash
//! patterns, typeface registry, symbol geometry, the drawing-type ×
//! presentation table, and sticker texts. All cross-references between the
//! tables are plain strings here; nothing is validated until the sheet is
//! handed to [`StyleDatabase::new`](crate::styledb::StyleDatabase::new),
//! which resolves every reference or rejects the sheet with a
//! [`ConfigError`](crate::error::ConfigError).
//!
//! # Example
//!
//! ```
//! # use slate::config::StyleSheet;
//! let sheet = StyleSheet::from_toml_str(r#"
//!     [colors.black]
//!     r = 0
//!     g = 0
//!     b = 0
//!
//!     [line_styles.normal]
//!     width = 1.0
//!     color = "black"
//! "#).unwrap();
//! assert!(sheet.colors.contains_key("black"));
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use slate_core::draw::{CornerSpec, DashPattern, FontSlant, FontWeight};

use crate::error::ConfigError;

/// The full set of raw style tables consumed by the style database.
///
/// Every table defaults to empty so a sheet only needs the sections it uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSheet {
    /// Color palette: name to 8-bit RGB channels.
    #[serde(default)]
    pub colors: HashMap<String, RgbSpec>,

    /// Named dash patterns referenced by line styles.
    #[serde(default)]
    pub dash_patterns: HashMap<String, DashPattern>,

    /// Named line styles.
    #[serde(default)]
    pub line_styles: HashMap<String, LineStyleSpec>,

    /// Typeface registry: logical name to concrete font family.
    #[serde(default)]
    pub typefaces: HashMap<String, String>,

    /// Named text styles.
    #[serde(default)]
    pub text_styles: HashMap<String, TextStyleSpec>,

    /// Color usage aliases: a usage name to a palette color name.
    #[serde(default)]
    pub color_usages: HashMap<String, String>,

    /// Symbol definitions: symbol name to its ordered components.
    #[serde(default)]
    pub symbols: HashMap<String, Vec<ComponentSpec>>,

    /// Drawing type to presentation name to asset styling.
    #[serde(default)]
    pub drawing_types: HashMap<String, HashMap<String, PresentationSpec>>,

    /// Sticker texts: drawing type to asset to sticker name to text.
    #[serde(default)]
    pub stickers: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl StyleSheet {
    /// Parses a style sheet from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// 8-bit RGB channels, kept wide so out-of-range values can be reported
/// rather than silently wrapped.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RgbSpec {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

/// A line style referencing a palette color and an optional dash pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct LineStyleSpec {
    /// Dash pattern name; absent means a solid stroke.
    #[serde(default)]
    pub pattern: Option<String>,
    pub width: f32,
    pub color: String,
}

/// A text style referencing a typeface and a palette color.
#[derive(Debug, Clone, Deserialize)]
pub struct TextStyleSpec {
    pub typeface: String,
    pub size: f32,
    #[serde(default)]
    pub slant: FontSlant,
    #[serde(default)]
    pub weight: FontWeight,
    pub color: String,
    /// Line spacing multiplier for text blocks.
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_spacing() -> f32 {
    1.0
}

/// One component of a symbol definition: a name plus local-frame geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    #[serde(flatten)]
    pub geometry: GeometrySpec,
}

/// Local-frame geometry of a symbol component, relative to the symbol pin
/// at the local origin.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeometrySpec {
    Polygon { vertices: Vec<[f32; 2]> },
    Polyline { vertices: Vec<[f32; 2]> },
    Circle { center: [f32; 2], radius: f32 },
}

/// Asset styling for one presentation of one drawing type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresentationSpec {
    /// Text assets: asset name to text styling.
    #[serde(default)]
    pub text: HashMap<String, TextAssetSpec>,

    /// Shape assets: asset name to border/fill styling.
    #[serde(default)]
    pub shape: HashMap<String, ShapeAssetSpec>,

    /// Symbol component styles: symbol name to component name to styling.
    #[serde(default)]
    pub symbols: HashMap<String, HashMap<String, ComponentStyleSpec>>,
}

/// Styling of a text asset.
#[derive(Debug, Clone, Deserialize)]
pub struct TextAssetSpec {
    pub text_style: String,
    /// Whether lines drawn with this asset get an opaque background underlay.
    #[serde(default)]
    pub underlay: bool,
}

/// Styling of a shape asset.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeAssetSpec {
    pub line_style: String,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub corner_spec: Option<CornerSpec>,
}

/// Styling of one symbol component.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStyleSpec {
    pub line_style: String,
    #[serde(default)]
    pub fill: Option<String>,
}
