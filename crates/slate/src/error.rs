//! Error types for Slate operations.
//!
//! Failures fall into two tiers. [`ConfigError`] covers broken style sheet
//! data: dangling style references, malformed palette entries, missing
//! presentations. These are fatal; a tablet cannot be built on top of an
//! inconsistent style database. [`TabletError`] covers everything that can go
//! wrong while populating a tablet, at the granularity of a single element,
//! so a caller can drop one bad element and keep drawing.

use std::fmt;

use thiserror::Error;

/// A fatal style configuration error, raised while building the style
/// database or resolving a presentation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse style sheet: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bad channel value [{value}] in color [{color}]")]
    BadColorChannel { color: String, value: i64 },

    #[error("undefined color [{color}] referenced by {referrer}")]
    UndefinedColor { color: String, referrer: String },

    #[error("undefined dash pattern [{pattern}] in line style [{line_style}]")]
    UndefinedDashPattern { pattern: String, line_style: String },

    #[error("undefined typeface [{typeface}] in text style [{text_style}]")]
    UndefinedTypeface { typeface: String, text_style: String },

    #[error("undefined line style [{line_style}] referenced by {referrer}")]
    UndefinedLineStyle { line_style: String, referrer: String },

    #[error("undefined text style [{text_style}] referenced by {referrer}")]
    UndefinedTextStyle { text_style: String, referrer: String },

    #[error("undefined symbol component [{symbol}.{component}] referenced by {referrer}")]
    UndefinedSymbolComponent {
        symbol: String,
        component: String,
        referrer: String,
    },

    #[error("no presentation [{presentation}] defined for drawing type [{drawing_type}]")]
    UnknownPresentation {
        drawing_type: String,
        presentation: String,
    },
}

/// Which style table an asset failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Shape,
    Text,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "shape"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A recoverable drawing error, scoped to the single element being added.
#[derive(Debug, Error)]
pub enum TabletError {
    #[error("initial layer [{0}] is not one of the system layers")]
    NonSystemInitialLayer(String),

    #[error("position y [{y}] exceeds the page height [{page_height}]")]
    BoundsExceeded { y: f32, page_height: f32 },

    #[error("no {kind} style for asset [{asset}] in presentation [{presentation}]")]
    UnresolvedAsset {
        kind: StyleKind,
        asset: String,
        presentation: String,
    },

    #[error("no sticker [{name}] defined for asset [{asset}]")]
    UnknownSticker { asset: String, name: String },

    #[error("no symbol named [{0}]")]
    UnknownSymbol(String),

    #[error("no component style for [{component}] of symbol [{symbol}] in presentation [{presentation}]")]
    UnstyledSymbolComponent {
        symbol: String,
        component: String,
        presentation: String,
    },

    #[error("no color defined for usage [{0}]")]
    UnknownColorUsage(String),

    #[error("invalid color [{0}]")]
    BadColor(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
