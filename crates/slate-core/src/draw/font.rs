//! Font specification and text measurement.
//!
//! This module provides the resolved typographic types ([`FontSpec`],
//! [`TextStyle`]) and ink-extent measurement of a single line of text via
//! cosmic-text. Measurement is backed by a process-wide font system, shared
//! behind a lazily-initialized measurer because loading system fonts is
//! expensive.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;

use crate::{color::Color, geometry::Size};

// Rough point-to-pixel conversion at standard DPI, and the line height
// cosmic-text shapes with relative to the pixel size.
const POINTS_TO_PX: f32 = 1.33;
const LINE_HEIGHT_FACTOR: f32 = 1.15;

// Average glyph advance as a fraction of the pixel size, used when shaping
// yields no usable extents (no matching font installed).
const FALLBACK_ADVANCE: f32 = 0.55;

/// Slant of a typeface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Weight of a typeface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// A fully resolved font: family name, point size, slant and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    family: String,
    size: f32,
    slant: FontSlant,
    weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, slant: FontSlant, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            slant,
            weight,
        }
    }

    /// The font family name (e.g. "Palatino", "monospace").
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The nominal font size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn slant(&self) -> FontSlant {
        self.slant
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }
}

/// A resolved text style: font, ink color and line spacing multiplier.
///
/// The spacing multiplier scales the nominal font size into the baseline
/// advance used when stacking the lines of a text block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font: FontSpec,
    color: Color,
    spacing: f32,
}

impl TextStyle {
    pub fn new(font: FontSpec, color: Color, spacing: f32) -> Self {
        Self {
            font,
            color,
            spacing,
        }
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Line spacing multiplier, relative to the nominal font size.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}

/// Measures the ink bounding box of a single line of text under a font spec.
///
/// Newlines in `text` are not given special treatment; measure one line at a
/// time and combine the results for block layout.
pub fn measure_line(text: &str, font: &FontSpec) -> Size {
    MEASURER
        .get_or_init(TextMeasurer::new)
        .measure(text, font)
}

/// TextMeasurer handles text measurement and font operations.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
struct TextMeasurer {
    font_system: Mutex<FontSystem>,
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the actual ink size of text in pixels using cosmic-text.
    ///
    /// This measures from real font metrics and shaping, including ligatures
    /// and kerning. When no matching font can be found the size falls back to
    /// an estimate from the character count.
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = font.size() * POINTS_TO_PX;
        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(font.family()));
        if font.slant() == FontSlant::Italic {
            attrs = attrs.style(Style::Italic);
        }
        if font.weight() == FontWeight::Bold {
            attrs = attrs.weight(Weight::BOLD);
        }

        // Unconstrained buffer so the text flows as a single shaped run
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        // No runs or no glyphs: estimate so layout can still proceed
        if max_width <= 0.0 {
            max_width = text.chars().count() as f32 * font_size_px * FALLBACK_ADVANCE;
        }
        if total_height <= 0.0 {
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static MEASURER: OnceLock<TextMeasurer> = OnceLock::new();
