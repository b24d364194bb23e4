//! Stroke and line-style definitions.
//!
//! A [`LineStyle`] bundles everything needed to stroke a line or shape
//! border: color, width and an optional [`DashPattern`]. A [`CornerSpec`]
//! describes how a rectangle's corners are rounded.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"#000000"`, `"rgb(30, 30, 30)"` |
//! | `width` | `stroke-width` | `2.0` |
//! | `dashes` | `stroke-dasharray` | `"5,3"` |
//!
//! Use the [`apply_stroke!`](crate::apply_stroke!) macro to apply all stroke
//! attributes of a [`LineStyle`] to an SVG element at once.

use serde::Deserialize;

use crate::color::Color;

/// A repeating dash pattern: the length of the drawn run and the gap after it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DashPattern {
    solid: f32,
    blank: f32,
}

impl DashPattern {
    pub fn new(solid: f32, blank: f32) -> Self {
        Self { solid, blank }
    }

    /// Length of the drawn run, in points.
    pub fn solid(self) -> f32 {
        self.solid
    }

    /// Length of the gap following the drawn run, in points.
    pub fn blank(self) -> f32 {
        self.blank
    }

    /// Returns the SVG stroke-dasharray value for this pattern.
    pub fn to_svg_value(self) -> String {
        format!("{},{}", self.solid, self.blank)
    }
}

/// A resolved stroke for rendering lines and shape borders.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    color: Color,
    width: f32,
    dashes: Option<DashPattern>,
}

impl LineStyle {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dashes: None,
        }
    }

    /// Returns this stroke with the given dash pattern applied.
    pub fn with_dashes(mut self, dashes: DashPattern) -> Self {
        self.dashes = Some(dashes);
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the dash pattern, or `None` for a solid stroke.
    pub fn dashes(&self) -> Option<DashPattern> {
        self.dashes
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            dashes: None,
        }
    }
}

/// Corner rounding for a rectangle.
///
/// The radius applies to the top corners, the bottom corners, or both. A
/// rectangle rounded on only one end cannot be emitted as a single rounded
/// rectangle primitive and is rendered as a multi-arc path instead.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CornerSpec {
    radius: f32,
    top: bool,
    bottom: bool,
}

impl CornerSpec {
    pub fn new(radius: f32, top: bool, bottom: bool) -> Self {
        Self {
            radius,
            top,
            bottom,
        }
    }

    /// Corner radius in points. Zero yields square corners.
    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Radius applied to the top corners, or zero when the top is square.
    pub fn top_radius(self) -> f32 {
        if self.top { self.radius } else { 0.0 }
    }

    /// Radius applied to the bottom corners, or zero when the bottom is square.
    pub fn bottom_radius(self) -> f32 {
        if self.bottom { self.radius } else { 0.0 }
    }
}

/// Apply all stroke attributes of a [`LineStyle`] to an SVG element.
///
/// This applies the stroke color, width and dash pattern (when not solid) to
/// any SVG element.
///
/// # Examples
///
/// ```
/// use slate_core::color::Color;
/// use slate_core::draw::LineStyle;
/// use svg::node::element as svg_element;
///
/// let style = LineStyle::new(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = slate_core::apply_stroke!(line, &style);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $style:expr) => {{
        let mut elem = $element
            .set("stroke", $style.color())
            .set("stroke-width", $style.width());

        if let Some(dashes) = $style.dashes() {
            elem = elem.set("stroke-dasharray", dashes.to_svg_value());
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_line_style_default() {
        let style = LineStyle::default();
        assert_approx_eq!(f32, style.width(), 1.0);
        assert_eq!(style.color().to_string(), "black");
        assert!(style.dashes().is_none());
    }

    #[test]
    fn test_line_style_with_dashes() {
        let style = LineStyle::new(Color::new("blue").unwrap(), 2.0)
            .with_dashes(DashPattern::new(5.0, 3.0));

        assert_approx_eq!(f32, style.width(), 2.0);
        let dashes = style.dashes().unwrap();
        assert_approx_eq!(f32, dashes.solid(), 5.0);
        assert_approx_eq!(f32, dashes.blank(), 3.0);
    }

    #[test]
    fn test_dash_pattern_svg_value() {
        assert_eq!(DashPattern::new(5.0, 3.0).to_svg_value(), "5,3");
        assert_eq!(DashPattern::new(1.5, 2.0).to_svg_value(), "1.5,2");
    }

    #[test]
    fn test_corner_spec_radii() {
        let both = CornerSpec::new(4.0, true, true);
        assert_approx_eq!(f32, both.top_radius(), 4.0);
        assert_approx_eq!(f32, both.bottom_radius(), 4.0);

        let top_only = CornerSpec::new(4.0, true, false);
        assert_approx_eq!(f32, top_only.top_radius(), 4.0);
        assert_approx_eq!(f32, top_only.bottom_radius(), 0.0);

        let square = CornerSpec::new(0.0, true, true);
        assert_approx_eq!(f32, square.top_radius(), 0.0);
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_dashed() {
        let solid = LineStyle::new(Color::new("black").unwrap(), 1.0);
        let elem = svg::node::element::Line::new();
        let elem = apply_stroke!(elem, &solid);
        assert!(!elem.to_string().contains("stroke-dasharray"));

        let dashed = solid.clone().with_dashes(DashPattern::new(4.0, 2.0));
        let elem = svg::node::element::Line::new();
        let elem = apply_stroke!(elem, &dashed);
        assert!(elem.to_string().contains("stroke-dasharray=\"4,2\""));
    }
}
