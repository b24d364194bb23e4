//! Typed element records.
//!
//! Elements are the immutable, device-space records a layer accumulates:
//! coordinates already flipped, styles already resolved. Once appended they
//! are never mutated or removed; rendering is a single consuming read of the
//! layer's lists.

use std::path::PathBuf;

use slate_core::{
    color::Color,
    draw::{CornerSpec, LineStyle, TextStyle},
    geometry::{Point, Size},
};

use crate::symbol::{self, SymbolPrimitive};

/// A straight stroke between two device positions.
#[derive(Debug, Clone)]
pub struct LineSegmentElement {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}

/// A circle centered on a device position.
#[derive(Debug, Clone)]
pub struct CircleElement {
    pub center: Point,
    pub radius: f32,
    pub style: LineStyle,
    pub fill: Option<Color>,
}

/// An axis-aligned rectangle, positioned by its device upper-left corner,
/// with optional corner rounding.
#[derive(Debug, Clone)]
pub struct RectangleElement {
    pub upper_left: Point,
    pub size: Size,
    pub style: LineStyle,
    pub fill: Option<Color>,
    pub corners: Option<CornerSpec>,
}

/// A closed polygon over device vertices.
#[derive(Debug, Clone)]
pub struct PolygonElement {
    pub vertices: Vec<Point>,
    pub style: LineStyle,
    pub fill: Option<Color>,
}

/// A borderless filled rectangle, used as the opaque underlay behind text.
#[derive(Debug, Clone)]
pub struct FillRectElement {
    pub upper_left: Point,
    pub size: Size,
    pub color: Color,
}

/// A single line of text anchored at its device upper-left corner.
#[derive(Debug, Clone)]
pub struct TextLineElement {
    pub upper_left: Point,
    pub text: String,
    pub style: TextStyle,
}

/// A raster image placed by its device upper-left corner.
#[derive(Debug, Clone)]
pub struct ImageElement {
    pub resource_path: PathBuf,
    pub upper_left: Point,
    pub size: Size,
}

/// A composed symbol: styled device-space primitives sharing one rotation
/// about the device-space pin.
#[derive(Debug, Clone)]
pub struct SymbolElement {
    primitives: Vec<SymbolPrimitive>,
    pivot: Point,
    angle: f32,
}

impl SymbolElement {
    pub(crate) fn new(primitives: Vec<SymbolPrimitive>, pivot: Point, angle: f32) -> Self {
        Self {
            primitives,
            pivot,
            angle,
        }
    }

    /// The unrotated primitives of the group.
    pub fn primitives(&self) -> &[SymbolPrimitive] {
        &self.primitives
    }

    /// The device-space pin the group rotates about.
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Rotation in degrees clockwise; 0 leaves the symbol upright.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The primitives with the group rotation applied, for callers that need
    /// the final device geometry rather than the transform parameters.
    pub fn transformed_primitives(&self) -> Vec<SymbolPrimitive> {
        let rotate = |p: Point| symbol::rotate_about(p, self.pivot, self.angle);
        self.primitives
            .iter()
            .map(|primitive| match primitive {
                SymbolPrimitive::Polygon {
                    vertices,
                    style,
                    fill,
                } => SymbolPrimitive::Polygon {
                    vertices: vertices.iter().copied().map(rotate).collect(),
                    style: style.clone(),
                    fill: fill.clone(),
                },
                SymbolPrimitive::Polyline { vertices, style } => SymbolPrimitive::Polyline {
                    vertices: vertices.iter().copied().map(rotate).collect(),
                    style: style.clone(),
                },
                SymbolPrimitive::Circle {
                    center,
                    radius,
                    style,
                    fill,
                } => SymbolPrimitive::Circle {
                    center: rotate(*center),
                    radius: *radius,
                    style: style.clone(),
                    fill: fill.clone(),
                },
            })
            .collect()
    }
}

/// A diagnostic overlay primitive with explicit styling.
///
/// These bypass the presentation entirely and always render last. They are
/// development aids, not part of any client-facing drawing vocabulary.
#[derive(Debug, Clone)]
pub enum DiagnosticElement {
    /// A small crosshair centered on a device position.
    CrossHair { center: Point, color: Color },
    /// An unfilled rectangle outlining a device region.
    Frame { upper_left: Point, size: Size },
}

/// The closed union of element records, in no particular order; ordering is
/// the layer's concern.
#[derive(Debug, Clone)]
pub enum Element {
    Line(LineSegmentElement),
    Circle(CircleElement),
    Rectangle(RectangleElement),
    Polygon(PolygonElement),
    Underlay(FillRectElement),
    Text(TextLineElement),
    Image(ImageElement),
    Symbol(SymbolElement),
    Diagnostic(DiagnosticElement),
}

/// Category of an element, mirroring the fixed intra-layer draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Line,
    Circle,
    Rectangle,
    Polygon,
    Underlay,
    Text,
    Image,
    Symbol,
    Diagnostic,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Line(_) => ElementKind::Line,
            Self::Circle(_) => ElementKind::Circle,
            Self::Rectangle(_) => ElementKind::Rectangle,
            Self::Polygon(_) => ElementKind::Polygon,
            Self::Underlay(_) => ElementKind::Underlay,
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::Symbol(_) => ElementKind::Symbol,
            Self::Diagnostic(_) => ElementKind::Diagnostic,
        }
    }
}
