//! Symbol composition.
//!
//! A symbol is a named composite of primitive shape components (polygons,
//! polylines, circles) defined in a local coordinate frame whose origin is
//! the symbol's *pin*. Instantiating a symbol translates every component by
//! the application-space pin, converts the result to device coordinates, and
//! styles each component through the presentation's symbol-component style
//! table. The whole group then rotates as one about the device-space pin, so
//! a caller can place and orient a symbol from its semantic anchor alone,
//! without ever computing its bounding box.

use slate_core::{
    color::Color,
    draw::LineStyle,
    geometry::{Point, Size},
};

use crate::{
    config::{ComponentSpec, GeometrySpec},
    context::DrawingContext,
    element::SymbolElement,
    error::TabletError,
    presentation::Presentation,
};

/// Local-frame geometry of one symbol component, relative to the pin at the
/// local origin.
#[derive(Debug, Clone)]
pub enum ComponentGeometry {
    /// A closed polygon given by its vertices.
    Polygon(Vec<Point>),
    /// An open vertex chain.
    Polyline(Vec<Point>),
    /// A circle given by center and radius.
    Circle { center: Point, radius: f32 },
}

/// A named component of a symbol definition.
#[derive(Debug, Clone)]
pub struct SymbolComponent {
    name: String,
    geometry: ComponentGeometry,
}

impl SymbolComponent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &ComponentGeometry {
        &self.geometry
    }
}

/// A named composite shape: an ordered set of components sharing one pin.
#[derive(Debug, Clone)]
pub struct SymbolDefinition {
    components: Vec<SymbolComponent>,
}

impl SymbolDefinition {
    pub(crate) fn from_specs(specs: &[ComponentSpec]) -> Self {
        let components = specs
            .iter()
            .map(|spec| SymbolComponent {
                name: spec.name.clone(),
                geometry: match &spec.geometry {
                    GeometrySpec::Polygon { vertices } => {
                        ComponentGeometry::Polygon(vertices.iter().map(|&v| v.into()).collect())
                    }
                    GeometrySpec::Polyline { vertices } => {
                        ComponentGeometry::Polyline(vertices.iter().map(|&v| v.into()).collect())
                    }
                    GeometrySpec::Circle { center, radius } => ComponentGeometry::Circle {
                        center: (*center).into(),
                        radius: *radius,
                    },
                },
            })
            .collect();
        Self { components }
    }

    pub fn components(&self) -> &[SymbolComponent] {
        &self.components
    }
}

/// A styled, device-space primitive inside a composed symbol group.
#[derive(Debug, Clone)]
pub enum SymbolPrimitive {
    Polygon {
        vertices: Vec<Point>,
        style: LineStyle,
        fill: Option<Color>,
    },
    Polyline {
        vertices: Vec<Point>,
        style: LineStyle,
    },
    Circle {
        center: Point,
        radius: f32,
        style: LineStyle,
        fill: Option<Color>,
    },
}

/// Builds the device-space composite for the named symbol.
///
/// Returns the composed group element along with the symbol's bounding size,
/// accumulated from the maximum local-frame extents of all components. The
/// size is reported for callers that need it for layout; the rotation itself
/// pivots on the pin and never consults the bounding box.
pub(crate) fn compose(
    cx: &DrawingContext,
    presentation: &Presentation,
    name: &str,
    pin: Point,
    angle: f32,
) -> Result<(SymbolElement, Size), TabletError> {
    let definition = cx
        .db()
        .symbol(name)
        .ok_or_else(|| TabletError::UnknownSymbol(name.to_string()))?;

    let device_pin = cx.to_device(pin)?;
    let mut extent = Size::default();
    let mut primitives = Vec::with_capacity(definition.components().len());

    for component in definition.components() {
        let style = presentation.component_style(name, component.name())?;
        match component.geometry() {
            ComponentGeometry::Polygon(vertices) => {
                extent = extent.max(vertex_extent(vertices));
                primitives.push(SymbolPrimitive::Polygon {
                    vertices: to_device_vertices(cx, vertices, pin)?,
                    style: style.line().clone(),
                    fill: style.fill().cloned(),
                });
            }
            ComponentGeometry::Polyline(vertices) => {
                extent = extent.max(vertex_extent(vertices));
                primitives.push(SymbolPrimitive::Polyline {
                    vertices: to_device_vertices(cx, vertices, pin)?,
                    style: style.line().clone(),
                });
            }
            ComponentGeometry::Circle { center, radius } => {
                let diameter = radius * 2.0;
                extent = extent.max(Size::new(diameter, diameter));
                primitives.push(SymbolPrimitive::Circle {
                    center: cx.to_device(center.add_point(pin))?,
                    radius: *radius,
                    style: style.line().clone(),
                    fill: style.fill().cloned(),
                });
            }
        }
    }

    Ok((SymbolElement::new(primitives, device_pin, angle), extent))
}

fn to_device_vertices(
    cx: &DrawingContext,
    vertices: &[Point],
    pin: Point,
) -> Result<Vec<Point>, TabletError> {
    vertices
        .iter()
        .map(|v| cx.to_device(v.add_point(pin)))
        .collect()
}

fn vertex_extent(vertices: &[Point]) -> Size {
    let max_x = vertices.iter().map(|v| v.x()).fold(0.0_f32, f32::max);
    let max_y = vertices.iter().map(|v| v.y()).fold(0.0_f32, f32::max);
    Size::new(max_x, max_y)
}

/// Rotates a device-space point about a pivot by the given angle in degrees
/// clockwise (device y grows downward, so the positive direction matches the
/// SVG `rotate` transform).
pub(crate) fn rotate_about(p: Point, pivot: Point, degrees: f32) -> Point {
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let d = p.sub_point(pivot);
    Point::new(
        pivot.x() + d.x() * cos - d.y() * sin,
        pivot.y() + d.x() * sin + d.y() * cos,
    )
}
