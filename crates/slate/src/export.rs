//! SVG export.
//!
//! Turns a composed [`Scene`] into an `svg::Document`: a page-sized canvas,
//! a background rectangle, and one `<g data-layer="…">` per rendered layer
//! with that layer's elements emitted in their final draw order. Element
//! ordering decisions all happen upstream; this module is a straight
//! translation from device-space records to SVG nodes.

use svg::Document;
use svg::node::element::{
    self as svg_element,
    path::Data,
};

use slate_core::apply_stroke;
use slate_core::draw::{FontSlant, FontWeight};
use slate_core::geometry::{Point, Size};

use crate::element::{
    CircleElement, DiagnosticElement, Element, FillRectElement, ImageElement, LineSegmentElement,
    PolygonElement, RectangleElement, SymbolElement, TextLineElement,
};
use crate::layer::Layer;
use crate::scene::Scene;
use crate::symbol::SymbolPrimitive;

type SvgNode = Box<dyn svg::Node>;

pub(crate) fn document(scene: &Scene) -> Document {
    let width = scene.page_size().width();
    let height = scene.page_size().height();

    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", scene.background());

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width)
        .set("height", height)
        .add(background);

    for layer in scene.layers() {
        let mut group = svg_element::Group::new().set("data-layer", layer.name());
        for element in layer.elements() {
            group = group.add(element_node(element));
        }
        doc = doc.add(group);
    }

    doc
}

fn element_node(element: &Element) -> SvgNode {
    match element {
        Element::Line(line) => line_node(line),
        Element::Circle(circle) => circle_node(circle),
        Element::Rectangle(rect) => rectangle_node(rect),
        Element::Polygon(polygon) => polygon_node(polygon),
        Element::Underlay(rect) => fill_rect_node(rect),
        Element::Text(text) => text_node(text),
        Element::Image(image) => image_node(image),
        Element::Symbol(symbol) => symbol_node(symbol),
        Element::Diagnostic(diagnostic) => diagnostic_node(diagnostic),
    }
}

fn line_node(line: &LineSegmentElement) -> SvgNode {
    let node = svg_element::Line::new()
        .set("x1", line.from.x())
        .set("y1", line.from.y())
        .set("x2", line.to.x())
        .set("y2", line.to.y());
    Box::new(apply_stroke!(node, &line.style))
}

fn circle_node(circle: &CircleElement) -> SvgNode {
    let node = svg_element::Circle::new()
        .set("cx", circle.center.x())
        .set("cy", circle.center.y())
        .set("r", circle.radius)
        .set("fill", fill_value(circle.fill.as_ref()));
    Box::new(apply_stroke!(node, &circle.style))
}

fn rectangle_node(rect: &RectangleElement) -> SvgNode {
    let fill = fill_value(rect.fill.as_ref());
    let (top_r, bottom_r) = rect
        .corners
        .map(|corners| (corners.top_radius(), corners.bottom_radius()))
        .unwrap_or((0.0, 0.0));

    // A rectangle rounded at only one end needs a multi-arc path; rounding
    // at both ends (or neither) maps onto the rect primitive directly.
    if top_r != bottom_r {
        let data = half_rounded_rect(rect.upper_left, rect.size, top_r, bottom_r);
        let node = svg_element::Path::new().set("d", data).set("fill", fill);
        return Box::new(apply_stroke!(node, &rect.style));
    }

    let mut node = svg_element::Rectangle::new()
        .set("x", rect.upper_left.x())
        .set("y", rect.upper_left.y())
        .set("width", rect.size.width())
        .set("height", rect.size.height())
        .set("fill", fill);
    if top_r > 0.0 {
        node = node.set("rx", top_r);
    }
    Box::new(apply_stroke!(node, &rect.style))
}

/// Path data for a rectangle rounded on exactly one end, traversed
/// clockwise from the upper left.
fn half_rounded_rect(ul: Point, size: Size, top_r: f32, bottom_r: f32) -> Data {
    let (x, y) = (ul.x(), ul.y());
    let (w, h) = (size.width(), size.height());

    if top_r > 0.0 {
        Data::new()
            .move_to((x, y + top_r))
            .elliptical_arc_to((top_r, top_r, 0.0, 0.0, 1.0, x + top_r, y))
            .line_to((x + w - top_r, y))
            .elliptical_arc_to((top_r, top_r, 0.0, 0.0, 1.0, x + w, y + top_r))
            .line_to((x + w, y + h))
            .line_to((x, y + h))
            .close()
    } else {
        Data::new()
            .move_to((x, y))
            .line_to((x + w, y))
            .line_to((x + w, y + h - bottom_r))
            .elliptical_arc_to((bottom_r, bottom_r, 0.0, 0.0, 1.0, x + w - bottom_r, y + h))
            .line_to((x + bottom_r, y + h))
            .elliptical_arc_to((bottom_r, bottom_r, 0.0, 0.0, 1.0, x, y + h - bottom_r))
            .close()
    }
}

fn polygon_node(polygon: &PolygonElement) -> SvgNode {
    let node = svg_element::Polygon::new()
        .set("points", points_value(&polygon.vertices))
        .set("fill", fill_value(polygon.fill.as_ref()));
    Box::new(apply_stroke!(node, &polygon.style))
}

fn fill_rect_node(rect: &FillRectElement) -> SvgNode {
    Box::new(
        svg_element::Rectangle::new()
            .set("x", rect.upper_left.x())
            .set("y", rect.upper_left.y())
            .set("width", rect.size.width())
            .set("height", rect.size.height())
            .set("fill", &rect.color)
            .set("stroke", "none"),
    )
}

fn text_node(text: &TextLineElement) -> SvgNode {
    let font = text.style.font();
    let mut node = svg_element::Text::new(text.text.as_str())
        .set("x", text.upper_left.x())
        .set("y", text.upper_left.y())
        .set("dominant-baseline", "hanging")
        .set("font-family", font.family())
        .set("font-size", font.size())
        .set("fill", text.style.color());

    if font.slant() == FontSlant::Italic {
        node = node.set("font-style", "italic");
    }
    if font.weight() == FontWeight::Bold {
        node = node.set("font-weight", "bold");
    }
    Box::new(node)
}

fn image_node(image: &ImageElement) -> SvgNode {
    Box::new(
        svg_element::Image::new()
            .set("href", image.resource_path.display().to_string())
            .set("x", image.upper_left.x())
            .set("y", image.upper_left.y())
            .set("width", image.size.width())
            .set("height", image.size.height()),
    )
}

fn symbol_node(symbol: &SymbolElement) -> SvgNode {
    let mut group = svg_element::Group::new();
    if symbol.angle() != 0.0 {
        group = group.set(
            "transform",
            format!(
                "rotate({}, {}, {})",
                symbol.angle(),
                symbol.pivot().x(),
                symbol.pivot().y()
            ),
        );
    }

    for primitive in symbol.primitives() {
        let node: SvgNode = match primitive {
            SymbolPrimitive::Polygon {
                vertices,
                style,
                fill,
            } => {
                let polygon = svg_element::Polygon::new()
                    .set("points", points_value(vertices))
                    .set("fill", fill_value(fill.as_ref()));
                Box::new(apply_stroke!(polygon, style))
            }
            SymbolPrimitive::Polyline { vertices, style } => {
                let polyline = svg_element::Polyline::new()
                    .set("points", points_value(vertices))
                    .set("fill", "none");
                Box::new(apply_stroke!(polyline, style))
            }
            SymbolPrimitive::Circle {
                center,
                radius,
                style,
                fill,
            } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius)
                    .set("fill", fill_value(fill.as_ref()));
                Box::new(apply_stroke!(circle, style))
            }
        };
        group = group.add(node);
    }
    Box::new(group)
}

fn diagnostic_node(diagnostic: &DiagnosticElement) -> SvgNode {
    match diagnostic {
        DiagnosticElement::CrossHair { center, color } => {
            let r = Layer::cross_hair_radius();
            let horizontal = svg_element::Line::new()
                .set("x1", center.x() - r)
                .set("y1", center.y())
                .set("x2", center.x() + r)
                .set("y2", center.y())
                .set("stroke", color)
                .set("stroke-width", 1);
            let vertical = svg_element::Line::new()
                .set("x1", center.x())
                .set("y1", center.y() - r)
                .set("x2", center.x())
                .set("y2", center.y() + r)
                .set("stroke", color)
                .set("stroke-width", 1);
            Box::new(svg_element::Group::new().add(horizontal).add(vertical))
        }
        DiagnosticElement::Frame { upper_left, size } => Box::new(
            svg_element::Rectangle::new()
                .set("x", upper_left.x())
                .set("y", upper_left.y())
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 1),
        ),
    }
}

fn fill_value(fill: Option<&slate_core::color::Color>) -> svg::node::Value {
    match fill {
        Some(color) => color.into(),
        None => svg::node::Value::from("none"),
    }
}

fn points_value(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|v| format!("{},{}", v.x(), v.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use slate_core::geometry::{Point, Size};

    use crate::testutil;

    #[test]
    fn test_document_has_page_extent_and_background() {
        let tablet = testutil::tablet();
        let rendered = tablet.render().to_document().to_string();
        assert!(rendered.contains("viewBox=\"0 0 1584 1224\""));
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("</svg>"));
    }

    #[test]
    fn test_layers_become_named_groups() {
        let mut tablet = testutil::tablet();
        let cx = tablet.context();
        tablet
            .layer_mut("diagram")
            .unwrap()
            .add_line_segment(
                &cx,
                "transition connector",
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
            )
            .unwrap();

        let rendered = tablet.render().to_document().to_string();
        assert!(rendered.contains("data-layer=\"diagram\""));
        assert!(rendered.contains("<line"));
    }

    #[test]
    fn test_rotated_symbol_gets_a_pivot_transform() {
        let mut tablet = testutil::tablet();
        let cx = tablet.context();
        tablet
            .layer_mut("diagram")
            .unwrap()
            .add_symbol(&cx, "initial pseudo state", Point::new(300.0, 300.0), 90.0)
            .unwrap();

        let rendered = tablet.render().to_document().to_string();
        assert!(rendered.contains("rotate(90, 300, 924)"));
    }

    #[test]
    fn test_upright_symbol_has_no_transform() {
        let mut tablet = testutil::tablet();
        let cx = tablet.context();
        tablet
            .layer_mut("diagram")
            .unwrap()
            .add_symbol(&cx, "initial pseudo state", Point::new(300.0, 300.0), 0.0)
            .unwrap();

        let rendered = tablet.render().to_document().to_string();
        assert!(!rendered.contains("rotate("));
    }

    #[test]
    fn test_one_ended_corner_rounding_emits_a_path() {
        let mut tablet = testutil::tablet();
        let cx = tablet.context();
        tablet
            .layer_mut("diagram")
            .unwrap()
            .add_rectangle(
                &cx,
                "state compartment",
                Point::new(100.0, 100.0),
                Size::new(200.0, 50.0),
                None,
            )
            .unwrap();

        let rendered = tablet.render().to_document().to_string();
        // the fixture's compartment rounds only its top corners
        assert!(rendered.contains("<path"));
        assert!(rendered.contains("A4,4"));
    }

    #[test]
    fn test_dashed_stroke_emits_dasharray() {
        let mut tablet = testutil::tablet();
        let cx = tablet.context();
        tablet
            .layer_mut("diagram")
            .unwrap()
            .add_line_segment(
                &cx,
                "guide line",
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
            )
            .unwrap();

        let rendered = tablet.render().to_document().to_string();
        assert!(rendered.contains("stroke-dasharray=\"5,3\""));
    }
}
