//! Integration tests for the public Tablet API
//!
//! These drive the whole pipeline: style sheet -> database -> tablet ->
//! layers -> scene -> SVG.

use std::rc::Rc;

use slate::element::{Element, ElementKind};
use slate::geometry::{HorizAlign, Point, Size};
use slate::{StyleDatabase, Tablet, TabletError};

const SHEET: &str = r#"
[colors.black]
r = 0
g = 0
b = 0

[colors.white]
r = 255
g = 255
b = 255

[dash_patterns.dashed]
solid = 4.0
blank = 2.0

[line_styles.normal]
width = 1.0
color = "black"

[line_styles.margin]
width = 0.5
color = "black"
pattern = "dashed"

[typefaces]
standard = "Helvetica"

[text_styles.body]
typeface = "standard"
size = 11.0
color = "black"
spacing = 1.3

[[symbols."initial pseudo state"]]
name = "stem"
kind = "polyline"
vertices = [[0.0, 0.0], [0.0, 20.0]]

[[symbols."initial pseudo state"]]
name = "dot"
kind = "circle"
center = [0.0, 26.0]
radius = 6.0

[drawing_types."state machine diagram".default.text."state name"]
text_style = "body"
underlay = true

[drawing_types."state machine diagram".default.shape."state compartment"]
line_style = "normal"
fill = "white"

[drawing_types."state machine diagram".default.shape."transition connector"]
line_style = "normal"

[drawing_types."sheet frame".default.shape."frame border"]
line_style = "margin"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".stem]
line_style = "normal"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".dot]
line_style = "normal"
fill = "black"
"#;

fn new_tablet() -> Tablet {
    let db = Rc::new(StyleDatabase::from_toml_str(SHEET).expect("sheet should build"));
    Tablet::new(
        db,
        Size::new(1584.0, 1224.0),
        "state machine diagram",
        "default",
        "diagram",
        "white",
    )
    .expect("tablet should build")
}

#[test]
fn test_full_width_line_lands_on_the_top_edge() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    tablet
        .layer_mut("diagram")
        .unwrap()
        .add_line_segment(
            &cx,
            "transition connector",
            Point::new(0.0, 1224.0),
            Point::new(1584.0, 1224.0),
        )
        .unwrap();

    let scene = tablet.render();
    match &scene.layers()[0].elements()[0] {
        Element::Line(line) => {
            assert_eq!((line.from.x(), line.from.y()), (0.0, 0.0));
            assert_eq!((line.to.x(), line.to.y()), (1584.0, 0.0));
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn test_layers_render_in_z_order_across_drawing_types() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    // A frame layer below the diagram layer, with its own drawing type
    tablet
        .add_layer("frame", "sheet frame", "default")
        .unwrap()
        .unwrap();
    tablet
        .layer_mut("frame")
        .unwrap()
        .add_line_segment(
            &cx,
            "frame border",
            Point::new(20.0, 20.0),
            Point::new(20.0, 1200.0),
        )
        .unwrap();
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

    let scene = tablet.render();
    let names: Vec<&str> = scene.layers().iter().map(|layer| layer.name()).collect();
    assert_eq!(names, vec!["frame", "diagram"]);
}

#[test]
fn test_duplicate_layer_returns_nothing_and_preserves_contents() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    tablet
        .layer_mut("diagram")
        .unwrap()
        .add_circle(&cx, "state compartment", Point::new(50.0, 50.0), 10.0)
        .unwrap();

    assert!(
        tablet
            .add_layer("diagram", "state machine diagram", "default")
            .unwrap()
            .is_none()
    );
    assert_eq!(tablet.layer("diagram").unwrap().element_count(), 1);
}

#[test]
fn test_underlaid_text_renders_behind_its_text() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    tablet
        .layer_mut("diagram")
        .unwrap()
        .add_text_block(
            &cx,
            "state name",
            Point::new(200.0, 400.0),
            &["Verifying", "entry/ check()"],
            HorizAlign::Center,
        )
        .unwrap();

    let scene = tablet.render();
    let kinds: Vec<ElementKind> = scene.layers()[0]
        .elements()
        .iter()
        .map(Element::kind)
        .collect();

    let last_underlay = kinds
        .iter()
        .rposition(|k| *k == ElementKind::Underlay)
        .expect("underlays should be present");
    let first_text = kinds
        .iter()
        .position(|k| *k == ElementKind::Text)
        .expect("text should be present");
    assert!(last_underlay < first_text);
}

#[test]
fn test_essential_content_out_of_bounds_is_reported() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    let result = tablet.layer_mut("diagram").unwrap().add_circle(
        &cx,
        "state compartment",
        Point::new(100.0, 1300.0),
        10.0,
    );
    assert!(matches!(result, Err(TabletError::BoundsExceeded { .. })));
}

#[test]
fn test_scene_exports_and_saves_svg() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    let layer = tablet.layer_mut("diagram").unwrap();
    layer
        .add_rectangle(
            &cx,
            "state compartment",
            Point::new(100.0, 100.0),
            Size::new(200.0, 50.0),
            None,
        )
        .unwrap();
    layer
        .add_symbol(&cx, "initial pseudo state", Point::new(300.0, 300.0), 270.0)
        .unwrap();

    let scene = tablet.render();
    let rendered = scene.to_document().to_string();
    assert!(rendered.contains("<svg"));
    assert!(rendered.contains("data-layer=\"diagram\""));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    scene.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("</svg>"));
}

#[test]
fn test_symbol_reports_its_bounding_size() {
    let mut tablet = new_tablet();
    let cx = tablet.context();

    let size = tablet
        .layer_mut("diagram")
        .unwrap()
        .add_symbol(&cx, "initial pseudo state", Point::new(300.0, 300.0), 0.0)
        .unwrap();

    assert_eq!((size.width(), size.height()), (12.0, 20.0));
}
