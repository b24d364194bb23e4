//! Example: drawing a small state machine diagram
//!
//! Builds a style database from an inline sheet, draws two states, a
//! transition with a label, and the initial pseudo state symbol, then saves
//! the result as `state_diagram.svg`.

use std::rc::Rc;

use slate::geometry::{HorizAlign, Point, Size};
use slate::{StyleDatabase, Tablet, TextBlockCorner};

const SHEET: &str = r#"
[colors.black]
r = 0
g = 0
b = 0

[colors.white]
r = 255
g = 255
b = 255

[colors."blue steel"]
r = 58
g = 71
b = 84

[line_styles.normal]
width = 1.0
color = "black"

[line_styles.heavy]
width = 2.0
color = "black"

[typefaces]
standard = "Helvetica"

[text_styles.body]
typeface = "standard"
size = 11.0
color = "black"
spacing = 1.3

[text_styles.title]
typeface = "standard"
size = 14.0
weight = "bold"
color = "black"
spacing = 1.2

[[symbols."initial pseudo state"]]
name = "stem"
kind = "polyline"
vertices = [[0.0, 0.0], [0.0, 18.0]]

[[symbols."initial pseudo state"]]
name = "dot"
kind = "circle"
center = [0.0, 24.0]
radius = 6.0

[drawing_types."state machine diagram".default.text."state name"]
text_style = "body"
underlay = true

[drawing_types."state machine diagram".default.text."diagram title"]
text_style = "title"

[drawing_types."state machine diagram".default.shape."state compartment"]
line_style = "normal"
fill = "white"
corner_spec = { radius = 6.0, top = true, bottom = true }

[drawing_types."state machine diagram".default.shape."transition connector"]
line_style = "heavy"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".stem]
line_style = "heavy"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".dot]
line_style = "normal"
fill = "black"

[stickers."state machine diagram"."diagram title"]
draft = "DRAFT - not for review"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let db = Rc::new(StyleDatabase::from_toml_str(SHEET)?);
    let mut tablet = Tablet::new(
        db,
        Size::new(595.0, 842.0), // A4 portrait in points
        "state machine diagram",
        "default",
        "diagram",
        "white",
    )?;

    let cx = tablet.context();
    let layer = tablet.layer_mut("diagram").expect("initial layer exists");

    // Two state compartments
    layer.add_rectangle(
        &cx,
        "state compartment",
        Point::new(100.0, 600.0),
        Size::new(140.0, 40.0),
        None,
    )?;
    layer.add_text_line(&cx, "state name", Point::new(120.0, 612.0), "Pending")?;

    layer.add_rectangle(
        &cx,
        "state compartment",
        Point::new(100.0, 440.0),
        Size::new(140.0, 40.0),
        None,
    )?;
    layer.add_text_line(&cx, "state name", Point::new(120.0, 452.0), "Verifying")?;

    // Transition between them, label centered beside the connector
    layer.add_line_segment(
        &cx,
        "transition connector",
        Point::new(170.0, 600.0),
        Point::new(170.0, 480.0),
    )?;
    layer.add_text_block(
        &cx,
        "state name",
        Point::new(185.0, 530.0),
        &["submit", "[complete]"],
        HorizAlign::Left,
    )?;

    // Initial pseudo state pointing down at the first state
    layer.add_symbol(&cx, "initial pseudo state", Point::new(170.0, 650.0), 180.0)?;

    // Title block pinned by its upper left corner
    tablet
        .layer_mut("diagram")
        .expect("initial layer exists")
        .add_sticker(
            &cx,
            "diagram title",
            "draft",
            Point::new(40.0, 820.0),
            TextBlockCorner::UpperLeft,
        )?;

    let scene = tablet.render();
    scene.save("state_diagram.svg")?;
    println!("wrote state_diagram.svg");

    Ok(())
}
