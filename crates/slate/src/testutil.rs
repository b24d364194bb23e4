//! Shared fixtures for unit tests: a small but complete style sheet and
//! helpers that stand up a database, presentation, layer or tablet on it.

use std::rc::Rc;

use slate_core::geometry::Size;

use crate::{
    context::DrawingContext,
    layer::Layer,
    presentation::{Presentation, PresentationKey},
    styledb::StyleDatabase,
    tablet::Tablet,
};

pub(crate) const DRAWING_TYPE: &str = "state machine diagram";
pub(crate) const PRESENTATION: &str = "default";

const SHEET: &str = r#"
[colors.black]
r = 0
g = 0
b = 0

[colors.white]
r = 255
g = 255
b = 255

[colors.gold]
r = 218
g = 165
b = 32

[dash_patterns.dashed]
solid = 5.0
blank = 3.0

[line_styles.normal]
width = 1.0
color = "black"

[line_styles.heavy]
width = 2.0
color = "black"

[line_styles.dashed]
width = 1.0
color = "black"
pattern = "dashed"

[typefaces]
standard = "Helvetica"
fixed = "Courier New"

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

[color_usages]
attention = "gold"

[[symbols."initial pseudo state"]]
name = "stem"
kind = "polyline"
vertices = [[0.0, 0.0], [0.0, 20.0]]

[[symbols."initial pseudo state"]]
name = "dot"
kind = "circle"
center = [0.0, 26.0]
radius = 6.0

[[symbols."solid arrow"]]
name = "head"
kind = "polygon"
vertices = [[-6.0, 0.0], [6.0, 0.0], [0.0, 12.0]]

[[symbols."unstyled box"]]
name = "body"
kind = "polygon"
vertices = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]

[drawing_types."state machine diagram".default.text."state name"]
text_style = "body"
underlay = true

[drawing_types."state machine diagram".default.text."transition label"]
text_style = "body"

[drawing_types."state machine diagram".default.text."diagram title"]
text_style = "title"

[drawing_types."state machine diagram".default.shape."state compartment"]
line_style = "normal"
fill = "white"
corner_spec = { radius = 4.0, top = true, bottom = false }

[drawing_types."state machine diagram".default.shape."transition connector"]
line_style = "normal"

[drawing_types."state machine diagram".default.shape."guide line"]
line_style = "dashed"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".stem]
line_style = "normal"

[drawing_types."state machine diagram".default.symbols."initial pseudo state".dot]
line_style = "normal"
fill = "black"

[drawing_types."state machine diagram".default.symbols."solid arrow".head]
line_style = "normal"
fill = "black"

[stickers."state machine diagram"."state name"]
unnamed = "(unnamed)"
"#;

pub(crate) fn db() -> Rc<StyleDatabase> {
    Rc::new(StyleDatabase::from_toml_str(SHEET).expect("test sheet should build"))
}

pub(crate) fn tablet() -> Tablet {
    Tablet::new(
        db(),
        Size::new(1584.0, 1224.0),
        DRAWING_TYPE,
        PRESENTATION,
        "diagram",
        "white",
    )
    .expect("test tablet should build")
}

pub(crate) fn presentation() -> Presentation {
    Presentation::resolve(&db(), PresentationKey::new(DRAWING_TYPE, PRESENTATION))
        .expect("test presentation should resolve")
}

pub(crate) fn context_and_presentation() -> (DrawingContext, Presentation) {
    let tablet = tablet();
    (tablet.context(), presentation())
}

pub(crate) fn context_and_layer() -> (DrawingContext, Layer) {
    let tablet = tablet();
    let cx = tablet.context();
    let layer = Layer::new("diagram", Rc::new(presentation()));
    (cx, layer)
}
