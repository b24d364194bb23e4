//! A layer of content drawn on a tablet.
//!
//! Layers stack along a z axis toward the viewer; the tablet renders them
//! from the lowest upward, so content on higher layers may overlap content
//! underneath. Within one layer the element categories render in a fixed
//! sub-order as well; see [`Layer::into_elements`].
//!
//! A layer is bound to one [`Presentation`] at creation. Every `add_*` call
//! resolves the named asset's styles through that presentation, converts the
//! supplied application coordinates to device coordinates, and appends an
//! immutable record to the matching typed list. Failures are scoped to the
//! single element being added; a bad element never spoils the layer.

use std::{path::Path, rc::Rc};

use log::{info, warn};

use slate_core::geometry::{HorizAlign, Point, Size};

use crate::{
    context::DrawingContext,
    element::{
        CircleElement, DiagnosticElement, Element, FillRectElement, ImageElement,
        LineSegmentElement, PolygonElement, RectangleElement, SymbolElement, TextLineElement,
    },
    error::TabletError,
    presentation::Presentation,
    symbol,
    text::{self, TextBlockCorner},
};

// Device distance from a text item's anchor to the lower left corner of its
// ink box. Determined experimentally against the rendering backend.
const TEXT_BOX_X_OFFSET: f32 = 4.0;
const TEXT_BOX_Y_OFFSET: f32 = 4.0;

// Horizontal and vertical distances from text to the outer edge of its
// underlay, and the underlay's offset from the text origin.
const UNDERLAY_MARGIN_H: f32 = 5.0;
const UNDERLAY_MARGIN_V: f32 = 5.0;
const UNDERLAY_OFFSET_X: f32 = 2.0;
const UNDERLAY_OFFSET_Y: f32 = 3.0;

const CROSS_HAIR_RADIUS: f32 = 3.0;

/// A named, presentation-bound bucket of elements on a tablet.
#[derive(Debug)]
pub struct Layer {
    name: String,
    presentation: Rc<Presentation>,
    line_segments: Vec<LineSegmentElement>,
    circles: Vec<CircleElement>,
    rectangles: Vec<RectangleElement>,
    polygons: Vec<PolygonElement>,
    underlay_rects: Vec<FillRectElement>,
    text_lines: Vec<TextLineElement>,
    images: Vec<ImageElement>,
    symbols: Vec<SymbolElement>,
    diagnostics: Vec<DiagnosticElement>,
}

impl Layer {
    pub(crate) fn new(name: impl Into<String>, presentation: Rc<Presentation>) -> Self {
        let name = name.into();
        info!(layer = name.as_str(); "creating layer");
        Self {
            name,
            presentation,
            line_segments: Vec::new(),
            circles: Vec::new(),
            rectangles: Vec::new(),
            polygons: Vec::new(),
            underlay_rects: Vec::new(),
            text_lines: Vec::new(),
            images: Vec::new(),
            symbols: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The presentation styling everything drawn on this layer.
    pub fn presentation(&self) -> &Rc<Presentation> {
        &self.presentation
    }

    /// Total number of elements recorded so far, across all categories.
    pub fn element_count(&self) -> usize {
        self.line_segments.len()
            + self.circles.len()
            + self.rectangles.len()
            + self.polygons.len()
            + self.underlay_rects.len()
            + self.text_lines.len()
            + self.images.len()
            + self.symbols.len()
            + self.diagnostics.len()
    }

    /// Adds a straight stroke between two application positions, styled by
    /// the asset's line style.
    pub fn add_line_segment(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        from: Point,
        to: Point,
    ) -> Result<(), TabletError> {
        let style = self.presentation.shape_style(asset)?.clone();
        self.line_segments.push(LineSegmentElement {
            from: cx.to_device(from)?,
            to: cx.to_device(to)?,
            style,
        });
        Ok(())
    }

    /// Adds a circle centered on an application position.
    pub fn add_circle(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        center: Point,
        radius: f32,
    ) -> Result<(), TabletError> {
        let style = self.presentation.shape_style(asset)?.clone();
        let fill = self.presentation.fill(asset).cloned();
        self.circles.push(CircleElement {
            center: cx.to_device(center)?,
            radius,
            style,
            fill,
        });
        Ok(())
    }

    /// Adds a closed polygon over application-space vertices.
    pub fn add_polygon(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        vertices: &[Point],
    ) -> Result<(), TabletError> {
        let style = self.presentation.shape_style(asset)?.clone();
        let fill = self.presentation.fill(asset).cloned();
        let device_vertices = vertices
            .iter()
            .map(|&v| cx.to_device(v))
            .collect::<Result<Vec<_>, _>>()?;
        self.polygons.push(PolygonElement {
            vertices: device_vertices,
            style,
            fill,
        });
        Ok(())
    }

    /// Adds a contiguous open vertex chain as individual line segments.
    ///
    /// There is no open-polygon element category; patterns like open arrow
    /// heads are just runs of segments.
    ///
    /// # Panics
    ///
    /// Asserts that at least two vertices are supplied.
    pub fn add_open_polygon(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        vertices: &[Point],
    ) -> Result<(), TabletError> {
        assert!(vertices.len() > 1, "open polygon has less than two vertices");
        for pair in vertices.windows(2) {
            self.add_line_segment(cx, asset, pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Adds a rectangle by its application-space lower left corner.
    ///
    /// A fill declared for the asset is applied unless `color_usage` names a
    /// color-usage alias, which overrides it. The asset's corner spec, if
    /// any, rounds the top and/or bottom corners.
    pub fn add_rectangle(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        lower_left: Point,
        size: Size,
        color_usage: Option<&str>,
    ) -> Result<(), TabletError> {
        let style = self.presentation.shape_style(asset)?.clone();

        let mut fill = self.presentation.fill(asset).cloned();
        if let Some(usage) = color_usage {
            let color = cx
                .db()
                .usage_color(usage)
                .ok_or_else(|| TabletError::UnknownColorUsage(usage.to_string()))?;
            fill = Some(color.clone());
        }

        let ll_dc = cx.to_device(lower_left)?;
        self.rectangles.push(RectangleElement {
            upper_left: Point::new(ll_dc.x(), ll_dc.y() - size.height()),
            size,
            style,
            fill,
            corners: self.presentation.corner_spec(asset),
        });
        Ok(())
    }

    /// Adds a single line of text pinned at its application-space lower left
    /// corner.
    ///
    /// When the asset is flagged for an underlay, a background-colored
    /// rectangle slightly larger than the ink box is appended first so the
    /// text always renders on a quiet patch of page.
    pub fn add_text_line(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        lower_left: Point,
        text: &str,
    ) -> Result<(), TabletError> {
        let ll_dc = cx.to_device(lower_left)?;
        let ink = text::line_size(&self.presentation, asset, text)?;

        // The backend positions text from the upper left of its box
        let upper_left = Point::new(
            ll_dc.x() - TEXT_BOX_X_OFFSET,
            ll_dc.y() - ink.height() - TEXT_BOX_Y_OFFSET,
        );

        if self.presentation.needs_underlay(asset) {
            let underlay_size = Size::new(
                ink.width() + UNDERLAY_MARGIN_H,
                ink.height() + UNDERLAY_MARGIN_V,
            );
            let underlay_pos = Point::new(
                lower_left.x() - UNDERLAY_OFFSET_X,
                lower_left.y() - UNDERLAY_OFFSET_Y,
            );
            self.add_underlay(cx, underlay_pos, underlay_size)?;
        }

        let style = self.presentation.text_style(asset)?.clone();
        self.text_lines.push(TextLineElement {
            upper_left,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    /// Adds a rectangle matching the tablet background color, drawn
    /// underneath a text line so the page around the text reads clean even
    /// over other content.
    fn add_underlay(
        &mut self,
        cx: &DrawingContext,
        lower_left: Point,
        size: Size,
    ) -> Result<(), TabletError> {
        let ll_dc = cx.to_device(lower_left)?;
        self.underlay_rects.push(FillRectElement {
            upper_left: Point::new(ll_dc.x(), ll_dc.y() - size.height()),
            size,
            color: cx.background().clone(),
        });
        Ok(())
    }

    /// Adds all lines of a text block, positioning lines bottom-up from the
    /// block's application-space lower left corner.
    ///
    /// Right and center alignment indent each line against the block width,
    /// taken from the longest line by character count.
    pub fn add_text_block(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        lower_left: Point,
        lines: &[impl AsRef<str>],
        align: HorizAlign,
    ) -> Result<(), TabletError> {
        let presentation = Rc::clone(&self.presentation);
        let spacing = {
            let style = presentation.text_style(asset)?;
            style.font().size() * style.spacing()
        };

        let block_width = if align == HorizAlign::Left {
            None
        } else {
            let longest = lines
                .iter()
                .map(|line| line.as_ref())
                .max_by_key(|line: &&str| line.chars().count())
                .unwrap_or("");
            Some(text::line_size(&presentation, asset, longest)?.width())
        };

        let mut y = lower_left.y();
        // Position lines from the bottom up
        for line in lines.iter().rev() {
            let line = line.as_ref();
            let x_indent = match align {
                HorizAlign::Left => 0.0,
                HorizAlign::Right => {
                    let width = text::line_size(&presentation, asset, line)?.width();
                    block_width.unwrap_or(width) - width
                }
                HorizAlign::Center => {
                    let width = text::line_size(&presentation, asset, line)?.width();
                    (block_width.unwrap_or(width) - width) / 2.0
                }
            };
            self.add_text_line(cx, asset, Point::new(lower_left.x() + x_indent, y), line)?;
            y += spacing;
        }
        Ok(())
    }

    /// Adds a text block pinned by any of its four corners, sparing the
    /// caller the block-size computation.
    pub fn pin_text_block(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        lines: &[impl AsRef<str>],
        pin: Point,
        corner: TextBlockCorner,
        align: HorizAlign,
    ) -> Result<(), TabletError> {
        let lower_left = text::lower_left_pin(&self.presentation, asset, lines, pin, corner)?;
        self.add_text_block(cx, asset, lower_left, lines, align)
    }

    /// Places a predefined sticker: a single line of text looked up by name
    /// in the sticker table for this layer's drawing type, pinned by the
    /// requested corner.
    pub fn add_sticker(
        &mut self,
        cx: &DrawingContext,
        asset: &str,
        name: &str,
        pin: Point,
        corner: TextBlockCorner,
    ) -> Result<(), TabletError> {
        let drawing_type = self.presentation.key().drawing_type();
        let sticker = cx
            .db()
            .sticker(drawing_type, asset, name)
            .ok_or_else(|| TabletError::UnknownSticker {
                asset: asset.to_string(),
                name: name.to_string(),
            })?
            .to_string();

        let lines = [sticker.as_str()];
        let lower_left = text::lower_left_pin(&self.presentation, asset, &lines, pin, corner)?;
        self.add_text_line(cx, asset, lower_left, &sticker)
    }

    /// Adds a raster image by its application-space lower left corner.
    ///
    /// An image whose corner falls outside the page is decorative collateral
    /// rather than essential content, so it is logged and skipped instead of
    /// failing the call.
    pub fn add_image(
        &mut self,
        cx: &DrawingContext,
        resource_path: &Path,
        lower_left: Point,
        size: Size,
    ) -> Result<(), TabletError> {
        let ll_dc = match cx.to_device(lower_left) {
            Ok(position) => position,
            Err(TabletError::BoundsExceeded { .. }) => {
                warn!(
                    "Lower left corner of image [{}] is outside the tablet draw region",
                    resource_path.display()
                );
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        self.images.push(ImageElement {
            resource_path: resource_path.to_path_buf(),
            upper_left: Point::new(ll_dc.x(), ll_dc.y() - size.height()),
            size,
        });
        Ok(())
    }

    /// Instantiates a named symbol pinned at an application position and
    /// rotated about that pin.
    ///
    /// Angle is in degrees clockwise with 0, 90, 180 and 270 at 12, 3, 6 and
    /// 9 o'clock. Returns the symbol's bounding size for callers that need
    /// it for surrounding layout.
    pub fn add_symbol(
        &mut self,
        cx: &DrawingContext,
        name: &str,
        pin: Point,
        angle: f32,
    ) -> Result<Size, TabletError> {
        let (element, size) = symbol::compose(cx, &self.presentation, name, pin, angle)?;
        self.symbols.push(element);
        Ok(size)
    }

    /// Places a diagnostic crosshair at an application position, with an
    /// explicit CSS color instead of a presentation asset.
    pub fn add_cross_hair(
        &mut self,
        cx: &DrawingContext,
        location: Point,
        color: &str,
    ) -> Result<(), TabletError> {
        let color = slate_core::color::Color::new(color)
            .map_err(|_| TabletError::BadColor(color.to_string()))?;
        self.diagnostics.push(DiagnosticElement::CrossHair {
            center: cx.to_device(location)?,
            color,
        });
        Ok(())
    }

    /// Outlines a device region for diagnostic purposes; the dimensions are
    /// taken as given, without consulting any style.
    pub fn add_raw_frame(
        &mut self,
        cx: &DrawingContext,
        upper_left: Point,
        size: Size,
    ) -> Result<(), TabletError> {
        self.diagnostics.push(DiagnosticElement::Frame {
            upper_left: cx.to_device(upper_left)?,
            size,
        });
        Ok(())
    }

    /// The crosshair arm length, exposed for render and tests.
    pub(crate) fn cross_hair_radius() -> f32 {
        CROSS_HAIR_RADIUS
    }

    /// Drains the layer into a flat element sequence in the fixed draw
    /// order: strokes and fills form the structural drawing, underlays
    /// precede the text they back, text is never hidden behind later
    /// shapes, images render after text, symbols above those, and
    /// diagnostics overlay everything.
    pub(crate) fn into_elements(self) -> Vec<Element> {
        let mut elements = Vec::with_capacity(self.element_count());
        elements.extend(self.line_segments.into_iter().map(Element::Line));
        elements.extend(self.circles.into_iter().map(Element::Circle));
        elements.extend(self.rectangles.into_iter().map(Element::Rectangle));
        elements.extend(self.polygons.into_iter().map(Element::Polygon));
        elements.extend(self.underlay_rects.into_iter().map(Element::Underlay));
        elements.extend(self.text_lines.into_iter().map(Element::Text));
        elements.extend(self.images.into_iter().map(Element::Image));
        elements.extend(self.symbols.into_iter().map(Element::Symbol));
        elements.extend(self.diagnostics.into_iter().map(Element::Diagnostic));
        elements
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use slate_core::geometry::{HorizAlign, Point, Size};

    use crate::element::{Element, ElementKind};
    use crate::error::TabletError;
    use crate::testutil;
    use crate::text::TextBlockCorner;

    #[test]
    fn test_line_segment_converts_both_endpoints() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_line_segment(
                &cx,
                "transition connector",
                Point::new(0.0, 1224.0),
                Point::new(1584.0, 1224.0),
            )
            .unwrap();

        match &layer.into_elements()[0] {
            Element::Line(line) => {
                assert_approx_eq!(f32, line.from.x(), 0.0);
                assert_approx_eq!(f32, line.from.y(), 0.0);
                assert_approx_eq!(f32, line.to.x(), 1584.0);
                assert_approx_eq!(f32, line.to.y(), 0.0);
            }
            other => panic!("expected a line element, got {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_is_stored_by_device_upper_left() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_rectangle(
                &cx,
                "state compartment",
                Point::new(100.0, 100.0),
                Size::new(200.0, 50.0),
                None,
            )
            .unwrap();

        match &layer.into_elements()[0] {
            Element::Rectangle(rect) => {
                assert_approx_eq!(f32, rect.upper_left.x(), 100.0);
                assert_approx_eq!(f32, rect.upper_left.y(), 1074.0);
                assert!(rect.fill.is_some());
                assert!(rect.corners.is_some());
            }
            other => panic!("expected a rectangle element, got {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_color_usage_overrides_fill() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_rectangle(
                &cx,
                "state compartment",
                Point::new(10.0, 10.0),
                Size::new(40.0, 20.0),
                Some("attention"),
            )
            .unwrap();

        match &layer.into_elements()[0] {
            Element::Rectangle(rect) => {
                assert_eq!(rect.fill.as_ref(), cx.db().usage_color("attention"));
            }
            other => panic!("expected a rectangle element, got {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_unknown_color_usage_is_an_error() {
        let (cx, mut layer) = testutil::context_and_layer();
        let result = layer.add_rectangle(
            &cx,
            "state compartment",
            Point::new(10.0, 10.0),
            Size::new(40.0, 20.0),
            Some("nonexistent usage"),
        );
        assert!(matches!(result, Err(TabletError::UnknownColorUsage(_))));
        assert_eq!(layer.element_count(), 0);
    }

    #[test]
    fn test_unresolved_shape_asset_leaves_layer_untouched() {
        let (cx, mut layer) = testutil::context_and_layer();
        let result = layer.add_line_segment(
            &cx,
            "no such asset",
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
        );
        assert!(matches!(result, Err(TabletError::UnresolvedAsset { .. })));
        assert_eq!(layer.element_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_line_is_an_error() {
        let (cx, mut layer) = testutil::context_and_layer();
        let result = layer.add_line_segment(
            &cx,
            "transition connector",
            Point::new(0.0, 0.0),
            Point::new(0.0, 2000.0),
        );
        assert!(matches!(result, Err(TabletError::BoundsExceeded { .. })));
    }

    #[test]
    fn test_open_polygon_becomes_segments() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_open_polygon(
                &cx,
                "transition connector",
                &[
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 10.0),
                    Point::new(20.0, 0.0),
                ],
            )
            .unwrap();
        assert_eq!(layer.element_count(), 2);
    }

    #[test]
    fn test_underlay_is_emitted_for_flagged_assets_only() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_text_line(&cx, "transition label", Point::new(50.0, 50.0), "guard")
            .unwrap();
        assert_eq!(layer.element_count(), 1);

        layer
            .add_text_line(&cx, "state name", Point::new(50.0, 100.0), "Pending")
            .unwrap();
        // the flagged asset contributes both an underlay and the text line
        assert_eq!(layer.element_count(), 3);

        let kinds: Vec<ElementKind> = layer
            .into_elements()
            .iter()
            .map(Element::kind)
            .collect();
        // underlays render before any text regardless of add order
        let first_text = kinds.iter().position(|k| *k == ElementKind::Text).unwrap();
        let underlay = kinds
            .iter()
            .position(|k| *k == ElementKind::Underlay)
            .unwrap();
        assert!(underlay < first_text);
    }

    #[test]
    fn test_underlay_matches_background_color() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_text_line(&cx, "state name", Point::new(50.0, 100.0), "Pending")
            .unwrap();

        let underlay = layer
            .into_elements()
            .into_iter()
            .find_map(|e| match e {
                Element::Underlay(rect) => Some(rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(&underlay.color, cx.background());
    }

    #[test]
    fn test_text_block_lines_stack_bottom_up() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_text_block(
                &cx,
                "transition label",
                Point::new(100.0, 100.0),
                &["first", "second", "third"],
                HorizAlign::Left,
            )
            .unwrap();

        let ys: Vec<f32> = layer
            .into_elements()
            .into_iter()
            .filter_map(|e| match e {
                Element::Text(line) => Some(line.upper_left.y()),
                _ => None,
            })
            .collect();

        assert_eq!(ys.len(), 3);
        // Later lines sit higher on the page, so smaller device y
        assert!(ys[0] > ys[1]);
        assert!(ys[1] > ys[2]);
    }

    #[test]
    fn test_right_aligned_lines_share_a_right_edge_reference() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_text_block(
                &cx,
                "transition label",
                Point::new(100.0, 100.0),
                &["x", "a noticeably longer line"],
                HorizAlign::Right,
            )
            .unwrap();

        let xs: Vec<f32> = layer
            .into_elements()
            .into_iter()
            .filter_map(|e| match e {
                Element::Text(line) => Some(line.upper_left.x()),
                _ => None,
            })
            .collect();

        // The longer line was added first (bottom-up); the short line is
        // indented rightward past the block origin.
        assert_eq!(xs.len(), 2);
        assert!(xs[0] < xs[1]);
    }

    #[test]
    fn test_pinned_block_sits_left_of_its_right_corner() {
        let (cx, mut layer) = testutil::context_and_layer();
        let pin = Point::new(400.0, 300.0);
        layer
            .pin_text_block(
                &cx,
                "transition label",
                &["first line", "second"],
                pin,
                TextBlockCorner::LowerRight,
                HorizAlign::Left,
            )
            .unwrap();

        let device_pin_x = cx.to_device(pin).unwrap().x();
        for element in layer.into_elements() {
            if let Element::Text(line) = element {
                assert!(line.upper_left.x() < device_pin_x);
            }
        }
    }

    #[test]
    fn test_sticker_resolves_text_from_the_table() {
        let (cx, mut layer) = testutil::context_and_layer();
        layer
            .add_sticker(
                &cx,
                "state name",
                "unnamed",
                Point::new(200.0, 200.0),
                TextBlockCorner::LowerLeft,
            )
            .unwrap();

        let texts: Vec<String> = layer
            .into_elements()
            .into_iter()
            .filter_map(|e| match e {
                Element::Text(line) => Some(line.text),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["(unnamed)".to_string()]);
    }

    #[test]
    fn test_unknown_sticker_is_an_error() {
        let (cx, mut layer) = testutil::context_and_layer();
        let result = layer.add_sticker(
            &cx,
            "state name",
            "never defined",
            Point::new(200.0, 200.0),
            TextBlockCorner::LowerLeft,
        );
        assert!(matches!(result, Err(TabletError::UnknownSticker { .. })));
    }

    #[test]
    fn test_out_of_bounds_image_is_skipped_not_failed() {
        let (cx, mut layer) = testutil::context_and_layer();
        let result = layer.add_image(
            &cx,
            std::path::Path::new("logo.png"),
            Point::new(0.0, 5000.0),
            Size::new(100.0, 50.0),
        );
        assert!(result.is_ok());
        assert_eq!(layer.element_count(), 0);
    }

    #[test]
    fn test_fixed_category_order_regardless_of_add_order() {
        let (cx, mut layer) = testutil::context_and_layer();

        // Add one of each kind in reverse of the render order
        layer
            .add_cross_hair(&cx, Point::new(10.0, 10.0), "black")
            .unwrap();
        layer
            .add_symbol(&cx, "initial pseudo state", Point::new(300.0, 300.0), 0.0)
            .unwrap();
        layer
            .add_image(
                &cx,
                std::path::Path::new("logo.png"),
                Point::new(20.0, 20.0),
                Size::new(10.0, 10.0),
            )
            .unwrap();
        layer
            .add_text_line(&cx, "state name", Point::new(50.0, 100.0), "Pending")
            .unwrap();
        layer
            .add_polygon(
                &cx,
                "state compartment",
                &[
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(5.0, 10.0),
                ],
            )
            .unwrap();
        layer
            .add_rectangle(
                &cx,
                "state compartment",
                Point::new(10.0, 10.0),
                Size::new(30.0, 20.0),
                None,
            )
            .unwrap();
        layer
            .add_circle(&cx, "state compartment", Point::new(40.0, 40.0), 5.0)
            .unwrap();
        layer
            .add_line_segment(
                &cx,
                "transition connector",
                Point::new(0.0, 0.0),
                Point::new(100.0, 100.0),
            )
            .unwrap();

        let kinds: Vec<ElementKind> = layer.into_elements().iter().map(Element::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Line,
                ElementKind::Circle,
                ElementKind::Rectangle,
                ElementKind::Polygon,
                ElementKind::Underlay,
                ElementKind::Text,
                ElementKind::Image,
                ElementKind::Symbol,
                ElementKind::Diagnostic,
            ]
        );
    }
}
