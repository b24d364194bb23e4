//! Text metrics and block geometry.
//!
//! Sizes here are ink extents measured through the font system, while block
//! heights stack on the *nominal* line height (the style's point size scaled
//! by its spacing multiplier). Keeping block height nominal makes multi-line
//! spacing independent of which glyphs happen to have ascenders.

use slate_core::geometry::{Point, Size};

use crate::{error::TabletError, presentation::Presentation};

/// Corner of a text block used as the placement pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBlockCorner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Returns the ink size of a line of text rendered with the asset's text
/// style.
pub fn line_size(
    presentation: &Presentation,
    asset: &str,
    text: &str,
) -> Result<Size, TabletError> {
    let style = presentation.text_style(asset)?;
    Ok(slate_core::draw::measure_line(text, style.font()))
}

/// Determines the dimensions of a rectangle bounding a block of text lines.
///
/// The block is as wide as the widest line's ink extent. Its height is `n`
/// line spacings minus the one unneeded lead above the first line, where a
/// line spacing is the nominal line height scaled by the style's spacing
/// multiplier.
///
/// # Panics
///
/// Asserts that `lines` is not empty.
pub fn text_block_size(
    presentation: &Presentation,
    asset: &str,
    lines: &[impl AsRef<str>],
) -> Result<Size, TabletError> {
    assert!(!lines.is_empty(), "text block size requested for empty text block");

    let style = presentation.text_style(asset)?;
    let line_height = style.font().size();
    let spacing = line_height * style.spacing();
    let inter_line_spacing = spacing - line_height;

    let mut block_width: f32 = 0.0;
    for line in lines {
        let size = line_size(presentation, asset, line.as_ref())?;
        block_width = block_width.max(size.width());
    }
    let block_height = lines.len() as f32 * spacing - inter_line_spacing;

    Ok(Size::new(block_width, block_height))
}

/// Given a text block and the position of one of its corners, returns the
/// position of its lower left corner, also in application coordinates.
pub fn lower_left_pin(
    presentation: &Presentation,
    asset: &str,
    lines: &[impl AsRef<str>],
    pin: Point,
    corner: TextBlockCorner,
) -> Result<Point, TabletError> {
    // The simple case needs no measurement
    if corner == TextBlockCorner::LowerLeft {
        return Ok(pin);
    }

    let block = text_block_size(presentation, asset, lines)?;
    Ok(match corner {
        TextBlockCorner::LowerLeft => pin,
        TextBlockCorner::UpperLeft => Point::new(pin.x(), pin.y() - block.height()),
        TextBlockCorner::LowerRight => Point::new(pin.x() - block.width(), pin.y()),
        TextBlockCorner::UpperRight => {
            Point::new(pin.x() - block.width(), pin.y() - block.height())
        }
    })
}
