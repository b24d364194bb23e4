//! Application-to-device coordinate conversion and the drawing context.
//!
//! Client code positions everything in application coordinates: upper-right
//! quadrant cartesian with the origin in the lower left corner of the page.
//! Output primitives live in device coordinates with the origin in the upper
//! left corner and y ascending toward the bottom. The flip is centralized in
//! [`to_device`] so the pattern is written once instead of being sprinkled,
//! and inevitably mis-applied, across every call site that adds geometry.

use std::rc::Rc;

use slate_core::{
    color::Color,
    geometry::{Point, Size},
};

use crate::{error::TabletError, styledb::StyleDatabase};

/// Converts an application-space position to device coordinates.
///
/// Requires `p.x >= 0` and `p.y >= 0`; a negative coordinate is a programming
/// error, not a drawing-data condition, and is only debug-asserted.
///
/// # Errors
///
/// Returns [`TabletError::BoundsExceeded`] when `p.y` lies above the page.
/// The boundary itself is inside: `p.y == page_height` maps to device y 0.
pub fn to_device(p: Point, page_height: f32) -> Result<Point, TabletError> {
    if p.y() > page_height {
        return Err(TabletError::BoundsExceeded {
            y: p.y(),
            page_height,
        });
    }
    debug_assert!(p.x() >= 0.0, "negative x value");
    debug_assert!(p.y() >= 0.0, "negative y value");
    Ok(Point::new(p.x(), page_height - p.y()))
}

/// Read-only drawing capabilities a layer needs while elements are added:
/// the page extent for coordinate conversion, the tablet background color
/// for text underlays, and the style database for symbol and sticker
/// lookups.
///
/// Cloned off the owning [`Tablet`](crate::tablet::Tablet) so layers carry
/// no back-reference to it.
#[derive(Debug, Clone)]
pub struct DrawingContext {
    page_size: Size,
    background: Color,
    db: Rc<StyleDatabase>,
}

impl DrawingContext {
    pub(crate) fn new(page_size: Size, background: Color, db: Rc<StyleDatabase>) -> Self {
        Self {
            page_size,
            background,
            db,
        }
    }

    /// The page extent in points.
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// The tablet background color, visible through all non-opaque elements.
    pub fn background(&self) -> &Color {
        &self.background
    }

    /// The style database the owning tablet draws from.
    pub fn db(&self) -> &StyleDatabase {
        &self.db
    }

    /// Converts an application-space position to device coordinates on this
    /// tablet's page. See [`to_device`].
    pub fn to_device(&self, p: Point) -> Result<Point, TabletError> {
        to_device(p, self.page_size.height())
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn page_and_point() -> impl Strategy<Value = (f32, Point)> {
        (1.0f32..10_000.0).prop_flat_map(|height| {
            (
                Just(height),
                (0.0f32..10_000.0, 0.0f32..1.0)
                    .prop_map(move |(x, frac)| Point::new(x, frac * height)),
            )
        })
    }

    proptest! {
        /// Conversion preserves x and mirrors y across the page height.
        #[test]
        fn flip_is_a_mirror((height, p) in page_and_point()) {
            let device = to_device(p, height).unwrap();
            prop_assert!(approx_eq!(f32, device.x(), p.x()));
            prop_assert!(approx_eq!(f32, device.y(), height - p.y(), epsilon = height * 1e-5));
        }

        /// Applying the conversion twice with the same page height is the
        /// identity.
        #[test]
        fn flip_is_an_involution((height, p) in page_and_point()) {
            let twice = to_device(to_device(p, height).unwrap(), height).unwrap();
            prop_assert!(approx_eq!(f32, twice.x(), p.x()));
            prop_assert!(approx_eq!(f32, twice.y(), p.y(), epsilon = height * 1e-5));
        }
    }
}
