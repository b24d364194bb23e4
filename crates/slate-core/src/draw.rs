//! Resolved drawing styles and text measurement.
//!
//! Everything in this module is a *resolved* style: color references, dash
//! pattern names and typeface names have already been looked up, so the
//! values here can be applied to output primitives directly.

mod font;
mod stroke;

pub use font::{FontSlant, FontSpec, FontWeight, TextStyle, measure_line};
pub use stroke::{CornerSpec, DashPattern, LineStyle};
