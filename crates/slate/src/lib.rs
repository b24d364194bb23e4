//! Slate - a presentation-driven, multi-layered 2D drawing surface.
//!
//! Client code describes *what* to draw: semantic asset names like
//! "state name compartment" positioned in a lower-left-origin application
//! coordinate space. Slate resolves *how* each asset looks from a
//! validated style database, flips coordinates into device space, and
//! composes everything across ordered layers into one exportable SVG
//! document.
//!
//! # Overview
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use slate::{StyleDatabase, Tablet};
//! use slate::geometry::{Point, Size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = std::fs::read_to_string("styles.toml")?;
//! let db = Rc::new(StyleDatabase::from_toml_str(&sheet)?);
//!
//! let mut tablet = Tablet::new(
//!     db,
//!     Size::new(1584.0, 1224.0),
//!     "state machine diagram",
//!     "default",
//!     "diagram",
//!     "white",
//! )?;
//!
//! let cx = tablet.context();
//! let layer = tablet.layer_mut("diagram").expect("initial layer exists");
//! layer.add_rectangle(
//!     &cx,
//!     "state compartment",
//!     Point::new(100.0, 100.0),
//!     Size::new(200.0, 50.0),
//!     None,
//! )?;
//!
//! tablet.render().save("diagram.svg")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod element;
pub mod error;
pub mod layer;
pub mod presentation;
pub mod scene;
pub mod styledb;
pub mod symbol;
pub mod tablet;
pub mod text;

mod export;
#[cfg(test)]
mod testutil;

pub use slate_core::{color, draw, geometry};

pub use config::StyleSheet;
pub use context::DrawingContext;
pub use error::{ConfigError, TabletError};
pub use layer::Layer;
pub use presentation::{Presentation, PresentationKey};
pub use scene::Scene;
pub use styledb::StyleDatabase;
pub use tablet::Tablet;
pub use text::TextBlockCorner;
