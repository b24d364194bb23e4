//! The composed scene a tablet renders into.
//!
//! A [`Scene`] is the ordered, device-space output of one tablet lifecycle:
//! the page extent, the background color, and one element sequence per
//! populated layer, bottom-most first. It is the hand-off point to the
//! export capability: [`Scene::to_document`] builds the SVG document and
//! [`Scene::save`] writes it to disk.

use std::io;
use std::path::Path;

use slate_core::{color::Color, geometry::Size};

use crate::{element::Element, export};

/// One rendered layer: its name and its elements in final draw order.
#[derive(Debug)]
pub struct SceneLayer {
    name: String,
    elements: Vec<Element>,
}

impl SceneLayer {
    pub(crate) fn new(name: String, elements: Vec<Element>) -> Self {
        Self { name, elements }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// The composed output of a rendered tablet.
#[derive(Debug)]
pub struct Scene {
    page_size: Size,
    background: Color,
    layers: Vec<SceneLayer>,
}

impl Scene {
    pub(crate) fn new(page_size: Size, background: Color, layers: Vec<SceneLayer>) -> Self {
        Self {
            page_size,
            background,
            layers,
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Rendered layers, bottom-most first.
    pub fn layers(&self) -> &[SceneLayer] {
        &self.layers
    }

    /// Builds the SVG document for this scene: a page-sized canvas, the
    /// background, and one group per layer in draw order.
    pub fn to_document(&self) -> svg::Document {
        export::document(self)
    }

    /// Writes the scene to an SVG file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        svg::save(path, &self.to_document())
    }
}
