//! The tablet: a multi-layered drawing surface.
//!
//! A tablet abstracts the rendering backend away from an application with
//! simple 2D diagramming needs. When a diagram component wants to draw
//! itself it does not worry about line widths, dash patterns, colors, or
//! which way the y axis points; it names an asset, supplies application
//! coordinates, and the tablet takes care of the rest.
//!
//! A tablet is created with a single populated layer. Further layers are
//! populated on demand; each position in the layer order is effectively a z
//! coordinate, with the first rendered layer at the bottom. A tablet is
//! rendered exactly once: [`Tablet::render`] consumes it and produces the
//! composed [`Scene`].

use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};

use slate_core::{color::Color, geometry::Size};

use crate::{
    context::DrawingContext,
    error::{ConfigError, TabletError},
    layer::Layer,
    presentation::{Presentation, PresentationKey},
    scene::{Scene, SceneLayer},
    styledb::StyleDatabase,
};

/// The bottom-up draw order of the predefined layers. Not every view uses
/// all of them; custom layer names stack above these in the order added.
const SYSTEM_LAYER_ORDER: [&str; 6] = ["sheet", "grid", "frame", "diagram", "scenario", "annotation"];

/// A multi-layered drawing surface bound to a style database.
#[derive(Debug)]
pub struct Tablet {
    db: Rc<StyleDatabase>,
    page_size: Size,
    background: Color,
    layer_order: Vec<String>,
    layers: HashMap<String, Layer>,
    presentations: HashMap<PresentationKey, Rc<Presentation>>,
}

impl Tablet {
    /// Constructs a tablet with a single populated initial layer.
    ///
    /// The initial layer must be one of the predefined system layer names
    /// (typically "diagram"); the background names a color in the database's
    /// palette and shows through all non-opaque elements, including text
    /// underlays.
    pub fn new(
        db: Rc<StyleDatabase>,
        page_size: Size,
        drawing_type: &str,
        presentation: &str,
        initial_layer: &str,
        background: &str,
    ) -> Result<Self, TabletError> {
        info!(
            drawing_type = drawing_type,
            presentation = presentation,
            layer = initial_layer;
            "creating tablet"
        );

        if !SYSTEM_LAYER_ORDER.contains(&initial_layer) {
            return Err(TabletError::NonSystemInitialLayer(initial_layer.to_string()));
        }

        let background = db
            .color(background)
            .cloned()
            .ok_or_else(|| {
                TabletError::Config(ConfigError::UndefinedColor {
                    color: background.to_string(),
                    referrer: "tablet background".to_string(),
                })
            })?;

        let mut tablet = Self {
            db,
            page_size,
            background,
            layer_order: SYSTEM_LAYER_ORDER.iter().map(ToString::to_string).collect(),
            layers: HashMap::new(),
            presentations: HashMap::new(),
        };

        let bound = tablet.presentation_for(PresentationKey::new(drawing_type, presentation))?;
        tablet
            .layers
            .insert(initial_layer.to_string(), Layer::new(initial_layer, bound));

        Ok(tablet)
    }

    /// Populates a new layer by name and returns it. If a layer of the same
    /// name has already been populated, no layer is returned and the
    /// existing layer is left untouched.
    ///
    /// A name outside the predefined order is stacked after the last
    /// predefined layer and thus rendered above everything else.
    pub fn add_layer(
        &mut self,
        name: &str,
        drawing_type: &str,
        presentation: &str,
    ) -> Result<Option<&mut Layer>, TabletError> {
        if self.layers.contains_key(name) {
            warn!(layer = name; "layer already exists");
            return Ok(None);
        }

        if !self.layer_order.iter().any(|existing| existing == name) {
            self.layer_order.push(name.to_string());
        }

        let bound = self.presentation_for(PresentationKey::new(drawing_type, presentation))?;
        self.layers.insert(name.to_string(), Layer::new(name, bound));
        Ok(self.layers.get_mut(name))
    }

    /// The populated layer with the given name, if any.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.get_mut(name)
    }

    /// Read access to a populated layer.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    /// The current bottom-up layer order, including any appended custom
    /// names.
    pub fn layer_order(&self) -> &[String] {
        &self.layer_order
    }

    /// The page extent in points.
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// A read-only drawing context for use with this tablet's layers.
    pub fn context(&self) -> DrawingContext {
        DrawingContext::new(self.page_size, self.background.clone(), Rc::clone(&self.db))
    }

    /// Renders each populated layer moving up the z axis, skipping any
    /// unpopulated names, and hands back the composed scene. Rendering is
    /// terminal: the tablet is consumed.
    pub fn render(mut self) -> Scene {
        info!("rendering tablet");
        let mut layers = Vec::new();
        for name in &self.layer_order {
            if let Some(layer) = self.layers.remove(name) {
                info!(layer = name.as_str(); "rendering layer");
                layers.push(SceneLayer::new(name.clone(), layer.into_elements()));
            }
        }
        Scene::new(self.page_size, self.background, layers)
    }

    /// One presentation per key per tablet, shared by reference among all
    /// layers requesting that key.
    fn presentation_for(&mut self, key: PresentationKey) -> Result<Rc<Presentation>, TabletError> {
        if let Some(existing) = self.presentations.get(&key) {
            return Ok(Rc::clone(existing));
        }
        let resolved = Rc::new(Presentation::resolve(&self.db, key.clone())?);
        self.presentations.insert(key, Rc::clone(&resolved));
        Ok(resolved)
    }
}
