//! Presentations: per drawing-type style bundles.
//!
//! A presentation is a compatible set of visual styles (fonts, colors,
//! border weights, corner rounding) selected per drawing type. A state
//! machine diagram might draw state names in one face and transitions in
//! another under its "default" presentation, while a "blueprint"
//! presentation of the same drawing type swaps every color for white on
//! blue. Client code only ever names assets; the bound presentation decides
//! what those assets look like.
//!
//! Presentations are resolved once per [`PresentationKey`] and shared by
//! reference between all layers of a tablet that request the same key.

use std::collections::{HashMap, HashSet};

use log::info;

use slate_core::{
    color::Color,
    draw::{CornerSpec, LineStyle, TextStyle},
};

use crate::{
    error::{ConfigError, StyleKind, TabletError},
    styledb::StyleDatabase,
};

/// Identity of a presentation: the drawing type it belongs to plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresentationKey {
    drawing_type: String,
    presentation: String,
}

impl PresentationKey {
    pub fn new(drawing_type: impl Into<String>, presentation: impl Into<String>) -> Self {
        Self {
            drawing_type: drawing_type.into(),
            presentation: presentation.into(),
        }
    }

    pub fn drawing_type(&self) -> &str {
        &self.drawing_type
    }

    pub fn presentation(&self) -> &str {
        &self.presentation
    }
}

/// The resolved style of one symbol component under a presentation.
#[derive(Debug, Clone)]
pub struct ComponentStyle {
    line: LineStyle,
    fill: Option<Color>,
}

impl ComponentStyle {
    pub fn line(&self) -> &LineStyle {
        &self.line
    }

    pub fn fill(&self) -> Option<&Color> {
        self.fill.as_ref()
    }
}

/// An immutable asset-to-style mapping for one (drawing type, presentation)
/// pair.
#[derive(Debug)]
pub struct Presentation {
    key: PresentationKey,
    shape_styles: HashMap<String, LineStyle>,
    text_styles: HashMap<String, TextStyle>,
    fills: HashMap<String, Color>,
    corner_specs: HashMap<String, CornerSpec>,
    underlays: HashSet<String>,
    symbol_styles: HashMap<String, HashMap<String, ComponentStyle>>,
}

impl Presentation {
    /// Resolves the presentation for `key` from the drawing-type table.
    ///
    /// Every style reference was validated when the database was built, so
    /// the only failure here is a missing (drawing type, presentation) entry.
    pub(crate) fn resolve(db: &StyleDatabase, key: PresentationKey) -> Result<Self, ConfigError> {
        info!(
            drawing_type = key.drawing_type(),
            presentation = key.presentation();
            "resolving presentation"
        );
        let spec = db.presentation_spec(key.drawing_type(), key.presentation())?;

        let mut shape_styles = HashMap::new();
        let mut fills = HashMap::new();
        let mut corner_specs = HashMap::new();
        for (asset, shape) in &spec.shape {
            let line_style = db.line_style(&shape.line_style).ok_or_else(|| {
                ConfigError::UndefinedLineStyle {
                    line_style: shape.line_style.clone(),
                    referrer: format!("asset [{asset}]"),
                }
            })?;
            shape_styles.insert(asset.clone(), line_style.clone());

            if let Some(fill) = &shape.fill {
                let color = db.color(fill).ok_or_else(|| ConfigError::UndefinedColor {
                    color: fill.clone(),
                    referrer: format!("asset [{asset}]"),
                })?;
                fills.insert(asset.clone(), color.clone());
            }
            if let Some(corner_spec) = shape.corner_spec {
                corner_specs.insert(asset.clone(), corner_spec);
            }
        }

        let mut text_styles = HashMap::new();
        let mut underlays = HashSet::new();
        for (asset, text) in &spec.text {
            let text_style = db.text_style(&text.text_style).ok_or_else(|| {
                ConfigError::UndefinedTextStyle {
                    text_style: text.text_style.clone(),
                    referrer: format!("asset [{asset}]"),
                }
            })?;
            text_styles.insert(asset.clone(), text_style.clone());
            if text.underlay {
                underlays.insert(asset.clone());
            }
        }

        let mut symbol_styles: HashMap<String, HashMap<String, ComponentStyle>> = HashMap::new();
        for (symbol, components) in &spec.symbols {
            let resolved = symbol_styles.entry(symbol.clone()).or_default();
            for (component, style) in components {
                let line = db.line_style(&style.line_style).ok_or_else(|| {
                    ConfigError::UndefinedLineStyle {
                        line_style: style.line_style.clone(),
                        referrer: format!("symbol [{symbol}.{component}]"),
                    }
                })?;
                let fill = style
                    .fill
                    .as_ref()
                    .map(|fill| {
                        db.color(fill)
                            .cloned()
                            .ok_or_else(|| ConfigError::UndefinedColor {
                                color: fill.clone(),
                                referrer: format!("symbol [{symbol}.{component}]"),
                            })
                    })
                    .transpose()?;
                resolved.insert(
                    component.clone(),
                    ComponentStyle {
                        line: line.clone(),
                        fill,
                    },
                );
            }
        }

        Ok(Self {
            key,
            shape_styles,
            text_styles,
            fills,
            corner_specs,
            underlays,
            symbol_styles,
        })
    }

    pub fn key(&self) -> &PresentationKey {
        &self.key
    }

    /// The border/line style for a shape asset.
    pub fn shape_style(&self, asset: &str) -> Result<&LineStyle, TabletError> {
        self.shape_styles
            .get(asset)
            .ok_or_else(|| self.unresolved(StyleKind::Shape, asset))
    }

    /// The text style for a text asset.
    pub fn text_style(&self, asset: &str) -> Result<&TextStyle, TabletError> {
        self.text_styles
            .get(asset)
            .ok_or_else(|| self.unresolved(StyleKind::Text, asset))
    }

    /// The fill color for a closed shape asset, if one is declared.
    pub fn fill(&self, asset: &str) -> Option<&Color> {
        self.fills.get(asset)
    }

    /// The corner rounding for a rectangle asset, if one is declared.
    pub fn corner_spec(&self, asset: &str) -> Option<CornerSpec> {
        self.corner_specs.get(asset).copied()
    }

    /// Whether text drawn with this asset gets an opaque background underlay.
    pub fn needs_underlay(&self, asset: &str) -> bool {
        self.underlays.contains(asset)
    }

    /// The style of one component of a symbol.
    pub fn component_style(
        &self,
        symbol: &str,
        component: &str,
    ) -> Result<&ComponentStyle, TabletError> {
        self.symbol_styles
            .get(symbol)
            .and_then(|components| components.get(component))
            .ok_or_else(|| TabletError::UnstyledSymbolComponent {
                symbol: symbol.to_string(),
                component: component.to_string(),
                presentation: self.key.presentation().to_string(),
            })
    }

    fn unresolved(&self, kind: StyleKind, asset: &str) -> TabletError {
        TabletError::UnresolvedAsset {
            kind,
            asset: asset.to_string(),
            presentation: self.key.presentation().to_string(),
        }
    }
}
