//! The validated, immutable style database.
//!
//! A [`StyleDatabase`] is built once from a raw [`StyleSheet`] and then only
//! read. Construction resolves every cross-table reference (line styles to
//! colors and dash patterns, text styles to typefaces and colors, color
//! usages to colors, presentation entries to style names, symbol style
//! tables to symbol components) and fails with a [`ConfigError`] naming the
//! first dangling key it finds. After that, style lookups during drawing
//! cannot fail for configuration reasons.
//!
//! The database is an explicit value. Callers construct it (usually once per
//! process) and hand an `Rc` of it to each [`Tablet`](crate::tablet::Tablet)
//! they create, so independent tablets can coexist and tests can build
//! small throwaway databases.

use std::collections::HashMap;

use log::info;

use slate_core::{
    color::Color,
    draw::{FontSpec, LineStyle, TextStyle},
};

use crate::{
    config::{PresentationSpec, StyleSheet},
    error::ConfigError,
    symbol::SymbolDefinition,
};

/// Immutable, fully resolved style tables shared by every presentation.
#[derive(Debug)]
pub struct StyleDatabase {
    colors: HashMap<String, Color>,
    line_styles: HashMap<String, LineStyle>,
    text_styles: HashMap<String, TextStyle>,
    color_usages: HashMap<String, Color>,
    symbols: HashMap<String, SymbolDefinition>,
    drawing_types: HashMap<String, HashMap<String, PresentationSpec>>,
    stickers: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl StyleDatabase {
    /// Builds the database from a raw sheet, validating referential
    /// integrity across all tables.
    pub fn new(sheet: StyleSheet) -> Result<Self, ConfigError> {
        let colors = resolve_colors(&sheet)?;
        let line_styles = resolve_line_styles(&sheet, &colors)?;
        let text_styles = resolve_text_styles(&sheet, &colors)?;
        let color_usages = resolve_color_usages(&sheet, &colors)?;

        let symbols: HashMap<String, SymbolDefinition> = sheet
            .symbols
            .iter()
            .map(|(name, specs)| (name.clone(), SymbolDefinition::from_specs(specs)))
            .collect();

        validate_drawing_types(&sheet, &line_styles, &text_styles, &colors, &symbols)?;

        info!(
            colors = colors.len(),
            line_styles = line_styles.len(),
            text_styles = text_styles.len(),
            symbols = symbols.len();
            "style database loaded"
        );

        Ok(Self {
            colors,
            line_styles,
            text_styles,
            color_usages,
            symbols,
            drawing_types: sheet.drawing_types,
            stickers: sheet.stickers,
        })
    }

    /// Parses a TOML style sheet and builds the database from it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::new(StyleSheet::from_toml_str(text)?)
    }

    /// Looks up a palette color by name.
    pub fn color(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    /// Looks up the color behind a usage alias.
    pub fn usage_color(&self, usage: &str) -> Option<&Color> {
        self.color_usages.get(usage)
    }

    /// Looks up a symbol definition by name.
    pub fn symbol(&self, name: &str) -> Option<&SymbolDefinition> {
        self.symbols.get(name)
    }

    /// Looks up a predefined sticker text.
    pub fn sticker(&self, drawing_type: &str, asset: &str, name: &str) -> Option<&str> {
        self.stickers
            .get(drawing_type)?
            .get(asset)?
            .get(name)
            .map(String::as_str)
    }

    pub(crate) fn line_style(&self, name: &str) -> Option<&LineStyle> {
        self.line_styles.get(name)
    }

    pub(crate) fn text_style(&self, name: &str) -> Option<&TextStyle> {
        self.text_styles.get(name)
    }

    pub(crate) fn presentation_spec(
        &self,
        drawing_type: &str,
        presentation: &str,
    ) -> Result<&PresentationSpec, ConfigError> {
        self.drawing_types
            .get(drawing_type)
            .and_then(|presentations| presentations.get(presentation))
            .ok_or_else(|| ConfigError::UnknownPresentation {
                drawing_type: drawing_type.to_string(),
                presentation: presentation.to_string(),
            })
    }
}

fn resolve_colors(sheet: &StyleSheet) -> Result<HashMap<String, Color>, ConfigError> {
    let mut colors = HashMap::with_capacity(sheet.colors.len());
    for (name, rgb) in &sheet.colors {
        for channel in [rgb.r, rgb.g, rgb.b] {
            if !(0..=255).contains(&channel) {
                return Err(ConfigError::BadColorChannel {
                    color: name.clone(),
                    value: channel,
                });
            }
        }
        colors.insert(
            name.clone(),
            Color::from_rgb8(rgb.r as u8, rgb.g as u8, rgb.b as u8),
        );
    }
    Ok(colors)
}

fn resolve_line_styles(
    sheet: &StyleSheet,
    colors: &HashMap<String, Color>,
) -> Result<HashMap<String, LineStyle>, ConfigError> {
    let mut line_styles = HashMap::with_capacity(sheet.line_styles.len());
    for (name, spec) in &sheet.line_styles {
        let color = colors
            .get(&spec.color)
            .ok_or_else(|| ConfigError::UndefinedColor {
                color: spec.color.clone(),
                referrer: format!("line style [{name}]"),
            })?;

        let mut style = LineStyle::new(color.clone(), spec.width);
        if let Some(pattern) = &spec.pattern {
            let dashes = sheet.dash_patterns.get(pattern).copied().ok_or_else(|| {
                ConfigError::UndefinedDashPattern {
                    pattern: pattern.clone(),
                    line_style: name.clone(),
                }
            })?;
            style = style.with_dashes(dashes);
        }
        line_styles.insert(name.clone(), style);
    }
    Ok(line_styles)
}

fn resolve_text_styles(
    sheet: &StyleSheet,
    colors: &HashMap<String, Color>,
) -> Result<HashMap<String, TextStyle>, ConfigError> {
    let mut text_styles = HashMap::with_capacity(sheet.text_styles.len());
    for (name, spec) in &sheet.text_styles {
        let family =
            sheet
                .typefaces
                .get(&spec.typeface)
                .ok_or_else(|| ConfigError::UndefinedTypeface {
                    typeface: spec.typeface.clone(),
                    text_style: name.clone(),
                })?;
        let color = colors
            .get(&spec.color)
            .ok_or_else(|| ConfigError::UndefinedColor {
                color: spec.color.clone(),
                referrer: format!("text style [{name}]"),
            })?;

        let font = FontSpec::new(family.clone(), spec.size, spec.slant, spec.weight);
        text_styles.insert(
            name.clone(),
            TextStyle::new(font, color.clone(), spec.spacing),
        );
    }
    Ok(text_styles)
}

fn resolve_color_usages(
    sheet: &StyleSheet,
    colors: &HashMap<String, Color>,
) -> Result<HashMap<String, Color>, ConfigError> {
    let mut usages = HashMap::with_capacity(sheet.color_usages.len());
    for (usage, color_name) in &sheet.color_usages {
        let color = colors
            .get(color_name)
            .ok_or_else(|| ConfigError::UndefinedColor {
                color: color_name.clone(),
                referrer: format!("color usage [{usage}]"),
            })?;
        usages.insert(usage.clone(), color.clone());
    }
    Ok(usages)
}

/// Checks every style reference made by the drawing-type table so that
/// presentation resolution can only fail on a missing (drawing type,
/// presentation) pair, never on a dangling style name.
fn validate_drawing_types(
    sheet: &StyleSheet,
    line_styles: &HashMap<String, LineStyle>,
    text_styles: &HashMap<String, TextStyle>,
    colors: &HashMap<String, Color>,
    symbols: &HashMap<String, SymbolDefinition>,
) -> Result<(), ConfigError> {
    for (drawing_type, presentations) in &sheet.drawing_types {
        for (presentation, spec) in presentations {
            let referrer = |asset: &str| format!("[{drawing_type}:{presentation}] asset [{asset}]");

            for (asset, text) in &spec.text {
                if !text_styles.contains_key(&text.text_style) {
                    return Err(ConfigError::UndefinedTextStyle {
                        text_style: text.text_style.clone(),
                        referrer: referrer(asset),
                    });
                }
            }

            for (asset, shape) in &spec.shape {
                if !line_styles.contains_key(&shape.line_style) {
                    return Err(ConfigError::UndefinedLineStyle {
                        line_style: shape.line_style.clone(),
                        referrer: referrer(asset),
                    });
                }
                if let Some(fill) = &shape.fill {
                    if !colors.contains_key(fill) {
                        return Err(ConfigError::UndefinedColor {
                            color: fill.clone(),
                            referrer: referrer(asset),
                        });
                    }
                }
            }

            for (symbol_name, components) in &spec.symbols {
                for (component_name, style) in components {
                    let component_exists = symbols
                        .get(symbol_name)
                        .is_some_and(|definition| {
                            definition
                                .components()
                                .iter()
                                .any(|c| c.name() == component_name)
                        });
                    if !component_exists {
                        return Err(ConfigError::UndefinedSymbolComponent {
                            symbol: symbol_name.clone(),
                            component: component_name.clone(),
                            referrer: format!("[{drawing_type}:{presentation}]"),
                        });
                    }
                    if !line_styles.contains_key(&style.line_style) {
                        return Err(ConfigError::UndefinedLineStyle {
                            line_style: style.line_style.clone(),
                            referrer: format!(
                                "[{drawing_type}:{presentation}] symbol [{symbol_name}.{component_name}]"
                            ),
                        });
                    }
                    if let Some(fill) = &style.fill {
                        if !colors.contains_key(fill) {
                            return Err(ConfigError::UndefinedColor {
                                color: fill.clone(),
                                referrer: format!(
                                    "[{drawing_type}:{presentation}] symbol [{symbol_name}.{component_name}]"
                                ),
                            });
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
