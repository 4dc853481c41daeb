//! Wireframe - deterministic layout for semantic UI wireframes.
//!
//! A wireframe generator describes a screen as a list of typed components
//! (navbar, sidebar, cards, forms, buttons, ...) without trustworthy
//! geometry. This crate assigns every component an absolute position and
//! size on a fixed-width canvas, then writes the result back as JSON or
//! draws it as an SVG preview.

pub mod config;
pub mod layout;

mod error;
mod export;

pub use wireframe_core::{color, geometry, semantic};

pub use error::WireframeError;

use log::{debug, info, trace};

use wireframe_core::{
    geometry::Size,
    semantic::{Document, Placeable},
};

use config::AppConfig;
use export::Exporter;
use layout::Engine;

/// Builder for parsing, laying out and rendering wireframe documents.
///
/// # Examples
///
/// ```rust
/// use wireframe::{WireframeBuilder, config::AppConfig};
///
/// let source = r#"[
///     {"type": "button", "label": "Save"},
///     {"type": "navbar", "label": "Top"}
/// ]"#;
///
/// let builder = WireframeBuilder::new(AppConfig::default()).expect("Invalid config");
/// let document = builder.parse(source).expect("Failed to parse");
/// let document = builder.layout(document);
///
/// let json = builder.render_json(&document).expect("Failed to render");
/// assert!(json.contains("\"navbar\""));
///
/// let svg = builder.render_svg(&document, None).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct WireframeBuilder {
    config: AppConfig,
}

impl WireframeBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas and style settings
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Config`] if the canvas size, gap or
    /// background color is invalid. Every later operation relies on a
    /// validated configuration.
    pub fn new(config: AppConfig) -> Result<Self, WireframeError> {
        config.validate().map_err(WireframeError::Config)?;
        Ok(Self { config })
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON document: a bare shape array, a `{ "shapes": [...] }`
    /// object or a blueprint with `screens`.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Json`] carrying the source text when the
    /// input is not valid JSON or matches none of the document forms.
    pub fn parse(&self, source: &str) -> Result<Document, WireframeError> {
        info!("Parsing document");

        let document: Document = serde_json::from_str(source)
            .map_err(|err| WireframeError::new_json_error(err, source))?;

        debug!(layouts_count = document.layout_count(); "Document parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Lay out every shape list of `document`.
    ///
    /// Blueprint screens are laid out independently of each other. Fields
    /// the engine does not interpret are kept as they are.
    pub fn layout(&self, document: Document) -> Document {
        let engine = self.config.layout().engine();
        info!(layouts_count = document.layout_count(); "Laying out document");

        match document {
            Document::Shapes(shapes) => Document::Shapes(place_logged(engine, &shapes)),
            Document::ShapeList(list) => {
                let shapes = place_logged(engine, list.shapes());
                Document::ShapeList(list.with_shapes(shapes))
            }
            Document::Blueprint(blueprint) => {
                Document::Blueprint(blueprint.map_screens(|screen| {
                    debug!(screen = screen.id(); "Laying out screen");
                    let components = place_logged(engine, screen.components());
                    screen.with_components(components)
                }))
            }
        }
    }

    /// Render a document as pretty printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Export`] if serialization fails.
    pub fn render_json(&self, document: &Document) -> Result<String, WireframeError> {
        let output = export::json::Json.export_document(document)?;
        info!("JSON rendered successfully");
        Ok(output)
    }

    /// Render an SVG preview of an already laid-out document.
    ///
    /// For blueprints, `screen` selects the screen by id or name; without it
    /// the first screen is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Screen`] if no screen can be selected, or
    /// [`WireframeError::Export`] for rendering failures.
    pub fn render_svg(
        &self,
        document: &Document,
        screen: Option<&str>,
    ) -> Result<String, WireframeError> {
        let layout = self.config.layout();
        let canvas = Size::new(layout.canvas_width(), layout.canvas_height());

        let exporter = export::svg::SvgBuilder::new(canvas, layout.gap())
            .with_style(self.config.style())
            .with_screen(screen)
            .build()?;
        let svg = exporter.export_document(document)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}

fn place_logged<T: Placeable>(engine: Engine, items: &[T]) -> Vec<T> {
    let (placed, report) = engine.layout_with_report(items);
    debug!(
        items_count = items.len(),
        groups_count = report.groups(),
        cursor_y = report.cursor_y();
        "Layout calculated"
    );
    placed
}
