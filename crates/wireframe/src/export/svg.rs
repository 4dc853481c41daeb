//! SVG wireframe previews.
//!
//! Each placed component becomes an outlined, kind-colored rectangle with its
//! label centered inside. Navbars and sidebars are painted first, content on
//! top of them, and modals last over a translucent backdrop that dims the
//! rest of the screen.

use log::{debug, info};
use svg::{self, node::Text as SvgText, node::element as svg_element};

use wireframe_core::{
    color::Color,
    geometry::{Bounds, Size},
    semantic::{Blueprint, ComponentKind, Document, Placeable, Screen},
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

const STROKE_COLOR: &str = "#64748b";
const LABEL_COLOR: &str = "#0f172a";
const BACKDROP_COLOR: &str = "#0f172a";
const BACKDROP_ALPHA: f32 = 0.4;
const FONT_FAMILY: &str = "Arial, sans-serif";
const FONT_SIZE: f32 = 14.0;
const CORNER_RADIUS: f32 = 4.0;

/// Fill color used for components of `kind`.
pub fn fill_color(kind: &ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Navbar => "#cbd5e1",
        ComponentKind::Sidebar => "#e2e8f0",
        ComponentKind::Container => "#f8fafc",
        ComponentKind::DataTable | ComponentKind::List => "#f1f5f9",
        ComponentKind::Form => "#eef2ff",
        ComponentKind::Card => "#ffffff",
        ComponentKind::Chart => "#dcfce7",
        ComponentKind::Input => "#ffffff",
        ComponentKind::Button => "#bfdbfe",
        ComponentKind::Image => "#e5e7eb",
        ComponentKind::Text => "#fafafa",
        ComponentKind::Modal => "#ffffff",
        ComponentKind::Other(_) => "#f3f4f6",
    }
}

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```text
/// let exporter = SvgBuilder::new(Size::new(1024.0, 768.0), 16.0)
///     .with_style(config.style())
///     .with_screen(Some("dashboard"))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    canvas: Size,
    gap: f32,
    style: StyleConfig,
    screen: Option<String>,
}

impl SvgBuilder {
    /// Create a builder for a preview of the given logical canvas.
    pub fn new(canvas: Size, gap: f32) -> Self {
        Self {
            canvas,
            gap,
            style: StyleConfig::default(),
            screen: None,
        }
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Select the blueprint screen to draw, by id or name. Without a
    /// selector the first screen is drawn.
    pub fn with_screen(mut self, screen: Option<&str>) -> Self {
        self.screen = screen.map(str::to_owned);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, Error> {
        let background = self.style.background_color().map_err(Error::Render)?;
        let backdrop = Color::new(BACKDROP_COLOR)
            .map_err(Error::Render)?
            .with_alpha(BACKDROP_ALPHA);

        Ok(Svg {
            canvas: self.canvas,
            gap: self.gap,
            background,
            backdrop,
            screen: self.screen,
        })
    }
}

/// SVG preview exporter.
#[derive(Debug, Clone)]
pub struct Svg {
    canvas: Size,
    gap: f32,
    background: Option<Color>,
    backdrop: Color,
    screen: Option<String>,
}

impl Svg {
    /// Renders placed items into an SVG document.
    pub fn render_items<T: Placeable>(&self, items: &[T]) -> svg::Document {
        let size = self.document_size(items);

        let doc = svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());
        let mut doc = self.add_background(doc, size);

        let (structural, rest): (Vec<&T>, Vec<&T>) =
            items.iter().partition(|item| item.kind().is_structural());
        let (modals, content): (Vec<&T>, Vec<&T>) = rest
            .into_iter()
            .partition(|item| *item.kind() == ComponentKind::Modal);

        for item in structural.into_iter().chain(content) {
            doc = doc.add(self.render_item(item));
        }

        if !modals.is_empty() {
            doc = doc.add(self.render_backdrop(size));
            for modal in modals {
                doc = doc.add(self.render_item(modal));
            }
        }

        doc
    }

    /// The canvas is always as wide as the logical canvas and tall enough to
    /// show the lowest item plus one gap.
    fn document_size<T: Placeable>(&self, items: &[T]) -> Size {
        let content_bottom = items
            .iter()
            .map(Placeable::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .map_or(0.0, |bounds| bounds.max_y() + self.gap);

        debug!(content_bottom; "Calculated preview height");
        Size::new(
            self.canvas.width(),
            self.canvas.height().max(content_bottom),
        )
    }

    fn add_background(&self, doc: svg::Document, size: Size) -> svg::Document {
        let Some(color) = self.background else {
            return doc;
        };

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        doc.add(background)
    }

    fn render_backdrop(&self, size: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("class", "backdrop")
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.backdrop.to_string())
            .set("fill-opacity", self.backdrop.alpha())
    }

    fn render_item<T: Placeable>(&self, item: &T) -> svg_element::Group {
        let bounds: Bounds = item.bounds();
        let kind = item.kind();

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", CORNER_RADIUS)
            .set("fill", fill_color(kind))
            .set("stroke", STROKE_COLOR)
            .set("stroke-width", 1);

        let group = svg_element::Group::new()
            .set("class", format!("component {}", kind.as_str()))
            .add(rect);

        if item.label().is_empty() {
            return group;
        }

        let center = bounds.center();
        let label = svg_element::Text::new("")
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", FONT_SIZE)
            .set("fill", LABEL_COLOR)
            .add(SvgText::new(item.label()));
        group.add(label)
    }

    fn select_screen<'a>(&self, blueprint: &'a Blueprint) -> Result<&'a Screen, Error> {
        match self.screen.as_deref() {
            Some(selector) => blueprint
                .screen(selector)
                .ok_or_else(|| Error::MissingScreen(Some(selector.to_owned()))),
            None => blueprint.screens().first().ok_or(Error::MissingScreen(None)),
        }
    }
}

impl Exporter for Svg {
    fn export_document(&self, document: &Document) -> Result<String, Error> {
        let rendered = match document {
            Document::Shapes(shapes) => self.render_items(shapes),
            Document::ShapeList(list) => self.render_items(list.shapes()),
            Document::Blueprint(blueprint) => {
                let screen = self.select_screen(blueprint)?;
                info!(screen = screen.id(), components_count = screen.components().len();
                    "Rendering blueprint screen");
                self.render_items(screen.components())
            }
        };
        debug!("SVG document rendered");

        Ok(rendered.to_string())
    }
}
