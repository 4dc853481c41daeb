//! Configuration types for wireframe layout and rendering.
//!
//! This module provides configuration structures that control the canvas the
//! layout engine works on and how previews are styled. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas width, canvas height and gap used by the [`Engine`].
//! - [`StyleConfig`] - Visual styling options for the SVG preview.
//!
//! # Example
//!
//! ```
//! # use wireframe::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     canvas_width = 1280
//!
//!     [style]
//!     background_color = "white"
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.layout().canvas_width(), 1280.0);
//! assert_eq!(config.layout().gap(), 16.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use wireframe_core::color::Color;

use crate::layout::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GAP, Engine, EngineBuilder,
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every section, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a description of the invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.background_color()?;
        Ok(())
    }
}

/// Canvas configuration for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Logical canvas width.
    #[serde(default = "default_canvas_width")]
    canvas_width: f32,

    /// Logical canvas height, used to center modals and size previews.
    #[serde(default = "default_canvas_height")]
    canvas_height: f32,

    /// Spacing between items and around the content area.
    #[serde(default = "default_gap")]
    gap: f32,
}

fn default_canvas_width() -> f32 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f32 {
    DEFAULT_CANVAS_HEIGHT
}

fn default_gap() -> f32 {
    DEFAULT_GAP
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            gap: DEFAULT_GAP,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(canvas_width: f32, canvas_height: f32, gap: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            gap,
        }
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Builds the layout [`Engine`] described by this configuration.
    pub fn engine(&self) -> Engine {
        EngineBuilder::new()
            .with_canvas_width(self.canvas_width)
            .with_canvas_height(self.canvas_height)
            .with_gap(self.gap)
            .build()
    }

    /// # Errors
    ///
    /// Returns a message if the canvas is not a finite positive size or the
    /// gap is negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(format!("gap must not be negative, got {}", self.gap));
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered previews.
///
/// Fields that are not set fall back to exporter defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] of the preview canvas, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_config_matches_engine_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout().engine(), Engine::default());
        assert!(config.validate().is_ok());
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_partial_layout_section() {
        let config: AppConfig = toml::from_str("[layout]\ngap = 8.0\n").unwrap();
        assert_approx_eq!(f32, config.layout().gap(), 8.0);
        assert_approx_eq!(f32, config.layout().canvas_width(), 1024.0);
        assert_approx_eq!(f32, config.layout().canvas_height(), 768.0);
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        let err = LayoutConfig::new(0.0, 768.0, 16.0).validate().unwrap_err();
        assert!(err.contains("canvas_width"), "unexpected message: {err}");

        let err = LayoutConfig::new(1024.0, f32::NAN, 16.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("canvas_height"), "unexpected message: {err}");
    }

    #[test]
    fn test_negative_gap_rejected() {
        assert!(LayoutConfig::new(1024.0, 768.0, -1.0).validate().is_err());
        assert!(LayoutConfig::new(1024.0, 768.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_background_color() {
        let config = AppConfig::new(
            LayoutConfig::default(),
            StyleConfig::default().with_background_color("definitely-not-a-color"),
        );
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid background color"), "unexpected message: {err}");
    }
}
