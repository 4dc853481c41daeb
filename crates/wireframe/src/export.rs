//! Export functionality for laid-out wireframe documents.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out [`Document`] into an output format. It is the final
//! stage of the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON Text
//!     ↓ parse
//! Document
//!     ↓ layout
//! Positioned Shapes
//!     ↓ export (this module)
//! Output String
//! ```
//!
//! # Available Backends
//!
//! - [`json`] - pretty printed JSON via [`json::Json`]
//! - [`svg`] - wireframe previews via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into
//! [`WireframeError`](crate::WireframeError) at the crate boundary.

/// JSON export backend.
pub mod json;
/// SVG export backend.
pub mod svg;

use wireframe_core::semantic::Document;

/// Abstraction for document export backends.
pub trait Exporter {
    /// Exports a laid-out document to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be converted to the
    /// target format, [`Error::Json`] if serialization fails, or
    /// [`Error::MissingScreen`] if the requested blueprint screen is absent.
    fn export_document(&self, document: &Document) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// A serialization failure.
    Json(serde_json::Error),
    /// No blueprint screen matches the selector. `None` means the blueprint
    /// has no screens at all.
    MissingScreen(Option<String>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::MissingScreen(Some(selector)) => {
                write!(f, "no screen matches `{selector}`")
            }
            Self::MissingScreen(None) => write!(f, "blueprint has no screens"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) | Self::MissingScreen(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}
