//! Error types for wireframe operations.
//!
//! This module provides the main error type [`WireframeError`]. The layout
//! engine itself never fails; errors come from reading documents,
//! configuration and exporting results.

use std::io;

use thiserror::Error;

/// The main error type for wireframe operations.
///
/// # Diagnostic Variants
///
/// The `Json` variant keeps the source text next to the parser error, so the
/// reported line and column can be shown in context.
#[derive(Debug, Error)]
pub enum WireframeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error("Screen error: {0}")]
    Screen(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for WireframeError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::MissingScreen(_) => Self::Screen(error.to_string()),
            other => Self::Export(Box::new(other)),
        }
    }
}

impl WireframeError {
    /// Create a new `Json` error with the associated source text.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }
}
