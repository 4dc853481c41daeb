//! Error adapter for converting WireframeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Invalid JSON input
//! is rendered with a labeled snippet of the offending line; every other error
//! is rendered with a stable code.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan,
};
use serde_json::error::Category;

use wireframe::WireframeError;

/// Adapter for a JSON error together with the document it was raised on.
pub struct JsonDiagnostic<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> JsonDiagnostic<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte offset of the error location, if serde reported one.
    fn offset(&self) -> Option<usize> {
        offset_of(self.src, self.err.line(), self.err.column())
    }
}

impl fmt::Debug for JsonDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for JsonDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid document: {}", self.err)
    }
}

impl std::error::Error for JsonDiagnostic<'_> {}

impl MietteDiagnostic for JsonDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("wireframe::json"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            Category::Data => {
                "expected an array of shapes, an object with `shapes`, or a blueprint with \
                 `screens`; every component needs a `type` string"
            }
            Category::Eof => "the document ends before it is complete",
            Category::Syntax | Category::Io => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.offset()?;
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.offset()?;
        let len = usize::from(offset < self.src.len());
        let message = match self.err.classify() {
            Category::Syntax => "invalid JSON here",
            Category::Eof => "input ends here",
            Category::Data => "unexpected value here",
            Category::Io => "read failed here",
        };

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(
                Some(message.to_string()),
                SourceSpan::new(offset.into(), len),
            ),
        )))
    }
}

/// Adapter for non-diagnostic [`WireframeError`] variants.
pub struct ErrorAdapter<'a>(pub &'a WireframeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WireframeError::Io(_) => "wireframe::io",
            WireframeError::Json { .. } => "wireframe::json",
            WireframeError::Screen(_) => "wireframe::screen",
            WireframeError::Config(_) => "wireframe::config",
            WireframeError::Export(_) => "wireframe::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let WireframeError::Screen(_) = self.0 else {
            return None;
        };
        Some(Box::new("select a screen by its `id` or `name` with --screen"))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a JSON diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A JSON error with source location information.
    Json(JsonDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl<'a> From<&'a WireframeError> for Reportable<'a> {
    fn from(err: &'a WireframeError) -> Self {
        match err {
            WireframeError::Json { err, src } => Reportable::Json(JsonDiagnostic::new(err, src)),
            _ => Reportable::Error(ErrorAdapter(err)),
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Json(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Json(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Json(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Json(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Render `err` as a graphical miette report.
///
/// Falls back to the plain error message if the handler fails to write.
pub fn render_report(err: &WireframeError) -> String {
    let reportable = Reportable::from(err);
    let mut out = String::new();
    match GraphicalReportHandler::new().render_report(&mut out, &reportable) {
        Ok(()) => out,
        Err(_) => err.to_string(),
    }
}

/// Convert serde's one-based line and column into a byte offset into `src`.
///
/// Returns `None` when serde did not report a position (line zero). The
/// column counts characters, and zero means the start of the line.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let line_text = src[line_start..].lines().next().unwrap_or("");
    let within = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line_text.len(), |(index, _)| index);

    Some(line_start + within)
}
