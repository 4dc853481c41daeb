//! CLI logic for the wireframe layout tool.
//!
//! Reads a JSON document, lays it out and writes either the updated
//! document or an SVG preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::{info, warn};

use wireframe::{WireframeBuilder, WireframeError};

/// Run the wireframe CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WireframeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid input documents
/// - Unknown blueprint screens
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WireframeError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = WireframeBuilder::new(app_config)?;
    let document = builder.parse(&source)?;
    let document = builder.layout(document);

    let output = match args.format {
        Format::Json => {
            if args.screen.is_some() {
                warn!("Screen selection only applies to SVG output, ignoring it");
            }
            builder.render_json(&document)?
        }
        Format::Svg => builder.render_svg(&document, args.screen.as_deref())?,
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Document exported successfully");

    Ok(())
}
