//! Command-line argument definitions for the Wireframe CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Output format written by the CLI.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// The input document with recomputed geometry
    #[default]
    Json,
    /// A preview drawing of one shape list
    Svg,
}

/// Command-line arguments for the wireframe layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Blueprint screen to draw, by id or name (SVG only)
    #[arg(short, long)]
    pub screen: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Logger filter for `--log-level`, falling back to `warn` on an
    /// unrecognised value. Runs before the logger exists, so the warning
    /// goes to stderr directly.
    pub fn log_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level: {}. Using 'warn' instead.",
                self.log_level
            );
            LevelFilter::Warn
        })
    }
}
