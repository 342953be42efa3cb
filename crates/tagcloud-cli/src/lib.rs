//! CLI logic for the tagcloud layout tool.
//!
//! This module contains the core CLI logic: it reads a TOML tag list, runs a
//! layout pass and writes the resulting layout as TOML.

pub mod document;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use tagcloud::{CloudBuilder, CloudError, geometry::Size};

/// Run the tagcloud CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CloudError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Malformed input documents
/// - Output serialization errors
pub fn run(args: &Args) -> Result<(), CloudError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing tag list"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let tags = document::parse_tags(&source)?;

    let viewport = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(Size::new(width, height)),
        _ => None,
    };

    let builder = CloudBuilder::new(app_config);
    let layout = builder.refresh(&tags, viewport)?;
    let output = document::render_layout(&layout)?;

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
