//! CLI logic for the Tether layout tool.
//!
//! This module contains the core CLI logic: load configuration, lay out the
//! scene, and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use tether::{LayoutBuilder, TetherError, alignable::Bounded, surface::Surface};

/// Run the Tether CLI application
///
/// This function lays out the input scene and writes the resulting SVG to
/// the output file.
///
/// # Errors
///
/// Returns `TetherError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene errors
/// - Invalid alignment rules
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TetherError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = LayoutBuilder::new(app_config);
    let surface = builder.parse(&source)?;
    builder.export_svg(&surface, &args.output)?;

    if args.report {
        print!("{}", report(&surface));
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// One line per element in insertion order: id, kind and resolved bounds.
pub fn report(surface: &Surface) -> String {
    surface
        .iter()
        .map(|(id, element)| format!("{id}\t{}\t{}\n", element.kind(), element.scaled_bounds()))
        .collect()
}
