//! CLI logic for the Railgraph diagram tool.
//!
//! This module contains the core CLI logic: it loads a diagram document,
//! renders it as DOT or XMI, and writes the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use chrono::Local;
use log::{debug, info};

use railgraph::{DiagramRenderer, OutputFormat, RailgraphError, SourceFormat, config::AppConfig};

/// Run the Railgraph CLI application
///
/// This function reads the input diagram document, renders it in the
/// resolved output format and writes the result to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RailgraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document decoding errors
/// - Unknown node or edge kinds
pub fn run(args: &Args) -> Result<(), RailgraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(migration_version) = &args.migration_version {
        app_config
            .label_mut()
            .set_migration_version(migration_version.as_str());
    }

    let format = resolve_format(args.format, &args.output, &app_config);
    debug!(format:% = format; "Resolved output format");

    let source = fs::read_to_string(&args.input)?;

    let renderer = DiagramRenderer::new(app_config);
    let diagram = renderer.parse(&source, SourceFormat::from_path(&args.input))?;
    let document = renderer.render(&diagram, format, Local::now().naive_local());

    fs::write(&args.output, document)?;

    info!(output_file = args.output, format:% = format; "Diagram exported successfully");

    Ok(())
}

/// An explicit format wins, then the output extension, then the configured default.
fn resolve_format(
    explicit: Option<OutputFormat>,
    output: &str,
    config: &AppConfig,
) -> OutputFormat {
    explicit
        .or_else(|| OutputFormat::from_path(output))
        .unwrap_or_else(|| config.output().format())
}
