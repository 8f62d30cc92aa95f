//! Command-line argument definitions for the Railgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use clap::Parser;
use log::LevelFilter;

use railgraph::OutputFormat;

/// Command-line arguments for the Railgraph diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (TOML or JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "diagram.dot")]
    pub output: String,

    /// Output format (dot, xmi). Inferred from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Migration version shown in the diagram label
    #[arg(long)]
    pub migration_version: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
