//! Railgraph CLI entry point.

use std::process;

use clap::Parser;
use log::{debug, error, info};

use railgraph_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_level)
        .init();

    info!(log_level:% = args.log_level; "Starting Railgraph");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = railgraph_cli::run(&args) {
        let mut report = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut report, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        error!("{report}");
        process::exit(1);
    }

    info!(input = args.input, output = args.output; "Diagram written");
}
