//! Wireframe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use wireframe_cli::{Args, error_adapter};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = args.log_filter();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Wireframe");
    debug!(args:?; "Parsed arguments");

    match wireframe_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", error_adapter::render_report(&err));
            ExitCode::FAILURE
        }
    }
}
