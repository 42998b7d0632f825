//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `http_tracer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Diagnostics and exit status for failed traces
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use http_tracer::config::Opt;
use http_tracer::initialization::init_logger_with;
use http_tracer::{run_trace, Config, TraceError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run_trace(&config, &mut stdout).await {
        match e.downcast_ref::<TraceError>() {
            Some(trace_err) => eprintln!(
                "{} occurred!\n{trace_err}\nExiting...",
                trace_err.kind().as_str()
            ),
            None => eprintln!("http-tracer error: {:#}", e),
        }
        process::exit(1);
    }
    Ok(())
}
