//! CLI entry point for mvnget.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mvnget_core::BatchRunner;
use tracing::{debug, info};

mod cli;
mod config;
mod exit;

use cli::Args;
use config::RunConfig;
use exit::exit_outcome;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_directives = if args.quiet {
        "off".to_string()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        format!("warn,mvnget={level},mvnget_core={level}")
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));
    // Logs go to stderr; stdout is reserved for --print-only URLs.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.coordinates.is_empty() {
        info!("there is no coordinate to handle");
        return Ok(ExitCode::SUCCESS);
    }

    let config = RunConfig::from_args(&args)?;
    debug!(
        repository = config.batch.repository_url(),
        output_dir = %config.batch.output_dir().display(),
        print_only = config.batch.is_print_only(),
        "configuration resolved"
    );

    let runner = BatchRunner::from_options(config.batch, &config.transport)
        .context("failed to initialise transport")?;
    let summary = runner.run(args.coordinates.as_slice()).await;

    if runner.options().is_print_only() {
        for outcome in summary.outcomes() {
            if let Ok(resolved) = &outcome.result {
                println!("{}", resolved.url());
            }
        }
    }

    if summary.parsed() == 0 {
        info!("there is no coordinate to handle");
        return Ok(ExitCode::SUCCESS);
    }

    Ok(exit_outcome(&summary).into())
}
