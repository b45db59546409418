//! # tiptime
//!
//! Entry point: logging, argument parsing and configuration, then hands the
//! process streams to [`tiptime_cli::cli::run`].

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tiptime_cli::cli::{self, Cli};
use tiptime_cli::TipConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Cli::parse();
    let config = TipConfig::load(args.config.as_deref()).context("Loading configuration")?;

    cli::run(
        args.command,
        config,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tiptime_core=debug` - Trace each computation
/// - Default: warnings, plus info from the tiptime crates
///
/// Logs go to stderr; stdout carries results only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tiptime=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
