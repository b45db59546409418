//! # Command Line
//!
//! Argument definitions and command dispatch for the `tiptime` binary.
//!
//! ```text
//! tiptime calc --cost 50 --tier 20 --round-up     →  Tip Amount: ₹10.00
//! tiptime calc --cost 33.33 --tier 15 --json      →  {"service_cost":33.33,...}
//! tiptime interactive                             →  one calculation per stdin line
//! tiptime tiers                                   →  available tiers
//! ```
//!
//! [`run`] writes results to `out` and diagnostics to `err`, so the binary
//! passes the process streams and tests pass buffers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tiptime_core::TipTier;
use tracing::{debug, info};

use crate::config::TipConfig;
use crate::screen::TipScreen;

#[derive(Debug, Parser)]
#[command(name = "tiptime")]
#[command(about = "Calculate a tip from a service cost")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tiptime.toml if present)
    #[arg(long, global = true, env = "TIPTIME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate a single tip
    Calc {
        /// Service cost as entered (e.g. "50.00")
        #[arg(long, allow_hyphen_values = true)]
        cost: String,
        /// Tier: 10, 15 or 20 (default from config)
        #[arg(long)]
        tier: Option<String>,
        /// Round the tip up to a whole currency unit (default from config)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        round_up: Option<bool>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read "<cost> [tier] [round-up]" lines from stdin
    Interactive,
    /// List the available tiers
    Tiers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Executes one command.
///
/// A failed `calc` writes nothing to `out` and returns the error; the
/// interactive loop reports bad lines on `err` and keeps going.
pub fn run(
    command: Commands,
    config: TipConfig,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Calc {
            cost,
            tier,
            round_up,
            json,
        } => {
            let mut screen = TipScreen::new(config);
            let round_up = round_up.unwrap_or(screen.config().round_up);
            let quote = screen.calculate(&cost, tier.as_deref(), round_up)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&quote)?)?;
            } else {
                writeln!(out, "{}", screen.display())?;
            }
        }

        Commands::Interactive => run_interactive(TipScreen::new(config), input, out, err)?,

        Commands::Tiers { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&TipTier::ALL)?)?;
            } else {
                for tier in TipTier::ALL {
                    let marker = if tier == config.default_tier {
                        " (default)"
                    } else {
                        ""
                    };
                    writeln!(out, "{:>4}  rate {:.2}{marker}", tier.to_string(), tier.rate())?;
                }
            }
        }
    }

    Ok(())
}

/// Feeds input lines to one screen, printing the result line after each.
fn run_interactive(
    mut screen: TipScreen,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    info!(
        locale = %screen.config().locale,
        default_tier = %screen.config().default_tier,
        "Interactive mode; enter <cost> [tier] [round-up], or 'quit'"
    );

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        if let Err(e) = screen.calculate_line(line) {
            debug!(error = %e, "Input rejected; display unchanged");
            writeln!(err, "Error: {e}")?;
        }
        writeln!(out, "{}", screen.display())?;
        out.flush()?;
    }

    Ok(())
}
