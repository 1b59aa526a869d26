//! Command surface for material cost estimation and stock tracking.
//!
//! Commands write their report to a caller-supplied sink (stdout in the
//! binary) so they can be driven from tests.

pub mod commands;

use std::io::Write;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub use commands::{Check, Estimate};

/// Cost Estimation & Material Tracking
#[derive(Debug, Parser)]
#[command(name = "matcost")]
#[command(about = "Cost Estimation & Material Tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON on stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate cost of materials used
    Estimate(Estimate),

    /// Check inventory levels
    Check(Check),
}

/// Run the parsed command, writing its report to `out`.
///
/// Without a subcommand this prints the help text and succeeds.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Some(Command::Estimate(cmd)) => cmd.execute(out),
        Some(Command::Check(cmd)) => cmd.execute(out),
        None => {
            Cli::command().write_help(out)?;
            Ok(())
        }
    }
}
