//! CD Locações CLI - services report and monthly closing
//!
//! A command-line interface for browsing released rental activities and
//! generating the monthly closing report with its exports.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cdloc")]
#[command(author, version, about = "Services report CLI for CD Locações", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override the data store directory (or set CDLOC_DATA_DIR env var)
    #[arg(long, env = "CDLOC_DATA_DIR", global = true)]
    data_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Services report: ad-hoc list, monthly closing and exports
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },

    /// Reference data backing the report filters
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Open the data store (read-only for every command).
    let store = match &cli.data_dir {
        Some(dir) => cdloc_core::DataStore::open(shellexpand::tilde(dir).into_owned()),
        None => cdloc_core::DataStore::new()?,
    };
    log::debug!("data store at {}", store.root().display());

    // Create context for commands
    let ctx = commands::Context {
        store,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Report { action } => commands::report::execute(&ctx, action),
        Commands::Data { action } => commands::data::execute(&ctx, action),
    }
}
