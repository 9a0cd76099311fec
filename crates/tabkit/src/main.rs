//! tabkit CLI - Tabbed widget generator.
//!
//! Provides commands for:
//! - `export`: Render the configured widget to a standalone HTML file
//! - `watch`: Re-export whenever the config file changes

mod clipboard;
mod commands;
mod error;
mod output;
mod surface;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExportArgs, WatchArgs};
use output::Output;

/// tabkit - Tabbed widget generator.
#[derive(Parser)]
#[command(name = "tabkit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the widget to a standalone HTML document.
    Export(ExportArgs),
    /// Re-export the widget whenever the config file changes.
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Export(args) => args.verbose,
        Commands::Watch(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Export(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
