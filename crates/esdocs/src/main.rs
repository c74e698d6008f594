//! esdocs CLI - JavaScript features documentation site.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `build`: Export the site as static files
//! - `check`: Validate the content catalog

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// esdocs - JavaScript features by ECMAScript version.
#[derive(Parser)]
#[command(name = "esdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Export the site as static files.
    Build(BuildArgs),
    /// Validate the content catalog.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::Check(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(error::CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
