//! # respcheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use respcheck_cli::check::{run_check, CheckArgs};
use respcheck_cli::config::load_config;
use respcheck_cli::replay::{run_replay, ReplayArgs};
use respcheck_cli::schema::{run_schema, SchemaArgs};

/// respcheck: validate HTTP responses against example payloads.
///
/// Derives a structural schema from a representative example response and
/// checks actual responses against it, or compares them by lenient literal
/// equality.
#[derive(Parser, Debug)]
#[command(name = "respcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one actual response against an example or expected body.
    Check(CheckArgs),

    /// Print the schema derived from an example payload.
    Schema(SchemaArgs),

    /// Run a file of recorded request/response test cases.
    Replay(ReplayArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?config, "resolved configuration");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Schema(args) => run_schema(&args),
        Commands::Replay(args) => run_replay(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
