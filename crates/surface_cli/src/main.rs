//! optsurface CLI - valuation surfaces from the command line
//!
//! # Commands
//!
//! - `optsurface evaluate` - Price a full surface and print one Greek
//! - `optsurface check` - Validate configuration and report effective settings
//!
//! Engine settings come from `SURFACE_*` environment variables and can be
//! overridden per invocation with flags.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Option valuation surface engine CLI
#[derive(Parser)]
#[command(name = "optsurface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a full surface and print one Greek for all four variants
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Validate configuration and report effective settings
    Check,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(&args),
        Commands::Check => commands::check::run(),
    }
}
