//! # Pienkuu Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Pienkuu CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the packaging command and reporting failures
//!
//! ## Examples
//!
//! ```bash
//! # Package ./my_addon into ./my_addon.zip
//! pienkuu my_addon
//!
//! # Package with debug logging
//! pienkuu -vv my_addon
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap (a missing folder argument exits non-zero)
//! 2. Configure logging based on verbosity level
//! 3. Run the pack command
//! 4. Log and display any error, then exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command implementations (pack)
mod common; // Shared utilities (archive, fs, network, process)
mod core; // Core infrastructure (errors, config, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "pienkuu",
    about = "Packages a folder tree into a zip archive driven by pienkuu.json files",
    long_about = "Assembles <FOLDER> and its dependencies into <FOLDER>.zip in the current directory.\n\
                  Each folder's pienkuu.json controls dependencies, ignores, lint/minify and actions.",
    version
)]
struct Cli {
    #[command(flatten)]
    pack: commands::pack::PackArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::pack::handle_pack(cli.pack).await {
        tracing::error!("Packaging failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
