//! # wsse CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wsse_cli::base64::{run_base64, Base64Args};
use wsse_cli::digest::{run_hmac, run_sha1, HmacArgs, Sha1Args};
use wsse_cli::header::{run_header, HeaderArgs};
use wsse_cli::load_config;
use wsse_cli::selftest::run_self_test;

/// WSSE toolkit CLI.
///
/// Generates X-WSSE UsernameToken headers and exposes the SHA-1,
/// HMAC-SHA1 and base64 primitives beneath them.
#[derive(Parser, Debug)]
#[command(name = "wsse", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a JSON or YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build an X-WSSE UsernameToken header.
    Header(HeaderArgs),

    /// SHA-1 digest of a string.
    Sha1(Sha1Args),

    /// HMAC-SHA1 of a string under a key.
    Hmac(HmacArgs),

    /// Base64 encode or decode.
    Base64(Base64Args),

    /// Run known-answer checks on the digest primitives.
    SelfTest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

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

    tracing::debug!("wsse CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Header(args) => run_header(args, &config),
        Commands::Sha1(args) => run_sha1(args, &config.hash),
        Commands::Hmac(args) => run_hmac(args, &config.hash),
        Commands::Base64(args) => run_base64(args, &config.hash),
        Commands::SelfTest => run_self_test(),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
