//! GIMLI-24 CLI
//!
//! Hash files, verify checksum lists, seal and open messages.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, open, seal, CipherArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "gimli24")]
#[command(about = "GIMLI-24 hashing and authenticated encryption", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GIMLI-24 hash of each file
    Hash {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Encrypt and authenticate: writes ciphertext || tag
    Seal(CipherArgs),
    /// Verify and decrypt ciphertext || tag
    Open(CipherArgs),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Hash { files } => hash_files(files)?,
        Commands::Check { checksum_file } => check_mode(checksum_file)?,
        Commands::Seal(args) => seal(args)?,
        Commands::Open(args) => open(args)?,
    }

    Ok(())
}
