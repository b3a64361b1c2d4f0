//! Seal / Open Commands
//!
//! One-shot AEAD over a whole input. Keys and nonces are given in hex;
//! input defaults to stdin and output to stdout.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::io::{Read, Write};
use std::path::PathBuf;
use zeroize::Zeroizing;

#[derive(Args)]
pub struct CipherArgs {
    /// 32-byte key, hex encoded
    #[arg(short, long)]
    key: String,

    /// 16-byte nonce, hex encoded; never reuse one under the same key
    #[arg(short, long)]
    nonce: String,

    /// Associated data (authenticated, not encrypted)
    #[arg(long, default_value = "")]
    ad: String,

    /// Input file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Encrypt the input and write `ciphertext || tag`.
pub fn seal(args: &CipherArgs) -> Result<()> {
    let key = parse_hex::<{ gimli24::KEY_SIZE }>(&args.key, "key")?;
    let nonce = parse_hex::<{ gimli24::NONCE_SIZE }>(&args.nonce, "nonce")?;
    let message = read_input(args)?;

    let sealed = gimli24::encrypt(&message, args.ad.as_bytes(), &nonce, &key);
    tracing::debug!(
        plaintext = message.len(),
        ad = args.ad.len(),
        sealed = sealed.len(),
        "sealed"
    );

    write_output(args, &sealed)
}

/// Verify and decrypt the input; nothing is written if the tag is wrong.
pub fn open(args: &CipherArgs) -> Result<()> {
    let key = parse_hex::<{ gimli24::KEY_SIZE }>(&args.key, "key")?;
    let nonce = parse_hex::<{ gimli24::NONCE_SIZE }>(&args.nonce, "nonce")?;
    let sealed = read_input(args)?;

    let message = Zeroizing::new(
        gimli24::decrypt(&sealed, args.ad.as_bytes(), &nonce, &key).map_err(|e| {
            tracing::warn!(ciphertext = sealed.len(), "authentication failed");
            anyhow!(e)
        })?,
    );
    tracing::debug!(plaintext = message.len(), "opened");

    write_output(args, &message)
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_hex<const N: usize>(text: &str, what: &str) -> Result<Zeroizing<[u8; N]>> {
    let bytes = Zeroizing::new(
        hex::decode(text.trim()).with_context(|| format!("Invalid hex in {what}"))?,
    );
    if bytes.len() != N {
        anyhow::bail!("{what} must be {N} bytes, got {}", bytes.len());
    }
    let mut out = Zeroizing::new([0u8; N]);
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn read_input(args: &CipherArgs) -> Result<Vec<u8>> {
    match &args.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))
        }
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
            Ok(data)
        }
    }
}

fn write_output(args: &CipherArgs, data: &[u8]) -> Result<()> {
    match &args.output {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("Failed to write: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data).context("Failed to write stdout")?;
            stdout.flush().context("Failed to write stdout")
        }
    }
}
