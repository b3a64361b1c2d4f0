//! # `PractRand` Stream Generator
//!
//! Writes an endless binary stream for statistical test suites
//! (`PractRand`, `TestU01`, `dieharder`).
//!
//! Three sources are available: digests of an incrementing counter, the
//! AEAD keystream (encryption of zeros), and the raw permutation iterated
//! from the zero state.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Source {
    /// Hash of a little-endian 64-bit counter, repeated to the input size
    Hash,
    /// AEAD ciphertext of zero blocks under a counter nonce
    Keystream,
    /// Full 48-byte state after each iterated permutation
    Permutation,
}

#[derive(Parser)]
#[command(name = "gimli24_stream")]
#[command(about = "Binary stream generator for randomness test suites")]
struct Args {
    /// Stream source
    #[arg(value_enum, default_value_t = Source::Hash)]
    source: Source,

    /// Input size per hash call, or message size per AEAD call
    #[arg(short, long, default_value_t = 64)]
    size: usize,
}

/// Entry point for the stream generator.
fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut counter: u64 = 0;
    let mut state = [0u8; gimli24::STATE_SIZE];
    let key = [0u8; gimli24::KEY_SIZE];

    loop {
        let counter_bytes = counter.to_le_bytes();

        let written = match args.source {
            Source::Hash => {
                let input: Vec<u8> = (0..args.size).map(|i| counter_bytes[i % 8]).collect();
                handle.write_all(&gimli24::hash(&input))
            }
            Source::Keystream => {
                let mut nonce = [0u8; gimli24::NONCE_SIZE];
                nonce[..8].copy_from_slice(&counter_bytes);
                let mut block = vec![0u8; args.size];
                let _tag = gimli24::encrypt_in_place_detached(&mut block, b"", &nonce, &key);
                handle.write_all(&block)
            }
            Source::Permutation => {
                gimli24::permute_bytes(&mut state);
                handle.write_all(&state)
            }
        };

        // A closed pipe ends the stream.
        if written.is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }

    Ok(())
}
