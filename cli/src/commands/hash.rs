//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Hash a single file and return the hex digest.
pub fn hash_file(path: &Path) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "hashing");
    Ok(hex::encode(gimli24::hash(&data)))
}

/// Hash files in parallel and print `digest  path` lines in input order.
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    // `collect` on an indexed parallel iterator keeps the original order.
    let results: Vec<_> = files.par_iter().map(|path| hash_file(path)).collect();

    let mut failed = 0usize;
    for (file_path, result) in files.iter().zip(results) {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
