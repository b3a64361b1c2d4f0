//! CLI Commands
//!
//! All gimli24 CLI commands organized as separate modules.

mod check;
mod cipher;
mod hash;

pub use check::check_mode;
pub use cipher::{open, seal, CipherArgs};
pub use hash::hash_files;
