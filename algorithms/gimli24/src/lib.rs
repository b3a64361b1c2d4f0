#![cfg_attr(not(feature = "std"), no_std)]

//! # GIMLI-24
//!
//! The 384-bit GIMLI permutation with its duplex constructions: authenticated
//! encryption with associated data and a 256-bit hash. Portable, allocation
//! only where a `Vec` is returned, and usable without `std`.

//! # Usage
//! ```rust
//! let key = [0x42u8; gimli24::KEY_SIZE];
//! let nonce = [0x24u8; gimli24::NONCE_SIZE];
//!
//! // 1. Authenticated Encryption
//! let sealed = gimli24::encrypt(b"Lightweight Matters", b"header", &nonce, &key);
//! let opened = gimli24::decrypt(&sealed, b"header", &nonce, &key)?;
//! assert_eq!(opened, b"Lightweight Matters");
//!
//! // 2. Hashing
//! let digest = gimli24::hash(b"Lightweight Matters");
//! assert!(gimli24::verify(b"Lightweight Matters", &digest));
//! # Ok::<(), gimli24::AuthenticationFailure>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod descriptor;
mod duplex;
#[cfg(feature = "std")]
mod ffi;
// Raw permutation is public for known-answer tests and benchmarks, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use descriptor::{AeadCipher, HashAlgorithm, GIMLI24_CIPHER, GIMLI24_HASH_ALGORITHM};
// Duplex state is public for tests, fuzzing and harnesses, hidden from docs
#[doc(hidden)]
pub use duplex::GimliState;
pub use kernels::constants::{HASH_SIZE, KEY_SIZE, NONCE_SIZE, RATE, STATE_SIZE, TAG_SIZE};
pub use kernels::portable::{permute, permute_bytes};
pub use oneshot::{
    decrypt, decrypt_in_place_detached, encrypt, encrypt_in_place_detached, hash, verify,
};
pub use types::{
    AeadDecryptFn, AeadEncryptFn, AuthenticationFailure, CipherError, Digest, Endianness, HashFn,
    Tag,
};

#[cfg(feature = "std")]
pub use ffi::{
    gimli24_aead_decrypt, gimli24_aead_encrypt, gimli24_hash, GIMLI24_ERR_AUTH, GIMLI24_ERR_NULL,
    GIMLI24_ERR_PANIC, GIMLI24_OK,
};
