//! Algorithm Descriptors
//!
//! Immutable registration records for test and benchmark harnesses: name,
//! sizes, byte-order flag and slice-based bindings. They are plain `const`
//! data; there is no registry and no process-wide state.

use crate::kernels::constants::{HASH_SIZE, KEY_SIZE, NONCE_SIZE, STATE_SIZE, TAG_SIZE};
use crate::oneshot;
use crate::types::{AeadDecryptFn, AeadEncryptFn, CipherError, Endianness, HashFn};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// RECORDS
// =============================================================================

/// Describes an AEAD cipher to a harness.
#[derive(Debug, Clone, Copy)]
pub struct AeadCipher {
    /// Algorithm name.
    pub name: &'static str,
    /// Key size in bytes.
    pub key_size: usize,
    /// Nonce size in bytes.
    pub nonce_size: usize,
    /// Tag size in bytes; the tag always trails the ciphertext.
    pub tag_size: usize,
    /// Internal word byte order.
    pub endianness: Endianness,
    /// Encryption binding.
    pub encrypt: AeadEncryptFn,
    /// Decryption binding.
    pub decrypt: AeadDecryptFn,
}

/// Describes a hash algorithm to a harness.
#[derive(Debug, Clone, Copy)]
pub struct HashAlgorithm {
    /// Algorithm name.
    pub name: &'static str,
    /// Internal state size in bytes.
    pub state_size: usize,
    /// Digest size in bytes.
    pub hash_size: usize,
    /// Internal word byte order.
    pub endianness: Endianness,
    /// Hash binding.
    pub hash: HashFn,
}

// =============================================================================
// GIMLI-24
// =============================================================================

/// GIMLI-24 AEAD descriptor.
pub const GIMLI24_CIPHER: AeadCipher = AeadCipher {
    name: "GIMLI-24",
    key_size: KEY_SIZE,
    nonce_size: NONCE_SIZE,
    tag_size: TAG_SIZE,
    endianness: Endianness::LittleEndian,
    encrypt: aead_encrypt,
    decrypt: aead_decrypt,
};

/// GIMLI-24 hash descriptor.
pub const GIMLI24_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm {
    name: "GIMLI-24-HASH",
    state_size: STATE_SIZE,
    hash_size: HASH_SIZE,
    endianness: Endianness::LittleEndian,
    hash,
};

// =============================================================================
// BINDINGS
// =============================================================================

fn aead_encrypt(
    message: &[u8],
    associated_data: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let (nonce, key) = checked_params(nonce, key)?;
    Ok(oneshot::encrypt(message, associated_data, nonce, key))
}

fn aead_decrypt(
    ciphertext: &[u8],
    associated_data: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let (nonce, key) = checked_params(nonce, key)?;
    Ok(oneshot::decrypt(ciphertext, associated_data, nonce, key)?)
}

fn hash(input: &[u8]) -> Vec<u8> {
    oneshot::hash(input).to_vec()
}

/// Narrow harness slices to the fixed-size key and nonce.
fn checked_params<'a>(
    nonce: &'a [u8],
    key: &'a [u8],
) -> Result<(&'a [u8; NONCE_SIZE], &'a [u8; KEY_SIZE]), CipherError> {
    let nonce_arr = <&[u8; NONCE_SIZE]>::try_from(nonce).map_err(|_| CipherError::NonceSize {
        expected: NONCE_SIZE,
        actual: nonce.len(),
    })?;
    let key_arr = <&[u8; KEY_SIZE]>::try_from(key).map_err(|_| CipherError::KeySize {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;
    Ok((nonce_arr, key_arr))
}
