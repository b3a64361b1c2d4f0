//! Shared types used across the GIMLI-24 library.

use crate::kernels::constants::{HASH_SIZE, TAG_SIZE};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Authentication tag (16 bytes).
pub type Tag = [u8; TAG_SIZE];

/// Hash digest (32 bytes).
pub type Digest = [u8; HASH_SIZE];

// =============================================================================
// DESCRIPTOR BINDINGS
// =============================================================================

/// AEAD encryption binding: `(message, associated_data, nonce, key) -> ciphertext || tag`.
///
/// Key and nonce are passed as slices so one descriptor shape fits every
/// algorithm; sizes are validated against the descriptor.
pub type AeadEncryptFn = fn(&[u8], &[u8], &[u8], &[u8]) -> Result<Vec<u8>, CipherError>;

/// AEAD decryption binding: `(ciphertext || tag, associated_data, nonce, key) -> message`.
pub type AeadDecryptFn = fn(&[u8], &[u8], &[u8], &[u8]) -> Result<Vec<u8>, CipherError>;

/// Hash binding: `input -> digest`.
pub type HashFn = fn(&[u8]) -> Vec<u8>;

// =============================================================================
// BYTE ORDER FLAG
// =============================================================================

/// Byte order of the algorithm's internal word representation.
///
/// GIMLI-24 is defined over little-endian words and converts explicitly on
/// every permutation, so no swapping is ever needed at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Endianness {
    /// Words are little-endian.
    LittleEndian = 0x0001,
}

impl Endianness {
    /// Convert to the numeric flag value used by C harnesses.
    #[must_use]
    pub const fn to_flag(self) -> u32 {
        self as u32
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Decryption could not be authenticated.
///
/// Returned both for truncated input and for a tag mismatch; the two are
/// deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationFailure;

impl fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authentication failed")
    }
}

#[cfg(feature = "std")]
impl error::Error for AuthenticationFailure {}

/// Errors from the slice-based descriptor bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Decryption could not be authenticated.
    Authentication(AuthenticationFailure),
    /// Key slice has the wrong length.
    KeySize {
        /// Required key length in bytes.
        expected: usize,
        /// Supplied key length in bytes.
        actual: usize,
    },
    /// Nonce slice has the wrong length.
    NonceSize {
        /// Required nonce length in bytes.
        expected: usize,
        /// Supplied nonce length in bytes.
        actual: usize,
    },
}

impl From<AuthenticationFailure> for CipherError {
    fn from(e: AuthenticationFailure) -> Self {
        Self::Authentication(e)
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication(e) => write!(f, "{e}"),
            Self::KeySize { expected, actual } => {
                write!(f, "invalid key size: expected {expected} bytes, got {actual}")
            }
            Self::NonceSize { expected, actual } => {
                write!(
                    f,
                    "invalid nonce size: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for CipherError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Authentication(e) => Some(e),
            _ => None,
        }
    }
}
