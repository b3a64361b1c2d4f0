//! Public API Layer
//!
//! One-shot AEAD and hash façades over the duplex state. Each call owns a
//! fresh state for its whole lifetime; nothing is shared between calls.

use crate::duplex::GimliState;
use crate::kernels::constants::{HASH_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::types::{AuthenticationFailure, Digest, Tag};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// =============================================================================
// AEAD ENCRYPTION
// =============================================================================

/// Encrypt and authenticate `message`, returning `ciphertext || tag`.
///
/// The output is always `message.len() + TAG_SIZE` bytes. Never fails.
///
/// # Example
/// ```rust
/// let key = [0u8; gimli24::KEY_SIZE];
/// let nonce = [1u8; gimli24::NONCE_SIZE];
///
/// let sealed = gimli24::encrypt(b"attack at dawn", b"header", &nonce, &key);
/// assert_eq!(sealed.len(), 14 + gimli24::TAG_SIZE);
/// ```
#[must_use]
pub fn encrypt(
    message: &[u8],
    associated_data: &[u8],
    nonce: &[u8; NONCE_SIZE],
    key: &[u8; KEY_SIZE],
) -> Vec<u8> {
    let mut out = vec![0u8; message.len() + TAG_SIZE];
    let (body, tag_out) = out.split_at_mut(message.len());

    let mut state = GimliState::from_key_nonce(key, nonce);
    state.absorb(associated_data);
    state.encrypt(body, message);
    tag_out.copy_from_slice(&state.tag());

    out
}

/// Encrypt `buffer` in place and return the detached tag.
///
/// # Example
/// ```rust
/// let key = [0u8; gimli24::KEY_SIZE];
/// let nonce = [1u8; gimli24::NONCE_SIZE];
/// let mut data = *b"Secret message";
///
/// let tag = gimli24::encrypt_in_place_detached(&mut data, b"", &nonce, &key);
/// gimli24::decrypt_in_place_detached(&mut data, b"", &nonce, &key, &tag).unwrap();
/// assert_eq!(&data, b"Secret message");
/// ```
#[must_use]
pub fn encrypt_in_place_detached(
    buffer: &mut [u8],
    associated_data: &[u8],
    nonce: &[u8; NONCE_SIZE],
    key: &[u8; KEY_SIZE],
) -> Tag {
    let mut state = GimliState::from_key_nonce(key, nonce);
    state.absorb(associated_data);
    state.encrypt_in_place(buffer);
    state.tag()
}

// =============================================================================
// AEAD DECRYPTION
// =============================================================================

/// Decrypt and verify `ciphertext || tag`.
///
/// # Errors
/// Returns [`AuthenticationFailure`] if the input is shorter than the tag
/// or the tag does not match. No plaintext is released on failure.
///
/// # Example
/// ```rust
/// let key = [0u8; gimli24::KEY_SIZE];
/// let nonce = [1u8; gimli24::NONCE_SIZE];
///
/// let sealed = gimli24::encrypt(b"attack at dawn", b"header", &nonce, &key);
/// let opened = gimli24::decrypt(&sealed, b"header", &nonce, &key)?;
/// assert_eq!(opened, b"attack at dawn");
///
/// assert!(gimli24::decrypt(&sealed, b"other header", &nonce, &key).is_err());
/// # Ok::<(), gimli24::AuthenticationFailure>(())
/// ```
pub fn decrypt(
    ciphertext: &[u8],
    associated_data: &[u8],
    nonce: &[u8; NONCE_SIZE],
    key: &[u8; KEY_SIZE],
) -> Result<Vec<u8>, AuthenticationFailure> {
    let Some(message_len) = ciphertext.len().checked_sub(TAG_SIZE) else {
        return Err(AuthenticationFailure);
    };
    let (body, received) = ciphertext.split_at(message_len);

    let mut state = GimliState::from_key_nonce(key, nonce);
    state.absorb(associated_data);

    let mut message = vec![0u8; message_len];
    state.decrypt(&mut message, body);

    if tag_matches(&state.tag(), received).into() {
        Ok(message)
    } else {
        message.zeroize();
        Err(AuthenticationFailure)
    }
}

/// Decrypt `buffer` in place against a detached tag.
///
/// # Errors
/// Returns [`AuthenticationFailure`] on tag mismatch; `buffer` is zeroed.
pub fn decrypt_in_place_detached(
    buffer: &mut [u8],
    associated_data: &[u8],
    nonce: &[u8; NONCE_SIZE],
    key: &[u8; KEY_SIZE],
    tag: &Tag,
) -> Result<(), AuthenticationFailure> {
    let mut state = GimliState::from_key_nonce(key, nonce);
    state.absorb(associated_data);
    state.decrypt_in_place(buffer);

    if tag_matches(&state.tag(), tag).into() {
        Ok(())
    } else {
        buffer.zeroize();
        Err(AuthenticationFailure)
    }
}

// =============================================================================
// HASHING
// =============================================================================

/// Compute the 256-bit GIMLI-24 hash.
///
/// Absorb into an all-zero state and take state bytes `0..16`; permute once
/// more and take state bytes `16..32`.
///
/// # Example
/// ```rust
/// let digest = gimli24::hash(b"abc");
/// assert_eq!(digest, gimli24::hash(b"abc"));
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> Digest {
    let mut state = GimliState::new();
    state.absorb(input);

    let mut digest = [0u8; HASH_SIZE];
    let half = HASH_SIZE / 2;
    digest[..half].copy_from_slice(&state.as_bytes()[..half]);
    state.permute();
    digest[half..].copy_from_slice(&state.as_bytes()[half..HASH_SIZE]);
    digest
}

/// Verify a digest in constant time.
///
/// # Example
/// ```rust
/// let digest = gimli24::hash(b"Secure Data");
/// assert!(gimli24::verify(b"Secure Data", &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Digest) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}

// =============================================================================
// TAG COMPARISON
// =============================================================================

/// Constant-time tag check: OR-accumulate the XOR of every byte pair, then
/// compare the accumulator against zero. All bytes are always inspected.
fn tag_matches(computed: &[u8], received: &[u8]) -> Choice {
    tag_matches_observed(computed, received, |_| {})
}

/// [`tag_matches`] with a hook invoked once per inspected byte.
fn tag_matches_observed(
    computed: &[u8],
    received: &[u8],
    mut observe: impl FnMut(usize),
) -> Choice {
    let mut diff = 0u8;
    for (i, (a, b)) in computed.iter().zip(received).enumerate() {
        observe(i);
        diff |= a ^ b;
    }
    let same_len = (computed.len() as u64).ct_eq(&(received.len() as u64));
    diff.ct_eq(&0) & same_len
}
