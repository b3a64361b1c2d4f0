//! C-API Bindings
//!
//! SUPERCOP-style entry points for C harnesses, with pointer checks and
//! panic boundaries. Output buffers may alias input buffers (in-place use).

#![allow(unsafe_code)]

use crate::kernels::constants::{HASH_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::oneshot;

use std::ptr;
use std::slice;

// =============================================================================
// RETURN CODES
// =============================================================================

/// Success.
pub const GIMLI24_OK: i32 = 0;
/// Authentication failed or ciphertext shorter than the tag.
pub const GIMLI24_ERR_AUTH: i32 = -1;
/// Null pointer (or a length that does not fit in `usize`).
pub const GIMLI24_ERR_NULL: i32 = -2;
/// Panic caught at the boundary.
pub const GIMLI24_ERR_PANIC: i32 = -3;

// =============================================================================
// AEAD
// =============================================================================

/// Encrypt and authenticate a message.
///
/// Writes `mlen + 16` bytes (`ciphertext || tag`) to `c` and stores that
/// length in `*clen`. `nsec` is ignored.
///
/// # Safety
/// - `c` must be valid for `mlen + 16` writable bytes; it may alias `m`
/// - `clen` must be valid for one `u64` write
/// - `m` must be valid for `mlen` bytes (may be null if `mlen == 0`)
/// - `ad` must be valid for `adlen` bytes (may be null if `adlen == 0`)
/// - `npub` must point to 16 bytes, `k` to 32 bytes
///
/// # Returns
/// - `0`: Success
/// - `-2`: Null pointer
/// - `-3`: Panic
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn gimli24_aead_encrypt(
    c: *mut u8,
    clen: *mut u64,
    m: *const u8,
    mlen: u64,
    ad: *const u8,
    adlen: u64,
    _nsec: *const u8,
    npub: *const u8,
    k: *const u8,
) -> i32 {
    let (Ok(mlen), Ok(adlen)) = (usize::try_from(mlen), usize::try_from(adlen)) else {
        return GIMLI24_ERR_NULL;
    };
    if c.is_null() || clen.is_null() || npub.is_null() || k.is_null() {
        return GIMLI24_ERR_NULL;
    }
    if (m.is_null() && mlen != 0) || (ad.is_null() && adlen != 0) {
        return GIMLI24_ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let nonce = read_array::<NONCE_SIZE>(npub);
        let key = read_array::<KEY_SIZE>(k);
        let associated_data = slice_or_empty(ad, adlen);

        // Stage the plaintext in the output buffer, then encrypt in place.
        if mlen != 0 {
            ptr::copy(m, c, mlen);
        }
        let body = slice::from_raw_parts_mut(c, mlen);
        let tag = oneshot::encrypt_in_place_detached(body, associated_data, &nonce, &key);
        ptr::copy_nonoverlapping(tag.as_ptr(), c.add(mlen), TAG_SIZE);
        *clen = (mlen + TAG_SIZE) as u64;
    });

    match result {
        Ok(()) => GIMLI24_OK,
        Err(_) => GIMLI24_ERR_PANIC,
    }
}

/// Decrypt and verify `ciphertext || tag`.
///
/// On success writes `clen - 16` bytes of plaintext to `m` and stores that
/// length in `*mlen`. On failure the plaintext region of `m` is zeroed.
/// `nsec` is ignored.
///
/// # Safety
/// - `m` must be valid for `clen - 16` writable bytes; it may alias `c`
/// - `mlen` must be valid for one `u64` write
/// - `c` must be valid for `clen` bytes
/// - `ad` must be valid for `adlen` bytes (may be null if `adlen == 0`)
/// - `npub` must point to 16 bytes, `k` to 32 bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Authentication failure or `clen < 16`
/// - `-2`: Null pointer
/// - `-3`: Panic
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn gimli24_aead_decrypt(
    m: *mut u8,
    mlen: *mut u64,
    _nsec: *mut u8,
    c: *const u8,
    clen: u64,
    ad: *const u8,
    adlen: u64,
    npub: *const u8,
    k: *const u8,
) -> i32 {
    let (Ok(clen), Ok(adlen)) = (usize::try_from(clen), usize::try_from(adlen)) else {
        return GIMLI24_ERR_NULL;
    };
    if c.is_null() || mlen.is_null() || npub.is_null() || k.is_null() {
        return GIMLI24_ERR_NULL;
    }
    if ad.is_null() && adlen != 0 {
        return GIMLI24_ERR_NULL;
    }
    let Some(message_len) = clen.checked_sub(TAG_SIZE) else {
        return GIMLI24_ERR_AUTH;
    };
    if m.is_null() && message_len != 0 {
        return GIMLI24_ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let nonce = read_array::<NONCE_SIZE>(npub);
        let key = read_array::<KEY_SIZE>(k);
        let tag = read_array::<TAG_SIZE>(c.add(message_len));
        let associated_data = slice_or_empty(ad, adlen);

        if message_len == 0 {
            let mut empty = [0u8; 0];
            return oneshot::decrypt_in_place_detached(
                &mut empty,
                associated_data,
                &nonce,
                &key,
                &tag,
            );
        }

        ptr::copy(c, m, message_len);
        let body = slice::from_raw_parts_mut(m, message_len);
        oneshot::decrypt_in_place_detached(body, associated_data, &nonce, &key, &tag)
    });

    match result {
        Ok(Ok(())) => {
            *mlen = message_len as u64;
            GIMLI24_OK
        }
        Ok(Err(_)) => GIMLI24_ERR_AUTH,
        Err(_) => GIMLI24_ERR_PANIC,
    }
}

// =============================================================================
// HASH
// =============================================================================

/// Compute the 32-byte GIMLI-24 hash.
///
/// # Safety
/// - `input` must be valid for `inlen` bytes (may be null if `inlen == 0`)
/// - `out` must be valid for 32 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-2`: Null pointer
/// - `-3`: Panic
#[no_mangle]
pub unsafe extern "C" fn gimli24_hash(out: *mut u8, input: *const u8, inlen: u64) -> i32 {
    let Ok(inlen) = usize::try_from(inlen) else {
        return GIMLI24_ERR_NULL;
    };
    if out.is_null() || (input.is_null() && inlen != 0) {
        return GIMLI24_ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let digest = oneshot::hash(slice_or_empty(input, inlen));
        ptr::copy_nonoverlapping(digest.as_ptr(), out, HASH_SIZE);
    });

    match result {
        Ok(()) => GIMLI24_OK,
        Err(_) => GIMLI24_ERR_PANIC,
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Copy `N` bytes out of a caller buffer.
///
/// # Safety
/// `src` must be valid for `N` bytes.
unsafe fn read_array<const N: usize>(src: *const u8) -> [u8; N] {
    let mut out = [0u8; N];
    ptr::copy_nonoverlapping(src, out.as_mut_ptr(), N);
    out
}

/// Borrow a caller buffer, tolerating null for zero-length input.
///
/// # Safety
/// If `len != 0`, `ptr` must be non-null and valid for `len` bytes.
unsafe fn slice_or_empty<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(ptr, len)
    }
}
