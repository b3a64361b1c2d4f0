//! Little-endian word codec and XOR helpers for the byte view of the state.

use crate::kernels::constants::{STATE_SIZE, STATE_WORDS};

// =============================================================================
// WORD CODEC
// =============================================================================

/// Decode the 48-byte state into 12 little-endian words.
pub fn load_words(bytes: &[u8; STATE_SIZE]) -> [u32; STATE_WORDS] {
    let mut words = [0u32; STATE_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Encode 12 words back into the 48-byte state, little-endian.
pub fn store_words(words: &[u32; STATE_WORDS], bytes: &mut [u8; STATE_SIZE]) {
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

// =============================================================================
// XOR HELPERS
// =============================================================================

/// `state ^= src` over `src.len()` bytes (absorb).
pub fn xor_block(state: &mut [u8], src: &[u8]) {
    for (s, m) in state.iter_mut().zip(src) {
        *s ^= *m;
    }
}

/// `state ^= src; dest = state` (encrypt: ciphertext is the post-XOR rate).
pub fn xor_block_2_dest(dest: &mut [u8], state: &mut [u8], src: &[u8]) {
    for ((d, s), m) in dest.iter_mut().zip(state.iter_mut()).zip(src) {
        *s ^= *m;
        *d = *s;
    }
}

/// `dest = state ^ src; state = src` (decrypt).
///
/// The output is taken from the rate bytes *before* this block, then the
/// ciphertext replaces them, so the state follows the same trajectory as on
/// the encrypting side.
pub fn xor_block_swap(dest: &mut [u8], state: &mut [u8], src: &[u8]) {
    for ((d, s), c) in dest.iter_mut().zip(state.iter_mut()).zip(src) {
        let ciphertext = *c;
        *d = *s ^ ciphertext;
        *s = ciphertext;
    }
}
