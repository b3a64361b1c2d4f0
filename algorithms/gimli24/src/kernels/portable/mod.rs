//! Portable implementation of the GIMLI-24 permutation.
//!
//! Pure scalar code over `[u32; 12]`. The byte entry point decodes and
//! re-encodes the state as little-endian words, so the result is identical
//! on every host regardless of native byte order.

use crate::kernels::constants::{
    ROTATE_X, ROTATE_Y, ROUNDS, ROUND_CONSTANT, STATE_SIZE, STATE_WORDS,
};

pub mod utils;

// =============================================================================
// SP-BOX
// =============================================================================

/// Apply the non-linear SP-box to all four columns.
#[inline]
fn sp_box(state: &mut [u32; STATE_WORDS]) {
    for col in 0..4 {
        let x = state[col].rotate_left(ROTATE_X);
        let y = state[col + 4].rotate_left(ROTATE_Y);
        let z = state[col + 8];

        state[col + 8] = x ^ (z << 1) ^ ((y & z) << 2);
        state[col + 4] = y ^ x ^ ((x | z) << 1);
        state[col] = z ^ y ^ ((x & y) << 3);
    }
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// GIMLI-24 permutation over the word view of the state.
///
/// Rounds are processed four at a time, counting down from 24:
///
/// | round mod 4 | linear layer                                   |
/// |-------------|------------------------------------------------|
/// | 0           | small swap `[1,0,3,2]`, `word0 ^= 0x9e377900 ^ round` |
/// | 3           | none                                           |
/// | 2           | big swap `[2,3,0,1]`                           |
/// | 1           | none                                           |
pub fn permute(state: &mut [u32; STATE_WORDS]) {
    let mut round = ROUNDS;
    while round > 0 {
        // Round 4k: SP-box, small swap, round constant
        sp_box(state);
        state.swap(0, 1);
        state.swap(2, 3);
        state[0] ^= ROUND_CONSTANT ^ round;

        // Round 4k - 1: SP-box only
        sp_box(state);

        // Round 4k - 2: SP-box, big swap
        sp_box(state);
        state.swap(0, 2);
        state.swap(1, 3);

        // Round 4k - 3: SP-box only
        sp_box(state);

        round -= 4;
    }
}

/// GIMLI-24 permutation over the byte view of the state.
///
/// Byte `4 * i + j` of `state` is byte `j` (little-endian) of word `i`.
pub fn permute_bytes(state: &mut [u8; STATE_SIZE]) {
    let mut words = utils::load_words(state);
    permute(&mut words);
    utils::store_words(&words, state);
}
