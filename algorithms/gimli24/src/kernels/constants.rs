//! GIMLI-24 Kernel Constants
//!
//! The state is 384 bits, viewed as a 3x4 matrix of 32-bit words:
//!
//! ```text
//! row 0 (words 0..4)  : rate, exposed to data
//! row 1 (words 4..8)  : capacity
//! row 2 (words 8..12) : capacity
//! ```
//!
//! Columns are the triples `(c, c + 4, c + 8)` for `c` in `0..4`.

// =============================================================================
// PERMUTATION
// =============================================================================

/// Number of rounds, counted down from 24 to 1.
pub const ROUNDS: u32 = 24;

/// Base round constant, XORed with the remaining-round counter on each
/// small-swap round: `0x9e377900 ^ round`.
pub const ROUND_CONSTANT: u32 = 0x9e37_7900;

/// Left-rotation applied to the row 0 word of a column in the SP-box.
pub const ROTATE_X: u32 = 24;

/// Left-rotation applied to the row 1 word of a column in the SP-box.
pub const ROTATE_Y: u32 = 9;

// =============================================================================
// STATE GEOMETRY
// =============================================================================

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 12;

/// State size in bytes.
pub const STATE_SIZE: usize = STATE_WORDS * 4;

/// Number of bytes absorbed or squeezed per permutation call (the rate).
pub const RATE: usize = 16;

/// Capacity in bytes; never XORed with caller data.
pub const CAPACITY: usize = STATE_SIZE - RATE;

/// Index of the last state byte, which receives the second padding bit.
pub const STATE_LAST_BYTE: usize = STATE_SIZE - 1;

/// Padding byte XORed after the final data byte and at `STATE_LAST_BYTE`.
pub const PADDING: u8 = 0x01;

// =============================================================================
// AEAD PARAMETERS
// =============================================================================

/// Key size in bytes; loaded into state bytes `16..48`.
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes; loaded into state bytes `0..16`.
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

// =============================================================================
// HASH PARAMETERS
// =============================================================================

/// Hash output size in bytes (256-bit digest).
pub const HASH_SIZE: usize = 32;
