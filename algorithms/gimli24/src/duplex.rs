//! Duplex State Machine
//!
//! Byte-addressable GIMLI-24 state with the absorb / encrypt / decrypt block
//! walks shared by the AEAD and hash façades. Every walk processes full
//! `RATE`-byte blocks, then finishes with the (possibly empty) remainder,
//! two padding bits and one permutation call.

use crate::kernels::constants::{
    KEY_SIZE, NONCE_SIZE, PADDING, RATE, STATE_LAST_BYTE, STATE_SIZE, TAG_SIZE,
};
use crate::kernels::portable::{self, utils};
use crate::types::Tag;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Per-block transform: `(dest, rate_bytes, src)`.
type BlockOp = fn(&mut [u8], &mut [u8], &[u8]);

// =============================================================================
// STATE
// =============================================================================

/// GIMLI-24 duplex state: 48 bytes, rate `0..16`, capacity `16..48`.
///
/// The state is stored as bytes only; the permutation decodes and encodes
/// little-endian words on every call, so the byte view and the word view can
/// never disagree. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GimliState {
    bytes: [u8; STATE_SIZE],
}

impl GimliState {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// All-zero state (hash initialization).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; STATE_SIZE],
        }
    }

    /// Wrap raw state bytes without permuting them.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; STATE_SIZE]) -> Self {
        Self { bytes }
    }

    /// AEAD initialization: nonce into bytes `0..16`, key into `16..48`,
    /// then one permutation.
    #[must_use]
    pub fn from_key_nonce(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> Self {
        let mut state = Self::new();
        state.bytes[..NONCE_SIZE].copy_from_slice(nonce);
        state.bytes[NONCE_SIZE..NONCE_SIZE + KEY_SIZE].copy_from_slice(key);
        state.permute();
        state
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Full byte view of the state.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.bytes
    }

    /// The rate region (first `RATE` bytes).
    #[must_use]
    pub fn rate(&self) -> &[u8] {
        &self.bytes[..RATE]
    }

    /// Authentication tag: the first `TAG_SIZE` bytes of the state.
    #[must_use]
    pub fn tag(&self) -> Tag {
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&self.bytes[..TAG_SIZE]);
        tag
    }

    /// Copy up to `RATE` bytes of the rate region into `out`.
    pub fn squeeze(&self, out: &mut [u8]) {
        let n = out.len().min(RATE);
        out[..n].copy_from_slice(&self.bytes[..n]);
    }

    // =========================================================================
    // PERMUTATION
    // =========================================================================

    /// Apply GIMLI-24 to the whole state.
    #[inline]
    pub fn permute(&mut self) {
        portable::permute_bytes(&mut self.bytes);
    }

    /// Close a phase: padding bit after the last data byte, padding bit at
    /// the last state byte, permute.
    fn pad_and_permute(&mut self, offset: usize) {
        self.bytes[offset] ^= PADDING;
        self.bytes[STATE_LAST_BYTE] ^= PADDING;
        self.permute();
    }

    // =========================================================================
    // DUPLEX OPERATIONS
    // =========================================================================

    /// Absorb `data` into the rate and close the phase with padding.
    ///
    /// Empty input still pads and permutes.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut blocks = data.chunks_exact(RATE);
        for block in blocks.by_ref() {
            utils::xor_block(&mut self.bytes[..RATE], block);
            self.permute();
        }

        let rem = blocks.remainder();
        utils::xor_block(&mut self.bytes[..rem.len()], rem);
        self.pad_and_permute(rem.len());
    }

    /// Encrypt `src` into `dest`: ciphertext is the rate after XOR.
    ///
    /// `dest` and `src` must have equal lengths; only the common prefix is
    /// processed otherwise.
    pub fn encrypt(&mut self, dest: &mut [u8], src: &[u8]) {
        self.walk(dest, src, utils::xor_block_2_dest);
    }

    /// Decrypt `src` into `dest`: output is the pre-block rate XOR
    /// ciphertext, then the ciphertext becomes the new rate.
    ///
    /// `dest` and `src` must have equal lengths; only the common prefix is
    /// processed otherwise.
    pub fn decrypt(&mut self, dest: &mut [u8], src: &[u8]) {
        self.walk(dest, src, utils::xor_block_swap);
    }

    /// In-place variant of [`encrypt`](Self::encrypt).
    pub fn encrypt_in_place(&mut self, buffer: &mut [u8]) {
        self.walk_in_place(buffer, utils::xor_block_2_dest);
    }

    /// In-place variant of [`decrypt`](Self::decrypt).
    pub fn decrypt_in_place(&mut self, buffer: &mut [u8]) {
        self.walk_in_place(buffer, utils::xor_block_swap);
    }

    // =========================================================================
    // BLOCK WALKS
    // =========================================================================

    fn walk(&mut self, dest: &mut [u8], src: &[u8], op: BlockOp) {
        debug_assert_eq!(dest.len(), src.len(), "duplex buffers differ in length");
        let len = dest.len().min(src.len());

        let mut out = dest[..len].chunks_exact_mut(RATE);
        let mut inp = src[..len].chunks_exact(RATE);
        for (d, s) in out.by_ref().zip(inp.by_ref()) {
            op(d, &mut self.bytes[..RATE], s);
            self.permute();
        }

        let d = out.into_remainder();
        let s = inp.remainder();
        op(d, &mut self.bytes[..s.len()], s);
        self.pad_and_permute(s.len());
    }

    fn walk_in_place(&mut self, buffer: &mut [u8], op: BlockOp) {
        let mut block = [0u8; RATE];

        let mut chunks = buffer.chunks_exact_mut(RATE);
        for chunk in chunks.by_ref() {
            block.copy_from_slice(chunk);
            op(chunk, &mut self.bytes[..RATE], &block);
            self.permute();
        }

        let rem = chunks.into_remainder();
        let n = rem.len();
        block[..n].copy_from_slice(rem);
        op(rem, &mut self.bytes[..n], &block[..n]);
        self.pad_and_permute(n);

        block.zeroize();
    }
}

impl Default for GimliState {
    fn default() -> Self {
        Self::new()
    }
}
