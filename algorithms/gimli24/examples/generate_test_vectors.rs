//! Generator for GIMLI-24 test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers the permutation, block-boundary AEAD cases and hash padding cases.
#![allow(clippy::unwrap_used)]
use serde_json::{json, Value};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn permutation_vector(name: &str, input: [u8; gimli24::STATE_SIZE]) -> Value {
    let mut output = input;
    gimli24::permute_bytes(&mut output);
    json!({
        "name": name,
        "input": hex::encode(input),
        "output": hex::encode(output)
    })
}

fn aead_vector(name: &str, key: &[u8], nonce: &[u8], ad: &[u8], plaintext: &[u8]) -> Value {
    let key: [u8; gimli24::KEY_SIZE] = key.try_into().unwrap();
    let nonce: [u8; gimli24::NONCE_SIZE] = nonce.try_into().unwrap();
    json!({
        "name": name,
        "key": hex::encode(key),
        "nonce": hex::encode(nonce),
        "ad": hex::encode(ad),
        "plaintext": hex::encode(plaintext),
        "ciphertext": hex::encode(gimli24::encrypt(plaintext, ad, &nonce, &key))
    })
}

fn hash_vector(name: &str, input: &[u8]) -> Value {
    json!({
        "name": name,
        "input": hex::encode(input),
        "hash": hex::encode(gimli24::hash(input))
    })
}

fn main() {
    // =========================================================================
    // 1. PERMUTATION
    // =========================================================================

    // Reference state: word i = i*i*i + i*0x9e3779b9
    let mut reference = [0u8; gimli24::STATE_SIZE];
    for (i, chunk) in reference.chunks_exact_mut(4).enumerate() {
        let i = i as u32;
        let word = i
            .wrapping_mul(i)
            .wrapping_mul(i)
            .wrapping_add(i.wrapping_mul(0x9e37_79b9));
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    let permutation = vec![
        permutation_vector("reference", reference),
        permutation_vector("zero", [0u8; gimli24::STATE_SIZE]),
    ];

    // =========================================================================
    // 2. AEAD
    // =========================================================================

    let key = sequential(gimli24::KEY_SIZE);
    let nonce = sequential(gimli24::NONCE_SIZE);
    let alt_key = [0x42u8; gimli24::KEY_SIZE];
    let alt_nonce = [0x24u8; gimli24::NONCE_SIZE];

    let aead = vec![
        aead_vector("empty", &key, &nonce, b"", b""),
        aead_vector("one_block", &key, &nonce, b"", &sequential(16)),
        aead_vector(
            "ad_and_message_32",
            &key,
            &nonce,
            &sequential(32),
            &sequential(32),
        ),
        aead_vector("short_message_5", &key, &nonce, b"", &sequential(5)),
        aead_vector("ad_3_message_33", &key, &nonce, &sequential(3), &sequential(33)),
        aead_vector("ad_only_16", &key, &nonce, &sequential(16), b""),
        aead_vector("message_15", &alt_key, &alt_nonce, b"header", &sequential(15)),
        aead_vector("message_17", &alt_key, &alt_nonce, b"header", &sequential(17)),
        aead_vector("ascii", &key, &nonce, b"Gimli", FOX),
    ];

    // =========================================================================
    // 3. HASH
    // =========================================================================

    let hash = vec![
        hash_vector("empty", b""),
        hash_vector("abc", b"abc"),
        hash_vector("block_16", &sequential(16)),
        hash_vector("two_blocks_32", &sequential(32)),
        hash_vector("fox", FOX),
        hash_vector("zeros_100", &[0u8; 100]),
    ];

    let vectors = json!({
        "permutation": permutation,
        "aead": aead,
        "hash": hash
    });
    println!("{}", serde_json::to_string_pretty(&vectors).unwrap());
}
