#![no_main]

use gimli24::{decrypt, decrypt_in_place_detached, encrypt, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Layout: key (32) | nonce (16) | ad_len (1) | ad | message
    let mut key = [0u8; KEY_SIZE];
    let mut nonce = [0u8; NONCE_SIZE];
    let mut rest = data;

    if rest.len() >= KEY_SIZE + NONCE_SIZE {
        key.copy_from_slice(&rest[..KEY_SIZE]);
        nonce.copy_from_slice(&rest[KEY_SIZE..KEY_SIZE + NONCE_SIZE]);
        rest = &rest[KEY_SIZE + NONCE_SIZE..];
    }
    let (ad, msg) = match rest.split_first() {
        Some((&n, tail)) => tail.split_at(usize::from(n).min(tail.len())),
        None => (&[][..], rest),
    };

    // =============================================================================
    // 1. ROUND-TRIP
    // =============================================================================

    let sealed = encrypt(msg, ad, &nonce, &key);
    assert_eq!(sealed.len(), msg.len() + TAG_SIZE);

    let opened = decrypt(&sealed, ad, &nonce, &key);
    assert_eq!(opened.as_deref(), Ok(msg), "Round-trip mismatch");

    // =============================================================================
    // 2. FORGERY
    // =============================================================================

    let mut body = sealed[..msg.len()].to_vec();
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&sealed[msg.len()..]);
    tag[0] ^= 0x01;

    assert!(
        decrypt_in_place_detached(&mut body, ad, &nonce, &key, &tag).is_err(),
        "Forged tag accepted"
    );
    assert!(body.iter().all(|&b| b == 0), "Plaintext released on failure");

    // =============================================================================
    // 3. RAW INPUT AS CIPHERTEXT
    // =============================================================================

    let _ = decrypt(data, ad, &nonce, &key);
});
