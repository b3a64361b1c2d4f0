use bolero::check;
use gimli24::{decrypt, encrypt, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

#[test]
fn fuzz_aead_roundtrip() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, [u8; NONCE_SIZE], [u8; KEY_SIZE])>()
        .for_each(|(message, ad, nonce, key)| {
            // =============================================================================
            // ROUND-TRIP
            // =============================================================================

            let sealed = encrypt(message, ad, nonce, key);
            assert_eq!(sealed.len(), message.len() + TAG_SIZE);

            let opened = decrypt(&sealed, ad, nonce, key);
            assert_eq!(opened.as_deref(), Ok(message.as_slice()), "Round-trip mismatch");

            // =============================================================================
            // TAMPERING
            // =============================================================================

            let mut tampered = sealed.clone();
            let idx = message.len() % tampered.len();
            tampered[idx] ^= 0x01;
            assert!(
                decrypt(&tampered, ad, nonce, key).is_err(),
                "Tampered ciphertext accepted"
            );
        });
}

#[test]
fn fuzz_decrypt_arbitrary_input() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(ciphertext, ad)| {
            // Arbitrary bytes must never panic and almost never authenticate.
            let _ = decrypt(ciphertext, ad, &[0u8; NONCE_SIZE], &[0u8; KEY_SIZE]);
        });
}
