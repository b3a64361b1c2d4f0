use bolero::check;
use gimli24::{
    decrypt_in_place_detached, encrypt, encrypt_in_place_detached, GimliState, KEY_SIZE,
    NONCE_SIZE,
};

#[test]
fn fuzz_in_place_consistency() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(message, ad)| {
            let key = [0x5Cu8; KEY_SIZE];
            let nonce = [0xC5u8; NONCE_SIZE];

            // =============================================================================
            // BASELINE (ALLOCATING)
            // =============================================================================
            let expected = encrypt(message, ad, &nonce, &key);

            // =============================================================================
            // DETACHED IN-PLACE
            // =============================================================================
            let mut buffer = message.clone();
            let tag = encrypt_in_place_detached(&mut buffer, ad, &nonce, &key);
            assert_eq!(&expected[..message.len()], buffer.as_slice());
            assert_eq!(&expected[message.len()..], tag.as_slice());

            decrypt_in_place_detached(&mut buffer, ad, &nonce, &key, &tag)
                .expect("In-place decrypt failed");
            assert_eq!(&buffer, message);

            // =============================================================================
            // DUPLEX STATE
            // =============================================================================
            let mut state = GimliState::from_key_nonce(&key, &nonce);
            state.absorb(ad);
            let mut out = message.clone();
            state.encrypt_in_place(&mut out);
            assert_eq!(&expected[..message.len()], out.as_slice());
            assert_eq!(&expected[message.len()..], state.tag().as_slice());
        });
}
