#![no_main]

use gimli24::{hash, verify, GimliState, HASH_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. ONE-SHOT VS DUPLEX
    // =============================================================================

    let digest = hash(data);

    let mut state = GimliState::new();
    state.absorb(data);
    let mut manual = [0u8; HASH_SIZE];
    manual[..16].copy_from_slice(&state.as_bytes()[..16]);
    state.permute();
    manual[16..].copy_from_slice(&state.as_bytes()[16..HASH_SIZE]);

    assert_eq!(digest, manual, "Hash diverges from duplex state");

    // =============================================================================
    // 2. VERIFICATION
    // =============================================================================

    assert!(verify(data, &digest), "verify() failed on correct data");

    let mut bad = digest;
    bad[HASH_SIZE - 1] ^= 0x01;
    assert!(!verify(data, &bad), "verify() accepted a corrupted digest");
});
