use bolero::check;
use gimli24::{hash, verify};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(data);
        assert!(verify(data, &h), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted = data.clone();
            let last = corrupted.len() - 1;
            corrupted[last] ^= 0x80;
            assert!(
                !verify(&corrupted, &h),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        for i in [0, 15, 16, 31] {
            let mut bad_h = h;
            bad_h[i] ^= 0x01;
            assert!(!verify(data, &bad_h), "verify() accepted corrupted byte {i}");
        }
    });
}
