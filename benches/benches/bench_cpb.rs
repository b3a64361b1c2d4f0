//! Cycles-per-Byte (cpB) Benchmark: GIMLI-24
//!
//! Measures algorithmic cost using hardware cycle counters (RDTSC),
//! the unit lightweight-cipher results are usually reported in.

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

use std::hint::black_box;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::_rdtsc;

// =============================================================================
// UTILITIES
// =============================================================================

/// Average cycles per call of `f` over `iterations` runs.
#[cfg(target_arch = "x86_64")]
fn measure(iterations: u64, mut f: impl FnMut()) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        f();
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

// =============================================================================
// MAIN BENCHMARK
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn main() {
    let key = [0x42u8; gimli24::KEY_SIZE];
    let nonce = [0x24u8; gimli24::NONCE_SIZE];

    let overhead = measure(1_000_000, || {
        black_box(0);
    });

    let mut state = [0u8; gimli24::STATE_SIZE];
    let perm = measure(1_000_000, || gimli24::permute_bytes(black_box(&mut state))) - overhead;
    println!("PERMUTATION: {perm:.1} cycles ({:.2} cpB over the rate)\n", perm / 16.0);

    println!("BENCHMARK: Cycles per Byte (lower is better)");
    println!("=====================================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<12}",
        "Size", "GIMLI Hash", "GIMLI AEAD", "SHA-256", "BLAKE3"
    );
    println!(
        "{:-<10}-+-{:-<12}-+-{:-<12}-+-{:-<12}-+-{:-<12}",
        "", "", "", "", ""
    );

    for size in [16usize, 64, 1024, 16 * 1024, 1024 * 1024] {
        let input = vec![0u8; size];
        let iterations = if size < 4096 { 100_000 } else { 200 };

        let cpb = |cycles: f64| (cycles - overhead).max(1.0) / size as f64;

        let hash = measure(iterations, || {
            black_box(gimli24::hash(black_box(&input)));
        });
        let aead = measure(iterations, || {
            black_box(gimli24::encrypt(black_box(&input), b"", &nonce, &key));
        });
        let sha = measure(iterations, || {
            use sha2::Digest;
            black_box(sha2::Sha256::digest(black_box(&input)));
        });
        let b3 = measure(iterations, || {
            black_box(blake3::hash(black_box(&input)));
        });

        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2}",
            format!("{size} B"),
            cpb(hash),
            cpb(aead),
            cpb(sha),
            cpb(b3)
        );
    }
    println!("=====================================================================");
    println!("* Single thread, zeroed input, 32-byte key.");
}

#[cfg(not(target_arch = "x86_64"))]
fn main() {
    eprintln!("bench_cpb requires x86_64 (RDTSC)");
}
