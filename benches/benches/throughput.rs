//! GIMLI-24 Criterion Benchmark
//!
//! Permutation latency, hash and AEAD throughput, with SHA-256 and BLAKE3
//! as hashing baselines.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

const SIZES: [(usize, &str); 6] = [
    (16, "16B"),
    (64, "64B"),
    (256, "256B"),
    (KB, "1KB"),
    (16 * KB, "16KB"),
    (256 * KB, "256KB"),
];

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: PERMUTATION
// =============================================================================

/// Single permutation call, word and byte views.
fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Permutation");
    group.throughput(Throughput::Bytes(gimli24::STATE_SIZE as u64));

    let mut words = [0u32; 12];
    group.bench_function("words", |b| {
        b.iter(|| gimli24::permute(black_box(&mut words)))
    });

    let mut bytes = [0u8; gimli24::STATE_SIZE];
    group.bench_function("bytes", |b| {
        b.iter(|| gimli24::permute_bytes(black_box(&mut bytes)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: HASH
// =============================================================================

/// Hash throughput against SHA-256 and BLAKE3.
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Hash");

    for (size, name) in SIZES {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("GIMLI-24", name), &input, |b, data| {
            b.iter(|| gimli24::hash(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("SHA-256", name), &input, |b, data| {
            use sha2::Digest;
            b.iter(|| sha2::Sha256::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("BLAKE3", name), &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: AEAD
// =============================================================================

/// Seal, open and in-place seal across message sizes.
fn bench_aead(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-AEAD");

    let key = [0x42u8; gimli24::KEY_SIZE];
    let nonce = [0x24u8; gimli24::NONCE_SIZE];
    let ad = random_input(32);

    for (size, name) in SIZES {
        let input = random_input(size);
        let sealed = gimli24::encrypt(&input, &ad, &nonce, &key);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("seal", name), &input, |b, data| {
            b.iter(|| gimli24::encrypt(black_box(data), &ad, &nonce, &key))
        });
        group.bench_with_input(BenchmarkId::new("open", name), &sealed, |b, data| {
            b.iter(|| gimli24::decrypt(black_box(data), &ad, &nonce, &key).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("seal-in-place", name), &input, |b, data| {
            let mut buffer = data.clone();
            b.iter(|| gimli24::encrypt_in_place_detached(black_box(&mut buffer), &ad, &nonce, &key))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: REJECTION
// =============================================================================

/// Cost of rejecting a forged tag, which must match the cost of acceptance.
fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Rejection");

    let key = [0x42u8; gimli24::KEY_SIZE];
    let nonce = [0x24u8; gimli24::NONCE_SIZE];
    let input = random_input(KB);
    let sealed = gimli24::encrypt(&input, b"", &nonce, &key);

    let mut forged_first = sealed.clone();
    forged_first[KB] ^= 1;
    let mut forged_last = sealed.clone();
    forged_last[KB + gimli24::TAG_SIZE - 1] ^= 1;

    group.bench_function("valid", |b| {
        b.iter(|| gimli24::decrypt(black_box(&sealed), b"", &nonce, &key))
    });
    group.bench_function("forged-first-byte", |b| {
        b.iter(|| gimli24::decrypt(black_box(&forged_first), b"", &nonce, &key))
    });
    group.bench_function("forged-last-byte", |b| {
        b.iter(|| gimli24::decrypt(black_box(&forged_last), b"", &nonce, &key))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_permutation,
    bench_hash,
    bench_aead,
    bench_rejection
);
criterion_main!(benches);
