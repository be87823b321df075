//! Benchmarks for fuzzy hashing and similarity scoring.
//!
//! - Hashing pseudo-random buffers of increasing size (block size search included)
//! - Similarity of closely related and of unrelated hashes
//! - The underlying edit distance on hash-sized strings

extern crate bintriage;

use bintriage::{fuzzy_hash, similarity, DistanceConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Deterministic xorshift filler, so every run hashes the same bytes.
fn pseudo_random(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// Hashing throughput across input sizes.
fn bench_fuzzy_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_hash");

    for size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        let data = pseudo_random(size, 0x1234_5678);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(fuzzy_hash(black_box(data))));
        });
    }

    group.finish();
}

/// Similarity of a buffer against a patched copy and against unrelated data.
fn bench_similarity(c: &mut Criterion) {
    let original = pseudo_random(256 * 1024, 0xDEAD_BEEF);
    let mut patched = original.clone();
    patched[100_000..100_512].fill(0);
    let unrelated = pseudo_random(256 * 1024, 0x0BAD_F00D);

    let a = fuzzy_hash(&original);
    let b = fuzzy_hash(&patched);
    let u = fuzzy_hash(&unrelated);

    c.bench_function("similarity_related", |bench| {
        bench.iter(|| black_box(similarity(black_box(&a), black_box(&b))));
    });

    c.bench_function("similarity_unrelated", |bench| {
        bench.iter(|| black_box(similarity(black_box(&a), black_box(&u))));
    });
}

/// Weighted edit distance on two full length hash halves.
fn bench_distance(c: &mut Criterion) {
    let config = DistanceConfig::default();
    let left = fuzzy_hash(&pseudo_random(8 * 1024, 1)).hash1().to_string();
    let right = fuzzy_hash(&pseudo_random(8 * 1024, 2)).hash1().to_string();

    c.bench_function("distance_64", |b| {
        b.iter(|| black_box(config.distance(black_box(&left), black_box(&right))));
    });
}

criterion_group!(benches, bench_fuzzy_hash, bench_similarity, bench_distance);
criterion_main!(benches);
