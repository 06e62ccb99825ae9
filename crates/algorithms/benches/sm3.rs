//! Benchmarks for the SM3 hash
//!
//! One-shot hashing across message sizes and incremental absorption in
//! small chunks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smcrypt_algorithms::hash::{HashFunction, Sm3};

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm3_digest");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [64usize, 1024, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill(&mut data[..]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(Sm3::digest(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm3_incremental");
    let data = vec![0x61u8; 4096];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("chunks_of_13", |b| {
        b.iter(|| {
            let mut hasher = Sm3::new();
            for chunk in data.chunks(13) {
                hasher.update(black_box(chunk)).unwrap();
            }
            black_box(hasher.digest_reset());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_digest, bench_incremental);
criterion_main!(benches);
