//! Benchmarks for digest and salted hashing
//!
//! Throughput across algorithms and input sizes, incremental vs one-shot
//! digests, and PBKDF2 cost per iteration preset.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashkit_hashing::{
    DigestHashBuilder, HashBuilder, HashPasses, Pbkdf2HashBuilder, StreamHashBuilder,
};
use tokio::runtime::Runtime;

/// Benchmark digest algorithms with different data sizes
fn benchmark_digest_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_throughput");

    // 1KB, 64KB, 1MB
    let sizes = [1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = vec![0u8; *size];

        for (name, make) in [
            ("SHA256", DigestHashBuilder::sha256 as fn() -> DigestHashBuilder),
            ("SHA512", DigestHashBuilder::sha512),
            ("SHA3_256", DigestHashBuilder::sha3_256),
            ("BLAKE2b", DigestHashBuilder::blake2b),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                let mut builder = make();
                b.iter(|| {
                    let hash = builder.hash(data).expect("digest should succeed");
                    std::hint::black_box(hash);
                });
            });
        }
    }
    group.finish();
}

/// Benchmark incremental updates against a single one-shot call
fn benchmark_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let data = vec![0u8; 1_048_576];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("one_shot_1MB", |b| {
        let mut builder = DigestHashBuilder::sha256();
        b.iter(|| std::hint::black_box(builder.hash(&data).expect("digest should succeed")));
    });

    group.bench_function("chunked_8KB_1MB", |b| {
        let mut builder = DigestHashBuilder::sha256();
        b.iter(|| {
            for chunk in data.chunks(8192) {
                builder.update(chunk);
            }
            std::hint::black_box(builder.finalize());
        });
    });

    group.finish();
}

/// Benchmark PBKDF2 per iteration preset
fn benchmark_pbkdf2(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2");
    group.sample_size(10);

    for passes in [HashPasses::Fast, HashPasses::Moderate, HashPasses::Standard] {
        group.bench_with_input(
            BenchmarkId::new("sha256", passes.iterations()),
            &passes,
            |b, &passes| {
                let mut builder = Pbkdf2HashBuilder::with_passes(vec![7u8; 64], passes)
                    .expect("valid parameters");
                b.iter(|| {
                    std::hint::black_box(builder.hash_str("benchmark password").expect("derive"))
                });
            },
        );
    }

    let rt = Runtime::new().expect("tokio runtime should start");
    group.bench_function("sha256_async_standard", |b| {
        b.iter(|| {
            rt.block_on(async {
                let builder = Pbkdf2HashBuilder::with_passes(vec![7u8; 64], HashPasses::Standard)
                    .expect("valid parameters");
                let hash = builder
                    .hash_async("benchmark password")
                    .await
                    .expect("derive");
                std::hint::black_box(hash);
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_digest_algorithms,
    benchmark_streaming,
    benchmark_pbkdf2
);
criterion_main!(benches);
