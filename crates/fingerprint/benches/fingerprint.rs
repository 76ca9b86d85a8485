//! Fingerprint throughput benchmarks.
//!
//! Run: `cargo bench -p fingerprint`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fingerprint::{std32, std64};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 4096, 65536, 1048576];

/// Benchmark one-shot fingerprinting with the standard 64-bit generator.
fn bench_oneshot(c: &mut Criterion) {
  let mut group = c.benchmark_group("fingerprint/std64");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(std64().fingerprint(data)));
    });
  }

  group.finish();
}

/// Benchmark chunked streaming through the hasher.
fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("fingerprint/streaming");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut hasher = std64().hasher();
        for chunk in data.chunks(1024) {
          hasher.update(chunk);
        }
        core::hint::black_box(hasher.finalize())
      });
    });
  }

  group.finish();
}

/// Benchmark the 32-bit generator for comparison.
fn bench_std32(c: &mut Criterion) {
  let mut group = c.benchmark_group("fingerprint/std32");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(std32().fingerprint(data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming, bench_std32);
criterion_main!(benches);
