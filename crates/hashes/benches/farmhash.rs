use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::fast::fingerprint128;

fn bench_fingerprint128(c: &mut Criterion) {
  let mut group = c.benchmark_group("farmhash/fingerprint128");
  for &size in &[8usize, 64, 256, 1024, 8192, 65536] {
    let data = vec![0xa5u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| fingerprint128(black_box(data)));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_fingerprint128);
criterion_main!(benches);
