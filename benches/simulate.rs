//! Replay throughput for both policies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{simulate, PageId, PolicyKind};

/// Deterministic pseudo-random reference string with some locality.
fn workload(len: usize, alphabet: u32) -> Vec<PageId> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            PageId::new((state % alphabet as u64) as u32)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let input = workload(10_000, 64);
    let mut group = c.benchmark_group("simulate");

    for frames in [4usize, 16, 48] {
        for kind in PolicyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), frames),
                &frames,
                |b, &frames| b.iter(|| simulate(kind, black_box(&input), frames)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
