use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use idxsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Merge sort is O(N log² N) swaps

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("idxsort::quick_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| quick_sort(black_box(&mut data), 0, count - 1),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("idxsort::merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort(black_box(&mut data), 0, count),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
