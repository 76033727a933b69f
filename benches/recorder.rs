//! Benchmarks for trace recording.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use quicksort_viz::{schema::SequenceGenerator, trace::record_trace};

fn bench_record_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_random");

    for size in [16, 40, 128, 256] {
        let values = SequenceGenerator::new(42, 40, 400).generate(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| record_trace(black_box(values)));
        });
    }

    group.finish();
}

fn bench_record_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sorted");

    // Already-sorted input is the quadratic case for last-element pivots.
    for size in [16, 40, 128] {
        let values: Vec<u32> = (1..=size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| record_trace(black_box(values)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_random, bench_record_sorted);
criterion_main!(benches);
