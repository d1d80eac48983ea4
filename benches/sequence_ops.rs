//! Benchmarks for the core sequence operations over growing inputs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use u_seqops::{every, filter, flat, join, map, nested, reduce, Depth, Nested};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversals");

    for size in SIZES {
        let data: Vec<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("map", size), &data, |b, data| {
            b.iter(|| map(black_box(data), |x, i, _| x + i as i64))
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &data, |b, data| {
            b.iter(|| filter(black_box(data), |x, _, _| x % 2 == 0))
        });
        group.bench_with_input(BenchmarkId::new("reduce", size), &data, |b, data| {
            b.iter(|| reduce(black_box(data), |acc, x, _, _| acc + x, None))
        });
        group.bench_with_input(BenchmarkId::new("every", size), &data, |b, data| {
            b.iter(|| every(black_box(data), |x, _, _| *x >= 0))
        });
    }

    group.finish();
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");

    for size in SIZES {
        let data: Vec<Nested<i64>> = (0..size as i64)
            .map(|i| Nested::List(nested![i, [(i + 1), [(i + 2)]]]))
            .collect();

        group.bench_with_input(BenchmarkId::new("default", size), &data, |b, data| {
            b.iter(|| flat(black_box(data), None))
        });
        group.bench_with_input(BenchmarkId::new("unbounded", size), &data, |b, data| {
            b.iter(|| flat(black_box(data), Some(Depth::Unbounded)))
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in SIZES {
        let data: Vec<u32> = (0..size as u32).collect();
        group.bench_with_input(BenchmarkId::new("default_separator", size), &data, |b, data| {
            b.iter(|| join(black_box(data), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversals, bench_flat, bench_join);
criterion_main!(benches);
