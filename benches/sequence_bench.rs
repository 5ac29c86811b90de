//! Benchmark for the sequence operations.
//!
//! Compares each operation against the equivalent `std::iter` chain to
//! evaluate the overhead (if any) of passing index and sequence to every
//! callback.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seqops::sequence::{Depth, Nested, every, filter, find, flat, map, reduce};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in SIZES {
        let values: Vec<i64> = (0..size as i64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequence_map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(map(values, |element, _, _| element * 2)));
        });

        group.bench_with_input(BenchmarkId::new("iterator_map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().map(|element| element * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in SIZES {
        let values: Vec<i64> = (0..size as i64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequence_filter", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(values, |element, _, _| element % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("iterator_filter", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.iter().copied().filter(|element| element % 3 == 0).collect::<Vec<_>>())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Folding And Predicate Benchmarks
// =============================================================================

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in SIZES {
        let values: Vec<i64> = (0..size as i64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequence_reduce", size), &values, |bencher, values| {
            bencher.iter(|| black_box(reduce(values, |accumulator, element, _, _| accumulator + element, None)));
        });

        group.bench_with_input(BenchmarkId::new("iterator_reduce", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().copied().reduce(|accumulator, element| accumulator + element)));
        });
    }

    group.finish();
}

fn benchmark_predicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicates");
    let values: Vec<i64> = (0..10_000).collect();

    group.bench_function("sequence_every_full_scan", |bencher| {
        bencher.iter(|| black_box(every(&values, |element, _, _| *element >= 0)));
    });

    group.bench_function("iterator_all_full_scan", |bencher| {
        bencher.iter(|| black_box(values.iter().all(|element| *element >= 0)));
    });

    group.bench_function("sequence_find_last", |bencher| {
        bencher.iter(|| black_box(find(&values, |element, _, _| *element == 9_999)));
    });

    group.bench_function("iterator_find_last", |bencher| {
        bencher.iter(|| black_box(values.iter().find(|element| **element == 9_999)));
    });

    group.finish();
}

// =============================================================================
// Flattening Benchmarks
// =============================================================================

fn build_tree(width: usize, depth: usize) -> Vec<Nested<i64>> {
    (0..width)
        .map(|index| {
            if depth == 0 {
                Nested::Element(index as i64)
            } else {
                Nested::Sequence(build_tree(width, depth - 1))
            }
        })
        .collect()
}

fn benchmark_flat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat");
    let tree = build_tree(10, 3);

    for depth in [Depth::Levels(1), Depth::Levels(2), Depth::Unbounded] {
        group.bench_with_input(BenchmarkId::new("flat", format!("{depth:?}")), &tree, |bencher, tree| {
            bencher.iter(|| black_box(flat(tree, depth)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_reduce,
    benchmark_predicates,
    benchmark_flat
);
criterion_main!(benches);
