//! Benchmark for hofkit pipelines.
//!
//! Compares a typed `join_fns!` pipeline, a variadic `join_fns` pipeline and
//! a hand-written iterator chain doing the same filter-then-map work.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hofkit::sequence::{filter_seq, map_seq};
use hofkit::variadic::{Function, join_fns};
use hofkit::{bind_args, cycle_args, join_fns};
use std::hint::black_box;

// =============================================================================
// Filter then Map
// =============================================================================

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map");

    for size in [100, 1_000, 10_000] {
        let data: Vec<i64> = (0..size).collect();

        // Typed pipeline
        group.bench_with_input(BenchmarkId::new("join_fns_macro", size), &data, |bencher, data| {
            let pipeline = join_fns!(
                bind_args!(cycle_args!(filter_seq, __, __), |n: &i64| n % 3 == 0, __),
                bind_args!(cycle_args!(map_seq, __, __), |n: i64| n * 2, __),
            );
            bencher.iter(|| black_box(pipeline(data.clone())));
        });

        // Variadic pipeline over whole sequences
        group.bench_with_input(BenchmarkId::new("variadic_join_fns", size), &data, |bencher, data| {
            let keep = Function::<Vec<i64>, ()>::from_fn1(|numbers| {
                Ok(filter_seq(numbers, |n: &i64| n % 3 == 0))
            });
            let double = Function::<Vec<i64>, ()>::from_fn1(|numbers| {
                Ok(map_seq(numbers, |n: i64| n * 2))
            });
            let pipeline = join_fns(keep, [double]);
            bencher.iter(|| black_box(pipeline.call(vec![data.clone()])));
        });

        // Hand-written iterator chain
        group.bench_with_input(BenchmarkId::new("iterator_chain", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<i64> = data
                    .clone()
                    .into_iter()
                    .filter(|n| n % 3 == 0)
                    .map(|n| n * 2)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Partial Application
// =============================================================================

fn add3(a: i64, b: i64, c: i64) -> i64 {
    a + b + c
}

fn benchmark_bind_args(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_args");

    group.bench_function("macro", |bencher| {
        let bound = bind_args!(add3, 1, 2, __);
        bencher.iter(|| black_box(bound(black_box(3))));
    });

    group.bench_function("variadic", |bencher| {
        let bound = Function::<i64, ()>::from_fn3(|a, b, c| Ok(add3(a, b, c))).bind_args([1, 2]);
        bencher.iter(|| black_box(bound.call(vec![black_box(3)])));
    });

    group.finish();
}

criterion_group!(benches, benchmark_filter_map, benchmark_bind_args);
criterion_main!(benches);
