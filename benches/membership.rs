//! Compares the membership strategies on random integer haystacks.
//!
//! Closure-form lookups are built once outside the timed loop, so their
//! numbers are per query. Direct forms pay for the sort or the set on every
//! iteration.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use haystack::{
    contains, contains_int, set_contains_int, set_lookup_int, sorted_contains_int,
    sorted_lookup_int, Value,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 1_000, 1_000_000];

fn random_haystack_and_needle(size: usize) -> (Vec<i64>, i64) {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let haystack = (0..size).map(|_| rng.gen()).collect();
    (haystack, rng.gen())
}

fn batch_size_for(size: usize) -> BatchSize {
    if size < 1_000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_contains");
    for size in SIZES {
        let (haystack, needle) = random_haystack_and_needle(size);
        let haystack = Value::from(haystack);
        let needle = Value::from(needle);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(contains(black_box(&haystack), black_box(&needle))))
        });
    }
    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_int");
    for size in SIZES {
        let (haystack, needle) = random_haystack_and_needle(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(contains_int(black_box(&haystack), black_box(needle))))
        });
    }
    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_lookup_int");
    for size in SIZES {
        let (mut haystack, needle) = random_haystack_and_needle(size);
        let lookup = sorted_lookup_int(&mut haystack);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(lookup(black_box(needle))))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sorted_contains_int");
    for size in SIZES {
        let (haystack, needle) = random_haystack_and_needle(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || haystack.clone(),
                |mut haystack| black_box(sorted_contains_int(&mut haystack, black_box(needle))),
                batch_size_for(size),
            )
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_lookup_int");
    for size in SIZES {
        let (haystack, needle) = random_haystack_and_needle(size);
        let lookup = set_lookup_int(&haystack);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(lookup(black_box(needle))))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("set_contains_int");
    for size in SIZES {
        let (haystack, needle) = random_haystack_and_needle(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(set_contains_int(black_box(&haystack), black_box(needle))))
        });
    }
    group.finish();
}

criterion_group!(
name = membership;
config = Criterion::default().sample_size(20);
targets = bench_dynamic, bench_linear, bench_sorted, bench_set
);
criterion_main!(membership);
