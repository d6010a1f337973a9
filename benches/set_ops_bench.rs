//! Set construction and membership benchmark.
//!
//! Compares the three set implementations on bulk insertion and on
//! membership probes over pre-filled sets.
//!
//! Pre-generated Vecs are reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unica::set::{ChainedHashSet, InsertionOrderedSet, SortedVecSet};

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates a shuffled-ish Vec for each size to be reused in
/// benchmarks; a fixed stride keeps insertion order away from sorted order.
fn generate_elements(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_insert");

    for size in SIZES {
        let base_vec = generate_elements(size);

        group.bench_with_input(BenchmarkId::new("chained", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(elements.into_iter().collect::<ChainedHashSet<i32>>()),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("ordered", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(elements.into_iter().collect::<InsertionOrderedSet<i32>>()),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(elements.into_iter().collect::<SortedVecSet<i32>>()),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in SIZES {
        let elements = generate_elements(size);
        let chained: ChainedHashSet<i32> = elements.iter().copied().collect();
        let ordered: InsertionOrderedSet<i32> = elements.iter().copied().collect();
        let sorted: SortedVecSet<i32> = elements.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("chained", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size).filter(|probe| chained.contains(black_box(probe))).count()
            });
        });

        group.bench_with_input(BenchmarkId::new("ordered", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size).filter(|probe| ordered.contains(black_box(probe))).count()
            });
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size).filter(|probe| sorted.contains(black_box(probe))).count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_contains);
criterion_main!(benches);
