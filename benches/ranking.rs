//! Benchmarks for subset ranking and navigation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use subrank::{ksubsets, Subset};

fn half_subset(n: u32) -> Subset<u32> {
    let superset: Vec<u32> = (0..n).collect();
    let elements: Vec<u32> = (0..n).filter(|i| i % 2 == 1).collect();
    Subset::new(elements, superset).unwrap()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for n in [16u32, 64, 127] {
        let subset = half_subset(n);

        group.throughput(Throughput::Elements(n as u64));
        // Clone first so every iteration starts with empty rank caches.
        group.bench_with_input(BenchmarkId::new("binary", n), &n, |bench, _| {
            bench.iter(|| black_box(subset.clone()).rank_binary())
        });
        group.bench_with_input(BenchmarkId::new("lexicographic", n), &n, |bench, _| {
            bench.iter(|| black_box(subset.clone()).rank_lexicographic())
        });
        group.bench_with_input(BenchmarkId::new("graycode", n), &n, |bench, _| {
            bench.iter(|| black_box(subset.clone()).rank_graycode())
        });
    }

    group.finish();
}

fn bench_unrank(c: &mut Criterion) {
    let mut group = c.benchmark_group("unrank");

    for n in [16u32, 64, 127] {
        let superset: Vec<u32> = (0..n).collect();
        let rank = (1u128 << n) / 3;

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("binary", n), &n, |bench, _| {
            bench.iter(|| Subset::unrank_binary(black_box(rank), superset.clone()))
        });
        group.bench_with_input(BenchmarkId::new("graycode", n), &n, |bench, _| {
            bench.iter(|| Subset::unrank_graycode(black_box(rank), superset.clone()))
        });
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    let steps = 256u64;

    for n in [16u32, 64] {
        let start = half_subset(n);

        group.throughput(Throughput::Elements(steps));
        group.bench_with_input(BenchmarkId::new("next_binary", n), &n, |bench, _| {
            bench.iter(|| {
                let mut current = start.clone();
                for _ in 0..steps {
                    current = current.next_binary();
                }
                current
            })
        });
        group.bench_with_input(BenchmarkId::new("next_graycode", n), &n, |bench, _| {
            bench.iter(|| {
                let mut current = start.clone();
                for _ in 0..steps {
                    current = current.next_graycode();
                }
                current
            })
        });
    }

    group.finish();
}

fn bench_ksubsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("ksubsets");
    let superset: Vec<u32> = (0..20).collect();

    for k in [2usize, 5, 10] {
        group.bench_with_input(BenchmarkId::new("count", k), &k, |bench, &k| {
            bench.iter(|| ksubsets(black_box(&superset), k).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank, bench_unrank, bench_walk, bench_ksubsets);
criterion_main!(benches);
