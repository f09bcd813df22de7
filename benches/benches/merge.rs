//! Benchmarks for three-way alignment and merge

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linediff::{ComparisonManager, ComparisonPolicy, LineStore};

fn versions(lines: usize) -> [LineStore; 3] {
    let base: Vec<String> = (0..lines).map(|i| format!("line {i}")).collect();
    let left: Vec<String> = base
        .iter()
        .enumerate()
        .map(|(i, line)| if i % 40 == 0 { format!("{line} left") } else { line.clone() })
        .collect();
    let right: Vec<String> = base
        .iter()
        .enumerate()
        .map(|(i, line)| if i % 40 == 20 { format!("{line} right") } else { line.clone() })
        .collect();
    [left, base, right].map(LineStore::from_lines)
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge/non_overlapping");
    let manager = ComparisonManager::default();

    for size in [100usize, 1_000, 10_000] {
        let [left, base, right] = versions(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| {
                manager.merge(
                    black_box(&left),
                    black_box(&base),
                    black_box(&right),
                    ComparisonPolicy::Exact,
                )
            });
        });
    }

    group.finish();
}

fn bench_compare_three_way(c: &mut Criterion) {
    let manager = ComparisonManager::default();
    let [left, base, right] = versions(2_000);

    c.bench_function("merge/compare_three_way", |bench| {
        bench.iter(|| {
            manager.compare_three_way(
                black_box(&left),
                black_box(&base),
                black_box(&right),
                ComparisonPolicy::Exact,
            )
        });
    });
}

criterion_group!(benches, bench_merge, bench_compare_three_way);
criterion_main!(benches);
