//! Benchmarks for the two-way line comparison pipeline
//!
//! Performance-critical paths:
//! - `compare`: Myers search plus correction and optimization
//! - smart blending, which runs the search once per anchor gap

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linediff::{ComparisonPolicy, ComparisonSettings, LineStore, compare};

/// Source-like document with a blank line and a closing brace every few lines.
fn document(lines: usize) -> Vec<String> {
    (0..lines)
        .map(|i| match i % 5 {
            3 => "}".to_string(),
            4 => String::new(),
            _ => format!("    let value_{i} = compute({i});"),
        })
        .collect()
}

/// Copy of `lines` with every `stride`-th line edited.
fn edited(lines: &[String], stride: usize) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == 0 {
                format!("{line} // edited")
            } else {
                line.clone()
            }
        })
        .collect()
}

fn bench_compare_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/sparse_edits");
    let settings = ComparisonSettings::default();

    for size in [100usize, 1_000, 10_000] {
        let a = document(size);
        let b = edited(&a, 50);
        let (a, b) = (LineStore::from_lines(&a), LineStore::from_lines(&b));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| compare(black_box(&a), black_box(&b), ComparisonPolicy::Exact, &settings));
        });
    }

    group.finish();
}

fn bench_compare_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/policies");
    let settings = ComparisonSettings::default();
    let a = document(2_000);
    let b: Vec<String> = edited(&a, 20)
        .into_iter()
        .map(|line| line.replace("    ", "\t"))
        .collect();
    let (a, b) = (LineStore::from_lines(&a), LineStore::from_lines(&b));

    for policy in ComparisonPolicy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |bench, &policy| {
            bench.iter(|| compare(black_box(&a), black_box(&b), policy, &settings));
        });
    }

    group.finish();
}

fn bench_smart_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/smart_blend");
    let a = document(2_000);
    let b = edited(&a, 10);
    let (a, b) = (LineStore::from_lines(&a), LineStore::from_lines(&b));

    for smart_blend in [false, true] {
        let settings = ComparisonSettings {
            smart_blend,
            ..ComparisonSettings::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(smart_blend),
            &smart_blend,
            |bench, _| {
                bench.iter(|| compare(black_box(&a), black_box(&b), ComparisonPolicy::Exact, &settings));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compare_sizes,
    bench_compare_policies,
    bench_smart_blend
);
criterion_main!(benches);
