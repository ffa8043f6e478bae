//! Criterion benchmarks for the Chudnovsky engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use picalc_core::constants::DEFAULT_TIMEOUT;
use picalc_core::observer::NoOpObserver;
use picalc_core::precision::PrecisionPlan;
use picalc_core::progress::TimeoutCancellationToken;
use picalc_core::range::partition_terms;
use picalc_core::summation::{full_series_sum, range_partial_sum};
use picalc_core::{merge_partial_sums, MemoCache, PiValue};

fn single_threaded(digits: u64, cache: Option<&MemoCache>) -> PiValue {
    let plan = PrecisionPlan::new(digits).unwrap();
    let cancel = TimeoutCancellationToken::new(DEFAULT_TIMEOUT);
    let partial = full_series_sum(&plan, cache, &cancel, &NoOpObserver::new(), 0).unwrap();
    merge_partial_sums(&[partial], &plan).unwrap()
}

fn range_split(digits: u64, splits: usize) -> PiValue {
    let plan = PrecisionPlan::new(digits).unwrap();
    let cancel = TimeoutCancellationToken::new(DEFAULT_TIMEOUT);
    let observer = NoOpObserver::new();
    let partials: Vec<_> = partition_terms(plan.term_count, splits)
        .unwrap()
        .into_iter()
        .enumerate()
        .map(|(i, range)| range_partial_sum(range, &plan, None, &cancel, &observer, i).unwrap())
        .collect();
    merge_partial_sums(&partials, &plan).unwrap()
}

fn bench_paths(c: &mut Criterion) {
    let digit_counts: Vec<u64> = vec![100, 1_000, 5_000];

    let mut group = c.benchmark_group("FullSeries");
    for &digits in &digit_counts {
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &digits| {
            b.iter(|| single_threaded(digits, None));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("RangeSplit4");
    for &digits in &digit_counts {
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &digits| {
            b.iter(|| range_split(digits, 4));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("MemoizedReplay");
    for &digits in &digit_counts {
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &digits| {
            let cache = MemoCache::new();
            single_threaded(digits, Some(&cache));
            b.iter(|| single_threaded(digits, Some(&cache)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
