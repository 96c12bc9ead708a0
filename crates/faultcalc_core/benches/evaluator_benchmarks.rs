//! Criterion benchmarks for faultcalc_core
//!
//! Run with: cargo bench -p faultcalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use faultcalc_core::config::ClampPolicy;
use faultcalc_core::evaluate::{Evaluator, compute};
use faultcalc_core::format::format_probability;
use faultcalc_core::model::{ModelParams, RawInputs};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for (l, k) in [(2.0, 3.0), (16.0, 100.0), (200.0, 1_000_000.0)] {
        let params = ModelParams::new(0.1, 0.2, l, k).unwrap();
        group.bench_with_input(
            BenchmarkId::new("pass_through", format!("L{l}_K{k}")),
            &params,
            |b, params| b.iter(|| compute(black_box(params), ClampPolicy::PassThrough)),
        );
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::default();
    let valid = RawInputs::new("0.1", "0.2", "2", "3");
    let invalid = RawInputs::new("0.1", "0.2", "2.5", "3");

    c.bench_function("evaluate_valid", |b| {
        b.iter(|| evaluator.evaluate(black_box(&valid)))
    });
    c.bench_function("evaluate_rejected", |b| {
        b.iter(|| evaluator.evaluate(black_box(&invalid)))
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_probability", |b| {
        b.iter(|| format_probability(black_box(0.006859)))
    });
}

criterion_group!(benches, bench_compute, bench_evaluate, bench_format);
criterion_main!(benches);
