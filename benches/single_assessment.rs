//! Growth assessment benchmark suite.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growth_scorer_rust::{
    lookup, z_score, GrowthAssessor, Indicator, RawMeasurement, ReferenceTables, Sex,
};

fn assessment_benchmarks(c: &mut Criterion) {
    let assessor = GrowthAssessor::new();
    let raw = RawMeasurement::new(24.0, "11.5", 92.0, "female");

    c.bench_function("assess_single", |b| b.iter(|| assessor.assess(black_box(&raw))));

    let tables = ReferenceTables::who_embedded();
    let table = tables
        .table(Indicator::WeightForHeight, Sex::Male)
        .expect("embedded table");

    c.bench_function("lookup_weight_for_height", |b| {
        b.iter(|| lookup(black_box(table), black_box(92.3)))
    });

    let params = lookup(table, 92.3);
    c.bench_function("z_score", |b| b.iter(|| z_score(black_box(13.1), black_box(&params))));

    let batch: Vec<RawMeasurement> = (0..1_000)
        .map(|i| {
            let age = 1.0 + (i % 59) as f64;
            RawMeasurement::new(age, 4.0 + age * 0.2, 55.0 + age, if i % 2 == 0 { "m" } else { "f" })
        })
        .collect();

    c.bench_function("assess_batch_1000", |b| b.iter(|| assessor.assess_batch(black_box(&batch))));
    c.bench_function("assess_batch_parallel_1000", |b| {
        b.iter(|| assessor.assess_batch_parallel(black_box(&batch)))
    });
}

criterion_group!(benches, assessment_benchmarks);
criterion_main!(benches);
