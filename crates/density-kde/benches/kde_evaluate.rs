//! KDE evaluation cost against sample size
//!
//! Run with: cargo bench -p density-kde --bench kde_evaluate
//! Compare with: cargo bench -p density-kde --bench kde_evaluate --features parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use density_kde::{nice_ticks, silverman_bandwidth, KernelDensity};
use density_sampling::SampleGenerator;

fn bench_evaluate(c: &mut Criterion) {
    let grid = nice_ticks(-3.0, 6.0, 600);
    let kde = KernelDensity::new();

    let mut group = c.benchmark_group("kde_evaluate");
    for rounds in [100, 1_000, 5_000] {
        let data = SampleGenerator::seeded(42).generate(rounds);
        group.bench_with_input(BenchmarkId::from_parameter(data.len()), &data, |b, data| {
            b.iter(|| kde.evaluate(black_box(data.samples()), black_box(&grid)))
        });
    }
    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let data = SampleGenerator::seeded(42).generate(1_000);
    c.bench_function("silverman_bandwidth_3000", |b| {
        b.iter(|| silverman_bandwidth(black_box(data.samples())))
    });
}

criterion_group!(benches, bench_evaluate, bench_bandwidth);
criterion_main!(benches);
