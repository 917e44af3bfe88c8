use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relay::prelude::*;

fn field() -> Pmf {
    let speeds: Vec<f64> = (0..400).map(|i| 4.0 + 0.1 * (i % 80) as f64).collect();
    Pmf::from_values(&speeds).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let pmf = field();
    c.bench_function("bias_80", |b| b.iter(|| pmf.bias(black_box(7.5))));
}

pub fn cdf_benchmark(c: &mut Criterion) {
    let pmf = field();
    c.bench_function("cdf_80", |b| b.iter(|| pmf.cdf()));
}

criterion_group!(benches, criterion_benchmark, cdf_benchmark);
criterion_main!(benches);
