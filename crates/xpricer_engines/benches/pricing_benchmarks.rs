//! Benchmarks comparing the three pricing methods on the same scenario.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xpricer_core::MarketParams;
use xpricer_engines::lattice::CrrPricer;
use xpricer_engines::mc::{MonteCarloPricer, SimulationConfig};
use xpricer_models::BlackScholes;

fn baseline() -> MarketParams {
    MarketParams::new(100.0, 100.0, 30.0 / 365.0, 0.212, 0.015).unwrap()
}

fn bench_black_scholes(c: &mut Criterion) {
    let params = baseline();
    c.bench_function("black_scholes_closed_form", |b| {
        b.iter(|| BlackScholes::new(black_box(params)).price_call())
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let params = baseline();
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);

    for n_paths in [1_000, 10_000] {
        let config = SimulationConfig::builder()
            .n_paths(n_paths)
            .dt(0.001)
            .seed(42)
            .build()
            .unwrap();
        group.bench_function(format!("{}_paths", n_paths), |b| {
            b.iter(|| {
                let mut pricer = MonteCarloPricer::new(config.clone());
                pricer.price_call(black_box(&params)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let params = baseline();
    let mut group = c.benchmark_group("crr_lattice");

    for n_steps in [100, 1_000] {
        let pricer = CrrPricer::new(n_steps).unwrap();
        group.bench_function(format!("{}_steps", n_steps), |b| {
            b.iter(|| pricer.price_call(black_box(&params)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_black_scholes,
    bench_monte_carlo,
    bench_lattice
);
criterion_main!(benches);
