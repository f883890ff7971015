//! Benchmarks for the pricing kernels.
//!
//! Run with: `cargo bench -p surface_models`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use surface_core::PricingInputs;
use surface_models::{call_greeks, FdEngine, TrinomialPricer};

fn atm() -> PricingInputs {
    PricingInputs {
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        div_yield: 0.0,
        vol: 0.2,
        tau: 1.0,
    }
}

fn bench_closed_form(c: &mut Criterion) {
    let params = atm();
    c.bench_function("black_scholes_call_greeks", |b| {
        b.iter(|| call_greeks(black_box(&params)))
    });
}

fn bench_lattice_price(c: &mut Criterion) {
    let params = atm();
    let mut group = c.benchmark_group("trinomial_price");
    for depth in [50, 100, 200] {
        let pricer = TrinomialPricer::with_depth(depth);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| pricer.price(black_box(&params), true))
        });
    }
    group.finish();
}

fn bench_fd_greeks(c: &mut Criterion) {
    let params = atm();
    let engine = FdEngine::new(TrinomialPricer::new());
    c.bench_function("fd_american_greeks", |b| {
        b.iter(|| engine.greeks(black_box(&params), false))
    });
}

criterion_group!(
    benches,
    bench_closed_form,
    bench_lattice_price,
    bench_fd_greeks
);
criterion_main!(benches);
