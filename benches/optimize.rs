use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use dev_utils::{build_random_network, get_example_scenario, station_name};
use metro_router::{RouteOptimizer, DEFAULT_WEIGHTS};

fn reference_benchmark(c: &mut Criterion) {
    let (network, origin, weights) = get_example_scenario();
    let optimizer = RouteOptimizer::new(&network);
    c.bench_function("Kochi Blue Line", |b| b.iter(|| optimizer.optimize(black_box(origin), black_box(weights))));
}

fn random_benchmark(c: &mut Criterion) {
    let network = build_random_network(7, 2_000, 6_000);
    let optimizer = RouteOptimizer::new(&network);
    let origin = station_name(0);
    c.bench_function("Random 2000 stations", |b| b.iter(|| optimizer.optimize(black_box(&origin), black_box(DEFAULT_WEIGHTS))));
}

criterion_group!(benches, reference_benchmark, random_benchmark);
criterion_main!(benches);
