//! Criterion benchmarks for u-circuit.
//!
//! Uses random planar instances to measure the move generator and the
//! annealing loop independent of any benchmark file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_circuit::anneal::{AnnealConfig, Annealer, ReductionStrategy};
use u_circuit::cost::DistanceMatrix;
use u_circuit::moves::{AllEligible, EdgeExchange, NeighborhoodSelector};
use u_circuit::reindex::Reindexer;
use u_circuit::tour::{Circuit, Route};

// ===========================================================================
// Instances
// ===========================================================================

fn random_points(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn identity_tour(n: usize) -> Circuit {
    Route::new((0..n).collect())
        .expect("identity route is valid")
        .to_circuit()
        .expect("identity route closes into a tour")
}

/// Splits customers `1..=customers` evenly over `vehicles`.
fn even_split(vehicles: usize, customers: usize) -> Vec<Vec<usize>> {
    let mut routes = vec![Vec::new(); vehicles];
    for id in 1..=customers {
        routes[(id - 1) % vehicles].push(id);
    }
    routes
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_edge_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_exchange");
    for &n in &[50, 200, 1000] {
        let circuit = identity_tour(n);
        let hood = AllEligible.select(circuit.successors());
        let generator = EdgeExchange::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let proposal = generator.propose(black_box(&circuit), &hood, &mut rng);
                black_box(proposal)
            })
        });
    }
    group.finish();
}

fn bench_anneal_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_tsp");
    group.sample_size(10);
    for &n in &[20, 50, 100] {
        let matrix = DistanceMatrix::from_points(&random_points(n, 7));
        let config = AnnealConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(0.01)
            .with_reduction(ReductionStrategy::Geometric)
            .with_alpha(1.05)
            .with_max_iterations(2000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let result = Annealer::new(identity_tour(n), &matrix, &AllEligible, config.clone())
                    .and_then(|annealer| annealer.run());
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_anneal_vrp(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_vrp");
    group.sample_size(10);
    for (vehicles, customers) in [(3usize, 30usize), (10, 100)] {
        let reindexer = Reindexer::new(vehicles, customers);
        let matrix = reindexer
            .distance_matrix(&random_points(customers + 1, 11))
            .expect("coordinate count matches");
        let initial = reindexer
            .to_circuit(&even_split(vehicles, customers))
            .expect("even split is a valid solution");
        let mask = reindexer.depot_mask();
        let config = AnnealConfig::default()
            .with_initial_temperature(50.0)
            .with_final_temperature(0.01)
            .with_reduction(ReductionStrategy::SlowDecrease)
            .with_beta(0.01)
            .with_max_iterations(2000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("v{vehicles}_c{customers}"), customers),
            &customers,
            |b, _| {
                b.iter(|| {
                    let result = Annealer::new(initial.clone(), &matrix, &mask, config.clone())
                        .and_then(|annealer| annealer.run());
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_edge_exchange, bench_anneal_tsp, bench_anneal_vrp);
criterion_main!(benches);
