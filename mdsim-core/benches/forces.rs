use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use mdsim_core::tests::test_helpers::load_cluster;
use mdsim_core::{compute_forces, LennardJones, Particles, Simulation, SimulationConfig, Vector3};

/// Particles on a jittered cubic lattice, spacing well above sigma
fn lattice(rng: &mut StdRng, n: usize) -> Particles {
    let side = (n as f64).cbrt().ceil() as usize;
    let spacing = 2.5;

    let positions: Vec<Vector3> = (0..n)
        .map(|i| {
            let cell = Vector3::new(
                (i % side) as f64,
                ((i / side) % side) as f64,
                (i / (side * side)) as f64,
            );
            let jitter = Vector3::new(
                rng.gen_range(-0.2..0.2),
                rng.gen_range(-0.2..0.2),
                rng.gen_range(-0.2..0.2),
            );
            cell * spacing + jitter
        })
        .collect();
    let velocities = vec![Vector3::ZERO; n];

    Particles::from_state(&positions, &velocities).unwrap()
}

fn bench_compute_forces(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_forces");
    group
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(2));

    let potential = LennardJones::new(100.0, 1.7).unwrap();
    let mut rng = StdRng::seed_from_u64(12345);

    for n in [12, 64, 256, 1024] {
        let mut particles = lattice(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| compute_forces(&mut particles, &potential))
        });
    }

    group.finish();
}

fn bench_cluster_run(c: &mut Criterion) {
    let potential = LennardJones::new(100.0, 1.7).unwrap();
    let config = SimulationConfig::new(0.01, 1_000, false).unwrap();
    let cluster = load_cluster().unwrap();

    c.bench_function("cluster_1000_steps", |bencher| {
        bencher.iter(|| {
            let mut sim = Simulation::new(cluster.clone(), potential, config);
            sim.run().unwrap()
        })
    });
}

criterion_group!(benches, bench_compute_forces, bench_cluster_run);
criterion_main!(benches);
