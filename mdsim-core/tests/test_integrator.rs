//! Tests for the velocity Verlet update

use mdsim_core::integrator::{prime, step, update_positions, update_velocities};
use mdsim_core::tests::test_helpers::{approx_eq, load_cluster, particle_pair};
use mdsim_core::{LennardJones, PairPotential, Particle, Particles, Vector3};
use std::cell::Cell;

fn lj() -> LennardJones {
    LennardJones::new(100.0, 1.7).unwrap()
}

/// Constant force field, counting how often pairs are evaluated
struct Constant {
    calls: Cell<usize>,
}

impl PairPotential for Constant {
    fn force_between(&self, _pos_i: Vector3, _pos_j: Vector3) -> Vector3 {
        self.calls.set(self.calls.get() + 1);
        Vector3::new(0.0, 0.0, -2.0)
    }

    fn energy_between(&self, _pos_i: Vector3, _pos_j: Vector3) -> f64 {
        0.0
    }
}

#[test]
fn test_position_update_uses_full_dt_squared() {
    let mut particle = Particle::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 2.0).unwrap();
    particle.force = Vector3::new(0.0, 0.0, -4.0);
    let mut particles = Particles::new(vec![particle]);

    update_positions(&mut particles, 0.1);

    // a = F/m = (0, 0, -2); x += v dt + a dt^2
    let pos = particles[0].pos;
    assert!(approx_eq(pos.x, 1.0, 1e-15));
    assert!(approx_eq(pos.y, 0.1, 1e-15));
    assert!(approx_eq(pos.z, -0.02, 1e-15));
}

#[test]
fn test_velocity_update_averages_accelerations() {
    let mut particle = Particle::new(Vector3::ZERO, Vector3::ZERO, 2.0).unwrap();
    particle.prev_force = Vector3::new(2.0, 0.0, 0.0);
    particle.force = Vector3::new(6.0, 0.0, 0.0);
    let mut particles = Particles::new(vec![particle]);

    update_velocities(&mut particles, 0.5);

    // (3 + 1) * 0.25
    assert!(approx_eq(particles[0].vel.x, 1.0, 1e-15));
    assert_eq!(particles[0].vel.y, 0.0);
}

#[test]
fn test_step_evaluates_forces_once() {
    let potential = Constant { calls: Cell::new(0) };
    let mut particles = particle_pair(Vector3::ZERO, Vector3::new(5.0, 0.0, 0.0)).unwrap();

    prime(&mut particles, &potential);
    assert_eq!(potential.calls.get(), 2);

    step(&mut particles, &potential, 0.01);
    assert_eq!(potential.calls.get(), 4);
}

#[test]
fn test_step_carries_new_force_into_next_step() {
    let potential = lj();
    let mut particles = load_cluster().expect("fixture should load");

    prime(&mut particles, &potential);
    step(&mut particles, &potential, 0.01);
    let force_after_first = particles.forces();

    step(&mut particles, &potential, 0.01);

    let retired: Vec<_> = particles.iter().map(|p| p.prev_force).collect();
    assert_eq!(retired, force_after_first);
}

#[test]
fn test_two_particles_move_symmetrically() {
    let potential = lj();
    let start = [Vector3::ZERO, Vector3::new(3.0, 0.0, 0.0)];
    let mut particles = particle_pair(start[0], start[1]).unwrap();

    prime(&mut particles, &potential);
    step(&mut particles, &potential, 0.01);

    let d0 = particles[0].pos - start[0];
    let d1 = particles[1].pos - start[1];

    assert!(d0.x != 0.0);
    assert!(approx_eq(d0.x, -d1.x, 1e-15));
    assert_eq!(d0.y, 0.0);
    assert_eq!(d0.z, 0.0);
    assert_eq!(d1.y, 0.0);
    assert_eq!(d1.z, 0.0);

    // Separation 3 is beyond the minimum, so the pair closes in
    assert!(approx_eq(d0.x, 3.091790683545393e-4, 1e-15));
    assert!(approx_eq(particles[0].vel.x, 3.0938871207691135e-2, 1e-14));
    assert!(approx_eq(particles[1].vel.x, -3.0938871207691135e-2, 1e-14));
}

#[test]
fn test_one_step_is_deterministic() {
    let potential = lj();
    let run = || {
        let mut particles = load_cluster().expect("fixture should load");
        prime(&mut particles, &potential);
        step(&mut particles, &potential, 0.01);
        particles
    };

    let a = run();
    let b = run();

    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
}

#[test]
fn test_retire_forces_keeps_every_particle_in_step() {
    let potential = lj();
    let mut particles = load_cluster().expect("fixture should load");

    prime(&mut particles, &potential);
    let primed = particles.forces();
    step(&mut particles, &potential, 0.01);

    // Every particle, not a prefix, carries the primed force as previous
    assert_eq!(particles.len(), primed.len());
    for (particle, force) in particles.iter().zip(&primed) {
        assert_eq!(particle.prev_force, *force);
        assert_ne!(particle.force, *force);
    }
}
