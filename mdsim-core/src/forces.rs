use crate::engine::Particles;
use crate::potential::PairPotential;
use crate::vector::{ForceSum, Vector3};

/// Net force on particle `i` from every particle in the arena
///
/// Reads positions only, so evaluations for different `i` are independent.
pub fn net_force<P: PairPotential + ?Sized>(particles: &Particles, potential: &P, i: usize) -> Vector3 {
    let mut sum = ForceSum::new();
    for j in 0..particles.len() {
        sum.add(potential.force(particles, i, j));
    }
    sum.total()
}

/// Recompute every particle's net force at the current positions
///
/// Overwrites `force` on each particle. Callers that still need the old
/// value must call [`Particles::retire_forces`] first.
pub fn compute_forces<P: PairPotential + ?Sized>(particles: &mut Particles, potential: &P) {
    let forces: Vec<Vector3> = (0..particles.len())
        .map(|i| net_force(particles, potential, i))
        .collect();

    if forces.iter().any(|f| !f.is_finite()) {
        log::warn!("non-finite force encountered; two particles may coincide");
    }

    particles.set_forces(forces);
}
