use crate::engine::Particles;
use crate::forces::compute_forces;
use crate::potential::PairPotential;

/// Evaluate forces at the initial positions
///
/// Velocity Verlet needs a force before the first position update, so this
/// runs exactly once before the step loop.
pub fn prime<P: PairPotential + ?Sized>(particles: &mut Particles, potential: &P) {
    compute_forces(particles, potential);
}

/// x += v*dt + a*dt^2, using the force of the current position state
pub fn update_positions(particles: &mut Particles, dt: f64) {
    let dt_sq = dt * dt;
    for particle in particles.iter_mut() {
        let accel = particle.acceleration();
        particle.pos += particle.vel * dt + accel * dt_sq;
    }
}

/// v += (a_new + a_prev) * dt/2
pub fn update_velocities(particles: &mut Particles, dt: f64) {
    let half_dt = dt / 2.0;
    for particle in particles.iter_mut() {
        let accel = particle.acceleration();
        let prev_accel = particle.prev_acceleration();
        particle.vel += (accel + prev_accel) * half_dt;
    }
}

/// Advance the arena one velocity Verlet step
///
/// Expects `force` to hold the force at the current positions (from
/// [`prime`] or the previous step). Leaves `force` holding the force at the
/// new positions, ready for the next step. Forces are evaluated exactly once
/// per call.
pub fn step<P: PairPotential + ?Sized>(particles: &mut Particles, potential: &P, dt: f64) {
    update_positions(particles, dt);

    particles.retire_forces();
    compute_forces(particles, potential);

    update_velocities(particles, dt);
}
