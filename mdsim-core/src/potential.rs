//! Pairwise interaction laws
//!
//! A [`PairPotential`] is a pure function of two particle positions and the
//! potential's own parameters. The force accumulator and the integrator only
//! ever see the trait, so another interaction law can be dropped in without
//! touching them.

use crate::engine::Particles;
use crate::error::ConfigError;
use crate::vector::Vector3;

pub trait PairPotential {
    /// Force exerted on a particle at `pos_i` by a distinct particle at `pos_j`
    ///
    /// The two positions must not coincide. A zero separation yields a
    /// non-finite result.
    fn force_between(&self, pos_i: Vector3, pos_j: Vector3) -> Vector3;

    /// Energy of the pair, consistent with [`PairPotential::force_between`]
    fn energy_between(&self, pos_i: Vector3, pos_j: Vector3) -> f64;

    /// Force exerted on particle `i` by particle `j` of the same arena
    ///
    /// A particle never acts on itself: `i == j` gives the zero vector,
    /// whatever the coordinates are.
    fn force(&self, particles: &Particles, i: usize, j: usize) -> Vector3 {
        if i == j {
            return Vector3::ZERO;
        }
        self.force_between(particles[i].pos, particles[j].pos)
    }
}

/// Lennard-Jones style potential, E = ε/2 ((σ/r)^12 - (σ/r)^6)
///
/// The force on i due to j is
/// `F = f0 * (f1 * r^-14 + f2 * r^-8) * (r_i - r_j)` with
/// `f0 = ε/2`, `f1 = 12 σ^12`, `f2 = -6 σ^6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
    sigma6: f64,
    sigma12: f64,
    f0: f64,
    f1: f64,
    f2: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("epsilon", epsilon), ("sigma", sigma)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidPotentialParameter { name, value });
            }
        }

        let sigma2 = sigma * sigma;
        let sigma6 = sigma2 * sigma2 * sigma2;
        let sigma12 = sigma6 * sigma6;

        Ok(Self {
            epsilon,
            sigma,
            sigma6,
            sigma12,
            f0: epsilon / 2.0,
            f1: 12.0 * sigma12,
            f2: -6.0 * sigma6,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Separation at which the pair force vanishes, 2^(1/6) σ
    pub fn equilibrium_distance(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }
}

impl PairPotential for LennardJones {
    fn force_between(&self, pos_i: Vector3, pos_j: Vector3) -> Vector3 {
        let d = pos_i - pos_j;
        let inv_r2 = 1.0 / d.length_squared();
        let inv_r6 = inv_r2 * inv_r2 * inv_r2;
        let inv_r8 = inv_r6 * inv_r2;
        let inv_r14 = inv_r8 * inv_r6;

        d * (self.f0 * (self.f1 * inv_r14 + self.f2 * inv_r8))
    }

    fn energy_between(&self, pos_i: Vector3, pos_j: Vector3) -> f64 {
        let inv_r2 = 1.0 / pos_i.distance_squared(pos_j);
        let inv_r6 = inv_r2 * inv_r2 * inv_r2;

        self.f0 * (self.sigma12 * inv_r6 * inv_r6 - self.sigma6 * inv_r6)
    }
}

/// Total pair energy of the arena, each unordered pair counted once
pub fn potential_energy<P: PairPotential + ?Sized>(particles: &Particles, potential: &P) -> f64 {
    let mut energy = 0.0;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            energy += potential.energy_between(particles[i].pos, particles[j].pos);
        }
    }
    energy
}
