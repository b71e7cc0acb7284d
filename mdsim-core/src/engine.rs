use crate::error::ConfigError;
use crate::parser::ParseError;
use crate::vector::Vector3;
use std::ops::Index;

/// A point particle in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vector3,
    pub vel: Vector3,
    mass: f64,
    /// Net force at the current positions
    pub force: Vector3,
    /// Net force of the previous position state
    pub prev_force: Vector3,
}

impl Particle {
    /// Particle of unit mass at rest
    pub fn at(pos: Vector3) -> Self {
        Self {
            pos,
            vel: Vector3::ZERO,
            mass: 1.0,
            force: Vector3::ZERO,
            prev_force: Vector3::ZERO,
        }
    }

    pub fn new(pos: Vector3, vel: Vector3, mass: f64) -> Result<Self, ConfigError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        Ok(Self {
            vel,
            mass,
            ..Self::at(pos)
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Acceleration under the current force, a = F/m
    pub fn acceleration(&self) -> Vector3 {
        self.force / self.mass
    }

    /// Acceleration under the previous step's force
    pub fn prev_acceleration(&self) -> Vector3 {
        self.prev_force / self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Fixed-size arena of particles addressed by index
///
/// The length is set when the arena is built and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Build an arena of unit-mass particles from positions and velocities
    ///
    /// Velocities beyond the number of positions are ignored; fewer
    /// velocities than positions is an error.
    pub fn from_state(positions: &[Vector3], velocities: &[Vector3]) -> Result<Self, ParseError> {
        if velocities.len() < positions.len() {
            return Err(ParseError::MissingRecords {
                expected: positions.len(),
                found: velocities.len(),
            });
        }
        let particles = positions
            .iter()
            .zip(velocities)
            .map(|(&pos, &vel)| Particle { vel, ..Particle::at(pos) })
            .collect();
        Ok(Self { particles })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn positions(&self) -> Vec<Vector3> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn velocities(&self) -> Vec<Vector3> {
        self.particles.iter().map(|p| p.vel).collect()
    }

    pub fn forces(&self) -> Vec<Vector3> {
        self.particles.iter().map(|p| p.force).collect()
    }

    /// Move every current force into the previous-force slot
    pub fn retire_forces(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.prev_force = particle.force;
        }
    }

    /// Overwrite every particle's current force
    ///
    /// `forces` must hold exactly one entry per particle.
    pub(crate) fn set_forces(&mut self, forces: Vec<Vector3>) {
        assert_eq!(forces.len(), self.particles.len(), "one force per particle");
        for (particle, force) in self.particles.iter_mut().zip(forces) {
            particle.force = force;
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}

impl Index<usize> for Particles {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}
