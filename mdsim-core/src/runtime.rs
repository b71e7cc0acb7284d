use crate::engine::Particles;
use crate::error::{ConfigError, SimulationError};
use crate::integrator;
use crate::potential::{potential_energy, PairPotential};
use crate::vector::Vector3;
use log::{debug, info};

/// Timestep, step count and trajectory flag of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    timestep: f64,
    n_steps: u64,
    record_trajectory: bool,
}

impl SimulationConfig {
    pub fn new(timestep: f64, n_steps: u64, record_trajectory: bool) -> Result<Self, ConfigError> {
        if !(timestep > 0.0 && timestep.is_finite()) {
            return Err(ConfigError::NonPositiveTimestep(timestep));
        }
        if n_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(Self {
            timestep,
            n_steps,
            record_trajectory,
        })
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    pub fn n_steps(&self) -> u64 {
        self.n_steps
    }

    pub fn record_trajectory(&self) -> bool {
        self.record_trajectory
    }
}

/// Positions of every particle at the start of one step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: u64,
    pub positions: Vec<Vector3>,
}

impl Snapshot {
    pub fn capture(step: u64, particles: &Particles) -> Self {
        Self {
            step,
            positions: particles.positions(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }
}

/// Consumer of per-step snapshots
pub trait TrajectorySink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimulationError>;
}

impl TrajectorySink for Vec<Snapshot> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimulationError> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Sink that drops every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl TrajectorySink for Discard {
    fn record(&mut self, _snapshot: &Snapshot) -> Result<(), SimulationError> {
        Ok(())
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub force_passes: u64,
    pub initial_energy: f64,
    pub final_energy: f64,
}

/// Owns the particle arena and drives the integrator for a fixed step count
#[derive(Debug)]
pub struct Simulation<P> {
    particles: Particles,
    potential: P,
    config: SimulationConfig,
    force_passes: u64,
}

impl<P: PairPotential> Simulation<P> {
    pub fn new(particles: Particles, potential: P, config: SimulationConfig) -> Self {
        Self {
            particles,
            potential,
            config,
            force_passes: 0,
        }
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn into_particles(self) -> Particles {
        self.particles
    }

    pub fn potential(&self) -> &P {
        &self.potential
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of full force evaluations over the arena so far
    pub fn force_passes(&self) -> u64 {
        self.force_passes
    }

    pub fn total_energy(&self) -> f64 {
        self.particles.kinetic_energy() + potential_energy(&self.particles, &self.potential)
    }

    /// Run without recording a trajectory
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        self.run_with(&mut Discard)
    }

    /// Prime forces, then advance exactly `n_steps` steps
    ///
    /// When the trajectory flag is set, `sink` receives a snapshot at the
    /// start of every step, before the position update. The first snapshot
    /// is therefore the initial configuration.
    pub fn run_with<S: TrajectorySink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<RunSummary, SimulationError> {
        let n_steps = self.config.n_steps;
        let dt = self.config.timestep;
        let report_every = (n_steps / 10).max(1);

        let initial_energy = self.total_energy();
        info!(
            "running {} particles for {} steps, dt = {}, E0 = {:.6}",
            self.particles.len(),
            n_steps,
            dt,
            initial_energy
        );

        integrator::prime(&mut self.particles, &self.potential);
        self.force_passes += 1;

        for step in 0..n_steps {
            if self.config.record_trajectory {
                sink.record(&Snapshot::capture(step, &self.particles))?;
            }

            integrator::step(&mut self.particles, &self.potential, dt);
            self.force_passes += 1;

            if (step + 1) % report_every == 0 {
                debug!("step {}/{}", step + 1, n_steps);
            }
        }

        let final_energy = self.total_energy();
        info!(
            "finished {} steps, E = {:.6} (drift {:.3e})",
            n_steps,
            final_energy,
            final_energy - initial_energy
        );

        Ok(RunSummary {
            steps: n_steps,
            force_passes: self.force_passes,
            initial_energy,
            final_energy,
        })
    }
}
