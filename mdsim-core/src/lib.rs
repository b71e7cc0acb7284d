pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod output;
pub mod parser;
pub mod potential;
pub mod runtime;
pub mod vector;

pub use engine::{Particle, Particles};
pub use error::{ConfigError, SimulationError};
pub use forces::{compute_forces, net_force};
pub use output::{compare_positions, write_positions, write_velocities, Comparison, XyzTrajectory};
pub use parser::{load_particles, parse_particles, parse_positions, parse_velocities, ParseError};
pub use potential::{potential_energy, LennardJones, PairPotential};
pub use runtime::{RunSummary, Simulation, SimulationConfig, Snapshot, TrajectorySink};
pub use vector::{ForceSum, Vector3};
