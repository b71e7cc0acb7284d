use crate::parser::ParseError;
use thiserror::Error;

/// Invalid run configuration, rejected before any step executes
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("timestep must be positive and finite, got {0}")]
    NonPositiveTimestep(f64),

    #[error("step count must be positive, got 0")]
    ZeroSteps,

    #[error("particle mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("potential parameter '{name}' must be positive and finite, got {value}")]
    InvalidPotentialParameter { name: &'static str, value: f64 },
}

/// Any failure that stops a run
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed initial state: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
