//! Reading initial particle state from text
//!
//! Both positions and velocities use one record per line:
//!
//! ```text
//! x0  y0  z0
//! x1  y1  z1
//! ```
//!
//! Leading blank lines are skipped. The first blank line after a record ends
//! the data; anything after it is ignored.

use crate::engine::Particles;
use crate::error::SimulationError;
use crate::vector::{from_components, Vector3};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: could not convert '{text}' to x, y, z components")]
    MalformedRecord { line: usize, text: String },

    #[error("expected {expected} records, found only {found}")]
    MissingRecords { expected: usize, found: usize },

    #[error("no particle records found")]
    Empty,
}

/// Parse every position record; the particle count is the number of records
pub fn parse_positions(source: &str) -> Result<Vec<Vector3>, ParseError> {
    let positions = parse_records(source, None)?;
    if positions.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(positions)
}

/// Parse the first `count` velocity records
///
/// Extra records are ignored. Fewer than `count` is an error.
pub fn parse_velocities(source: &str, count: usize) -> Result<Vec<Vector3>, ParseError> {
    let velocities = parse_records(source, Some(count))?;
    if velocities.len() < count {
        return Err(ParseError::MissingRecords {
            expected: count,
            found: velocities.len(),
        });
    }
    Ok(velocities)
}

fn parse_records(source: &str, limit: Option<usize>) -> Result<Vec<Vector3>, ParseError> {
    let mut records = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if limit.is_some_and(|limit| records.len() >= limit) {
            break;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            if records.is_empty() {
                continue;
            }
            break;
        }

        let record = from_components(&fields).ok_or_else(|| ParseError::MalformedRecord {
            line: idx + 1,
            text: line.trim().to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Build unit-mass particles from a positions string and a velocities string
pub fn parse_particles(positions: &str, velocities: &str) -> Result<Particles, ParseError> {
    let positions = parse_positions(positions)?;
    let velocities = parse_velocities(velocities, positions.len())?;
    Particles::from_state(&positions, &velocities)
}

/// Read positions and velocities files into a particle arena
pub fn load_particles(
    positions_path: impl AsRef<Path>,
    velocities_path: impl AsRef<Path>,
) -> Result<Particles, SimulationError> {
    let positions = fs::read_to_string(positions_path)?;
    let velocities = fs::read_to_string(velocities_path)?;
    Ok(parse_particles(&positions, &velocities)?)
}
