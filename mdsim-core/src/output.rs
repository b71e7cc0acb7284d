//! Trajectory and final-state writers, and comparison against reference data

use crate::engine::Particles;
use crate::error::SimulationError;
use crate::runtime::{Snapshot, TrajectorySink};
use crate::vector::Vector3;
use std::io::Write;

/// Writes one XYZ frame per snapshot
///
/// Each frame is the particle count, an empty comment line, then one
/// `H  x  y  z` line per particle with five decimals.
pub struct XyzTrajectory<W: Write> {
    writer: W,
    frames: u64,
}

impl<W: Write> XyzTrajectory<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrajectorySink for XyzTrajectory<W> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimulationError> {
        writeln!(self.writer, "{}", snapshot.particle_count())?;
        writeln!(self.writer)?;
        for pos in &snapshot.positions {
            writeln!(self.writer, "H  {:.5}  {:.5}  {:.5}", pos.x, pos.y, pos.z)?;
        }
        self.frames += 1;
        Ok(())
    }
}

fn write_vectors<W: Write>(
    mut writer: W,
    vectors: impl Iterator<Item = Vector3>,
) -> std::io::Result<()> {
    for v in vectors {
        writeln!(writer, "{:.5}  {:.5}  {:.5}", v.x, v.y, v.z)?;
    }
    writer.flush()
}

/// One `x  y  z` line per particle, five decimals
pub fn write_positions<W: Write>(writer: W, particles: &Particles) -> std::io::Result<()> {
    write_vectors(writer, particles.iter().map(|p| p.pos))
}

pub fn write_velocities<W: Write>(writer: W, particles: &Particles) -> std::io::Result<()> {
    write_vectors(writer, particles.iter().map(|p| p.vel))
}

/// A coordinate that differs from the reference by more than the tolerance
#[derive(Debug, Clone, PartialEq)]
pub struct Deviation {
    pub particle: usize,
    pub axis: usize,
    pub observed: f64,
    pub expected: f64,
}

/// Result of comparing observed positions against reference positions
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub max_deviation: f64,
    pub failures: Vec<Deviation>,
    pub count_mismatch: Option<(usize, usize)>,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.count_mismatch.is_none()
    }
}

/// Compare coordinates one by one within an absolute tolerance
pub fn compare_positions(observed: &[Vector3], expected: &[Vector3], tolerance: f64) -> Comparison {
    let count_mismatch =
        (observed.len() != expected.len()).then_some((observed.len(), expected.len()));

    let mut max_deviation: f64 = 0.0;
    let mut failures = Vec::new();

    for (particle, (obs, exp)) in observed.iter().zip(expected).enumerate() {
        for axis in 0..3 {
            let diff = (obs[axis] - exp[axis]).abs();
            // NaN never passes
            if !(diff <= tolerance) {
                failures.push(Deviation {
                    particle,
                    axis,
                    observed: obs[axis],
                    expected: exp[axis],
                });
            }
            max_deviation = max_deviation.max(diff);
        }
    }

    Comparison {
        max_deviation,
        failures,
        count_mismatch,
    }
}
