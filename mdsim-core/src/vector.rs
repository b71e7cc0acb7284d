//! Three-component vector arithmetic
//!
//! Positions, velocities and forces are plain `Copy` values. The only place
//! a vector is mutated in place is [`ForceSum`], which the force accumulator
//! uses while summing pair contributions.

use glam::DVec3;

/// Double precision 3D vector used for every particle quantity
pub type Vector3 = DVec3;

/// Running sum of pair forces acting on one particle
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceSum {
    total: Vector3,
}

impl ForceSum {
    pub fn new() -> Self {
        Self {
            total: Vector3::ZERO,
        }
    }

    /// Add one contribution to the running total
    pub fn add(&mut self, force: Vector3) {
        self.total += force;
    }

    pub fn total(&self) -> Vector3 {
        self.total
    }
}

fn finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse three whitespace separated reals into a vector
///
/// Returns `None` unless the slice holds exactly three finite values;
/// `nan`, `inf` and literals that overflow to infinity are rejected.
pub fn from_components(fields: &[&str]) -> Option<Vector3> {
    match fields {
        [x, y, z] => Some(Vector3::new(finite(x)?, finite(y)?, finite(z)?)),
        _ => None,
    }
}
