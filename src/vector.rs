//! Geometric helpers over `DVec2`.
//!
//! Displacement is always `a - b`, i.e. the vector pointing from `b` to `a`.

use bevy::math::DVec2;

use crate::error::SimulationError;

/// Euclidean norm.
#[inline]
pub fn length(v: DVec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Componentwise `a - b`, pointing from `b` toward `a`.
#[inline]
pub fn displacement(a: DVec2, b: DVec2) -> DVec2 {
    DVec2::new(a.x - b.x, a.y - b.y)
}

/// Distance between two points.
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    length(displacement(a, b))
}

/// Unit vector along `v`.
///
/// Fails with [`SimulationError::DegenerateVector`] for a zero-length (or
/// non-finite) input instead of returning NaN components.
pub fn unit_vector(v: DVec2) -> Result<DVec2, SimulationError> {
    let len = length(v);
    if len == 0.0 || !len.is_finite() {
        return Err(SimulationError::DegenerateVector);
    }
    Ok(v / len)
}

/// Unit vector pointing from `from` toward `to`.
pub fn direction_to(from: DVec2, to: DVec2) -> Result<DVec2, SimulationError> {
    unit_vector(displacement(to, from))
}
