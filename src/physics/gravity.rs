//! Inverse-square gravity from a single planet.

use bevy::math::DVec2;

use crate::error::SimulationError;
use crate::types::PlanetSpec;
use crate::vector;

/// Magnitude of gravitational acceleration at `distance` from the center (m/s²).
///
/// Diverges as `distance` approaches zero; callers check for impact first.
#[inline]
pub fn acceleration_magnitude(planet: &PlanetSpec, distance: f64) -> f64 {
    planet.gravitational_constant * planet.mass / (distance * distance)
}

/// Gravitational acceleration vector at `pos`, pointing toward the planet center.
///
/// # Errors
/// [`SimulationError::DegenerateVector`] if `pos` coincides with the center.
pub fn compute_acceleration(pos: DVec2, planet: &PlanetSpec) -> Result<DVec2, SimulationError> {
    let direction = vector::direction_to(pos, planet.center)?;
    let distance = vector::distance(planet.center, pos);
    Ok(direction * acceleration_magnitude(planet, distance))
}
