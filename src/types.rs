//! Core physics types and constants for the two-body launch simulation.

use bevy::math::DVec2;

use crate::error::{SimulationError, require_positive};

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.6743e-11;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.972e24;

/// Earth mean radius in meters
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Mean Earth-Moon distance in meters
pub const MOON_DISTANCE: f64 = 3.844e8;

/// Mean orbital speed of the Moon in m/s
pub const MOON_ORBITAL_SPEED: f64 = 1022.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// The single central body the projectile falls toward.
///
/// Immutable once validated. The center is usually the origin but is kept
/// as a field so every distance is measured against it explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    /// Gravitational constant used for this planet (m³·kg⁻¹·s⁻²)
    pub gravitational_constant: f64,
    /// Mass in kilograms
    pub mass: f64,
    /// Surface radius in meters; anything closer to the center has impacted
    pub radius: f64,
    /// Center position in meters
    pub center: DVec2,
}

impl Default for PlanetSpec {
    fn default() -> Self {
        Self::earth()
    }
}

impl PlanetSpec {
    /// Create a planet, validating radius, mass and G.
    pub fn new(
        gravitational_constant: f64,
        mass: f64,
        radius: f64,
        center: DVec2,
    ) -> Result<Self, SimulationError> {
        let planet = Self {
            gravitational_constant,
            mass,
            radius,
            center,
        };
        planet.validate()?;
        Ok(planet)
    }

    /// Earth centered at the origin.
    pub fn earth() -> Self {
        Self {
            gravitational_constant: G,
            mass: EARTH_MASS,
            radius: EARTH_RADIUS,
            center: DVec2::ZERO,
        }
    }

    /// Check the planet invariants (R > 0, M > 0, G > 0, finite center).
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("planet.gravitational_constant", self.gravitational_constant)?;
        require_positive("planet.mass", self.mass)?;
        require_positive("planet.radius", self.radius)?;
        if !self.center.is_finite() {
            return Err(SimulationError::InvalidConfiguration {
                field: "planet.center",
                value: f64::NAN,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Standard gravitational parameter GM (m³/s²).
    pub fn gm(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    /// Speed of a circular orbit at `distance` from the center: sqrt(GM/r).
    pub fn orbital_speed_at(&self, distance: f64) -> f64 {
        (self.gm() / distance).sqrt()
    }

    /// Minimum speed to escape from `distance`: sqrt(2GM/r).
    pub fn escape_speed_at(&self, distance: f64) -> f64 {
        (2.0 * self.gm() / distance).sqrt()
    }
}
