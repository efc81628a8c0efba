//! Position/velocity state advanced by semi-implicit Euler steps.

use bevy::math::DVec2;

use crate::error::{SimulationError, require_positive};
use crate::types::PlanetSpec;
use crate::vector;

use super::gravity::compute_acceleration;

/// Whether a step moved the projectile or found it already inside the planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Advanced,
    Impacted,
}

/// Outcome of one [`PhysicsState::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    pub status: StepStatus,
    /// Position after the step (unchanged when impacted).
    pub position: DVec2,
    /// Velocity after the step (unchanged when impacted).
    pub velocity: DVec2,
    /// Simulation time after the step in seconds.
    pub simulation_time: f64,
    /// Distance from the planet center at the start of the step.
    pub distance_to_planet_center: f64,
}

/// Kinematic state of the projectile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicsState {
    position: DVec2,
    velocity: DVec2,
    simulation_time: f64,
}

impl PhysicsState {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position,
            velocity,
            simulation_time: 0.0,
        }
    }

    /// Start over from `position` and `velocity` at time zero.
    pub fn reset(&mut self, position: DVec2, velocity: DVec2) {
        self.position = position;
        self.velocity = velocity;
        self.simulation_time = 0.0;
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Elapsed simulated time in seconds.
    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    /// Advance by `dt` seconds under the planet's gravity.
    ///
    /// Velocity is updated from the current acceleration first, then position
    /// from the updated velocity. If the projectile is already closer to the
    /// center than the planet radius, nothing changes and the result is
    /// [`StepStatus::Impacted`]; this check precedes the 1/r² term so the
    /// state never picks up an unbounded acceleration.
    pub fn step(&mut self, dt: f64, planet: &PlanetSpec) -> Result<StepResult, SimulationError> {
        require_positive("dt", dt)?;

        let distance = vector::distance(planet.center, self.position);

        if distance < planet.radius {
            return Ok(self.result(StepStatus::Impacted, distance));
        }

        let acceleration = compute_acceleration(self.position, planet)?;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.simulation_time += dt;

        Ok(self.result(StepStatus::Advanced, distance))
    }

    /// Specific orbital energy v²/2 - GM/r (J/kg).
    pub fn specific_energy(&self, planet: &PlanetSpec) -> f64 {
        let r = vector::distance(planet.center, self.position);
        0.5 * self.velocity.length_squared() - planet.gm() / r
    }

    /// Specific angular momentum about the planet center (m²/s).
    pub fn angular_momentum(&self, planet: &PlanetSpec) -> f64 {
        let r = vector::displacement(self.position, planet.center);
        r.x * self.velocity.y - r.y * self.velocity.x
    }

    fn result(&self, status: StepStatus, distance: f64) -> StepResult {
        StepResult {
            status,
            position: self.position,
            velocity: self.velocity,
            simulation_time: self.simulation_time,
            distance_to_planet_center: distance,
        }
    }
}
