//! Simulation configuration.
//!
//! Everything here is fixed once a controller is built. `validate` rejects
//! non-positive step sizes and resolutions up front so a running simulation
//! never has to.

use bevy::math::DVec2;

use crate::error::{SimulationError, require_positive};
use crate::types::{MOON_DISTANCE, MOON_ORBITAL_SPEED, PlanetSpec, SECONDS_PER_DAY};
use crate::vector;

/// Default frames per second of the playback scheduler.
pub const DEFAULT_FPS: f64 = 5.0;

/// Default playback speed: simulated seconds per real second (3 days).
pub const DEFAULT_PLAYBACK_SPEED: f64 = 3.0 * SECONDS_PER_DAY;

/// Default minimum spacing between recorded trajectory points (meters).
pub const DEFAULT_RESOLUTION: f64 = 1e6;

/// Default real playback time before the run stops (seconds).
pub const DEFAULT_MAX_REAL_PLAYBACK: f64 = 15.0;

/// Fraction of orbital speed used as the lower launch speed bound.
pub const MIN_SPEED_ORBITAL_FRACTION: f64 = 0.7;

/// Multiple of escape speed used as the upper launch speed bound.
pub const MAX_SPEED_ESCAPE_FACTOR: f64 = 1.3;

/// Allowed launch speed range in m/s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBounds {
    pub min: f64,
    pub max: f64,
}

impl SpeedBounds {
    /// Create bounds, requiring `0 <= min <= max`, both finite.
    pub fn new(min: f64, max: f64) -> Result<Self, SimulationError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Bounds spanning 70% of orbital speed to 130% of escape speed at `distance`.
    pub fn for_distance(planet: &PlanetSpec, distance: f64) -> Self {
        Self {
            min: MIN_SPEED_ORBITAL_FRACTION * planet.orbital_speed_at(distance),
            max: MAX_SPEED_ESCAPE_FACTOR * planet.escape_speed_at(distance),
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.min >= 0.0 && self.min.is_finite()) {
            return Err(SimulationError::InvalidConfiguration {
                field: "speed_bounds.min",
                value: self.min,
                reason: "must be non-negative and finite",
            });
        }
        if !(self.max >= self.min && self.max.is_finite()) {
            return Err(SimulationError::InvalidConfiguration {
                field: "speed_bounds.max",
                value: self.max,
                reason: "must be finite and not below the minimum",
            });
        }
        Ok(())
    }

    /// Clamp a scalar speed into the range.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(self.min, self.max)
    }

    /// Clamp the magnitude of `velocity` into the range, keeping its direction.
    ///
    /// A zero velocity has no direction to scale along, so it only passes
    /// when the lower bound is zero.
    pub fn clamp_velocity(&self, velocity: DVec2) -> Result<DVec2, SimulationError> {
        let speed = vector::length(velocity);
        let clamped = self.clamp_speed(speed);
        if clamped == speed {
            return Ok(velocity);
        }
        Ok(vector::unit_vector(velocity)? * clamped)
    }

    /// Position of `speed` within the range, 0.0 at `min` and 1.0 at `max`.
    pub fn normalized(&self, speed: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (speed - self.min) / span
    }
}

/// Reference speeds worth marking on a launch speed control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpeedMilestone {
    /// Lower bound of the range (70% of orbital speed)
    SubOrbital,
    /// Circular orbit speed
    Orbital,
    /// Escape speed
    Escape,
    /// Upper bound of the range (130% of escape speed)
    Hyperbolic,
}

impl SpeedMilestone {
    pub const ALL: [SpeedMilestone; 4] = [
        SpeedMilestone::SubOrbital,
        SpeedMilestone::Orbital,
        SpeedMilestone::Escape,
        SpeedMilestone::Hyperbolic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpeedMilestone::SubOrbital => "70% Orbital",
            SpeedMilestone::Orbital => "Orbital",
            SpeedMilestone::Escape => "Escape",
            SpeedMilestone::Hyperbolic => "130% Escape",
        }
    }

    /// Speed of this milestone at `distance` from the planet center (m/s).
    pub fn speed(&self, planet: &PlanetSpec, distance: f64) -> f64 {
        match self {
            SpeedMilestone::SubOrbital => {
                MIN_SPEED_ORBITAL_FRACTION * planet.orbital_speed_at(distance)
            }
            SpeedMilestone::Orbital => planet.orbital_speed_at(distance),
            SpeedMilestone::Escape => planet.escape_speed_at(distance),
            SpeedMilestone::Hyperbolic => {
                MAX_SPEED_ESCAPE_FACTOR * planet.escape_speed_at(distance)
            }
        }
    }
}

/// Immutable configuration for a [`SimulationController`](crate::controller::SimulationController).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// The central body.
    pub planet: PlanetSpec,
    /// Launch position used by `launch_default` and `set_speed` (meters).
    pub launch_position: DVec2,
    /// Launch velocity used by `launch_default` (m/s).
    pub launch_velocity: DVec2,
    /// Minimum distance between recorded trajectory points (meters).
    pub resolution: f64,
    /// Scheduler frame rate; one tick per frame.
    pub fps: f64,
    /// Simulated seconds per integration step.
    pub dt: f64,
    /// Real playback time after which a run stops (seconds).
    pub max_real_playback_duration: f64,
    /// Range that `set_speed` clamps launch speeds into.
    pub speed_bounds: SpeedBounds,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let planet = PlanetSpec::earth();
        let launch_position = DVec2::new(0.0, MOON_DISTANCE);
        let speed_bounds =
            SpeedBounds::for_distance(&planet, vector::distance(planet.center, launch_position));
        Self {
            planet,
            launch_position,
            launch_velocity: DVec2::new(MOON_ORBITAL_SPEED, 0.0),
            resolution: DEFAULT_RESOLUTION,
            fps: DEFAULT_FPS,
            dt: DEFAULT_PLAYBACK_SPEED / DEFAULT_FPS,
            max_real_playback_duration: DEFAULT_MAX_REAL_PLAYBACK,
            speed_bounds,
        }
    }
}

impl SimulationConfig {
    /// Replace the planet and recompute speed bounds for the launch distance.
    pub fn with_planet(mut self, planet: PlanetSpec) -> Self {
        self.planet = planet;
        self.recompute_speed_bounds();
        self
    }

    /// Replace the launch state and recompute speed bounds for the new distance.
    pub fn with_launch(mut self, position: DVec2, velocity: DVec2) -> Self {
        self.launch_position = position;
        self.launch_velocity = velocity;
        self.recompute_speed_bounds();
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_max_real_playback_duration(mut self, seconds: f64) -> Self {
        self.max_real_playback_duration = seconds;
        self
    }

    pub fn with_speed_bounds(mut self, bounds: SpeedBounds) -> Self {
        self.speed_bounds = bounds;
        self
    }

    /// Set `dt` so that one real second of playback covers
    /// `sim_seconds_per_real_second` of simulated time at the current fps.
    pub fn with_playback_speed(mut self, sim_seconds_per_real_second: f64) -> Self {
        self.dt = sim_seconds_per_real_second / self.fps;
        self
    }

    /// Simulated seconds covered by one real second of playback.
    pub fn playback_speed(&self) -> f64 {
        self.dt * self.fps
    }

    /// Real time represented by one tick (seconds).
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps
    }

    /// Distance of the launch position from the planet center.
    pub fn launch_distance(&self) -> f64 {
        vector::distance(self.planet.center, self.launch_position)
    }

    /// Milestone speeds at the launch distance, with their normalized
    /// position inside the speed bounds.
    pub fn milestones(&self) -> Vec<(SpeedMilestone, f64, f64)> {
        let distance = self.launch_distance();
        SpeedMilestone::ALL
            .iter()
            .map(|m| {
                let speed = m.speed(&self.planet, distance);
                (*m, speed, self.speed_bounds.normalized(speed))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.planet.validate()?;
        require_positive("resolution", self.resolution)?;
        require_positive("fps", self.fps)?;
        require_positive("dt", self.dt)?;
        require_positive("max_real_playback_duration", self.max_real_playback_duration)?;
        self.speed_bounds.validate()?;
        if !self.launch_position.is_finite() || !self.launch_velocity.is_finite() {
            return Err(SimulationError::InvalidConfiguration {
                field: "launch",
                value: f64::NAN,
                reason: "launch position and velocity must be finite",
            });
        }
        Ok(())
    }

    fn recompute_speed_bounds(&mut self) {
        let distance = self.launch_distance();
        if distance > 0.0 {
            self.speed_bounds = SpeedBounds::for_distance(&self.planet, distance);
        }
    }
}
