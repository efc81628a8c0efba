//! Preset launch scenarios.
//!
//! All presets launch from the positive y-axis moving in +x around the
//! default planet. Speeds tied to a milestone are computed for the launch
//! distance when the configuration is built.

use bevy::math::DVec2;

use crate::config::{SimulationConfig, SpeedMilestone};
use crate::types::{MOON_DISTANCE, MOON_ORBITAL_SPEED};

/// How a preset picks its launch speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LaunchSpeed {
    /// A fixed speed in m/s.
    Fixed(f64),
    /// A multiple of a milestone speed at the launch distance.
    Milestone(SpeedMilestone, f64),
}

/// A predefined launch configuration.
#[derive(Clone, Copy, Debug)]
pub struct LaunchPreset {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of what the run shows.
    pub description: &'static str,
    /// Launch distance from the planet center (meters).
    pub distance: f64,
    /// Launch speed along +x.
    pub speed: LaunchSpeed,
    /// Integration step override (seconds); `None` keeps the base `dt`.
    pub dt: Option<f64>,
}

impl LaunchPreset {
    /// Configuration for this preset, starting from `base`.
    pub fn apply(&self, base: SimulationConfig) -> SimulationConfig {
        let speed = match self.speed {
            LaunchSpeed::Fixed(speed) => speed,
            LaunchSpeed::Milestone(milestone, factor) => {
                factor * milestone.speed(&base.planet, self.distance)
            }
        };
        let position = base.planet.center + DVec2::new(0.0, self.distance);
        let config = base.with_launch(position, DVec2::new(speed, 0.0));
        match self.dt {
            Some(dt) => config.with_dt(dt),
            None => config,
        }
    }

    /// Configuration for this preset on top of the defaults.
    pub fn config(&self) -> SimulationConfig {
        self.apply(SimulationConfig::default())
    }
}

/// All available presets.
pub static PRESETS: &[LaunchPreset] =
    &[MOON_ORBIT, CIRCULAR_ORBIT, SUB_ORBITAL, ESCAPE, STRAIGHT_DROP];

/// The Moon's distance and speed (default).
pub static MOON_ORBIT: LaunchPreset = LaunchPreset {
    id: "moon_orbit",
    name: "Moon Orbit",
    description: "Launch at the Moon's distance and mean orbital speed.",
    distance: MOON_DISTANCE,
    speed: LaunchSpeed::Fixed(MOON_ORBITAL_SPEED),
    dt: None,
};

/// Exactly circular speed at the Moon's distance.
pub static CIRCULAR_ORBIT: LaunchPreset = LaunchPreset {
    id: "circular_orbit",
    name: "Circular Orbit",
    description: "Circular orbit speed; the distance should barely change.",
    distance: MOON_DISTANCE,
    speed: LaunchSpeed::Milestone(SpeedMilestone::Orbital, 1.0),
    dt: None,
};

/// Slowest launch allowed by the speed bounds.
pub static SUB_ORBITAL: LaunchPreset = LaunchPreset {
    id: "sub_orbital",
    name: "Sub-orbital",
    description: "70% of orbital speed; a narrow ellipse dipping toward the planet.",
    distance: MOON_DISTANCE,
    speed: LaunchSpeed::Milestone(SpeedMilestone::SubOrbital, 1.0),
    dt: None,
};

/// Just above escape speed.
pub static ESCAPE: LaunchPreset = LaunchPreset {
    id: "escape",
    name: "Escape",
    description: "5% above escape speed; the projectile never comes back.",
    distance: MOON_DISTANCE,
    speed: LaunchSpeed::Milestone(SpeedMilestone::Escape, 1.05),
    dt: None,
};

/// Released at rest.
///
/// The step is short enough that no single step carries the projectile
/// across the whole planet near the surface, where it moves at close to
/// 10 km/s.
pub static STRAIGHT_DROP: LaunchPreset = LaunchPreset {
    id: "straight_drop",
    name: "Straight Drop",
    description: "Released at rest; falls straight in and impacts.",
    distance: 5.0e7,
    speed: LaunchSpeed::Fixed(0.0),
    dt: Some(300.0),
};

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Option<&'static LaunchPreset> {
    PRESETS.iter().find(|p| p.id == id)
}
