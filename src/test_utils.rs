//! Test utilities for launch simulation tests.
//!
//! Provides fixtures for common launch states around Earth and assertions
//! for checking physical invariants of integrated trajectories.

use bevy::math::DVec2;

use crate::config::SimulationConfig;
use crate::types::PlanetSpec;

/// Fixtures for creating launch states and configurations.
pub mod fixtures {
    use super::*;

    /// Launch state for a circular orbit at `distance` meters above Earth's center.
    ///
    /// The body is placed on the positive y-axis moving in +x, matching the
    /// default launch geometry.
    pub fn circular_launch(distance: f64) -> (DVec2, DVec2) {
        let v = PlanetSpec::earth().orbital_speed_at(distance);
        (DVec2::new(0.0, distance), DVec2::new(v, 0.0))
    }

    /// Launch state at `factor` times escape speed.
    pub fn escape_launch(distance: f64, factor: f64) -> (DVec2, DVec2) {
        let v = PlanetSpec::earth().escape_speed_at(distance) * factor;
        (DVec2::new(0.0, distance), DVec2::new(v, 0.0))
    }

    /// A body released at rest at `distance`.
    pub fn straight_drop(distance: f64) -> (DVec2, DVec2) {
        (DVec2::new(0.0, distance), DVec2::ZERO)
    }

    /// Default configuration with a long playback cap so tests never time out
    /// unless they mean to.
    pub fn untimed_config() -> SimulationConfig {
        SimulationConfig::default().with_max_real_playback_duration(1.0e9)
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy around Earth: E = v²/2 - GM/r.
    pub fn orbital_energy(pos: DVec2, vel: DVec2) -> f64 {
        let gm = PlanetSpec::earth().gm();
        0.5 * vel.length_squared() - gm / pos.length()
    }

    /// Specific angular momentum (2D scalar).
    pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
        pos.x * vel.y - pos.y * vel.x
    }

    /// Orbital period around Earth for a given semi-major axis.
    pub fn orbital_period(semi_major_axis: f64) -> f64 {
        use std::f64::consts::TAU;
        TAU * (semi_major_axis.powi(3) / PlanetSpec::earth().gm()).sqrt()
    }

    /// Assert that consecutive points are at least `resolution` apart.
    ///
    /// # Panics
    /// Panics on the first pair that is closer.
    pub fn assert_spacing(points: &[DVec2], resolution: f64) {
        for (i, pair) in points.windows(2).enumerate() {
            let gap = (pair[1] - pair[0]).length();
            assert!(
                gap >= resolution,
                "points {i} and {} are {gap:.3e} m apart, below resolution {resolution:.3e}",
                i + 1
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MOON_DISTANCE;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_launch_is_bound() {
        let (pos, vel) = fixtures::circular_launch(MOON_DISTANCE);
        assert!(assertions::orbital_energy(pos, vel) < 0.0);
    }

    #[test]
    fn test_escape_launch_is_unbound() {
        let (pos, vel) = fixtures::escape_launch(MOON_DISTANCE, 1.1);
        assert!(assertions::orbital_energy(pos, vel) > 0.0);
    }

    #[test]
    fn test_moon_period_is_about_27_days() {
        let period = assertions::orbital_period(MOON_DISTANCE);
        let days = period / crate::types::SECONDS_PER_DAY;
        assert_relative_eq!(days, 27.4, epsilon = 0.5);
    }

    #[test]
    #[should_panic(expected = "below resolution")]
    fn test_assert_spacing_catches_close_points() {
        let points = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(11.0, 0.0)];
        assertions::assert_spacing(&points, 5.0);
    }
}
