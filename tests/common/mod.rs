//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use launchsim::types::PlanetSpec;
use launchsim::{SimulationConfig, SimulationController};

/// Circular launch state at `distance` from Earth's center, moving in +x.
pub fn circular_launch(distance: f64) -> (DVec2, DVec2) {
    let v = PlanetSpec::earth().orbital_speed_at(distance);
    (DVec2::new(0.0, distance), DVec2::new(v, 0.0))
}

/// Orbital period around Earth for a given semi-major axis.
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / PlanetSpec::earth().gm()).sqrt()
}

/// Default configuration that never times out.
pub fn untimed_config() -> SimulationConfig {
    SimulationConfig::default().with_max_real_playback_duration(1.0e9)
}

/// Controller already launched from `pos` with `vel`.
pub fn launched(config: SimulationConfig, pos: DVec2, vel: DVec2) -> SimulationController {
    let mut controller = SimulationController::new(config).expect("valid config");
    controller.launch(pos, vel).expect("finite launch state");
    controller
}

/// Assert that consecutive trajectory points are at least `resolution` apart.
pub fn assert_spacing(points: &[DVec2], resolution: f64) {
    for pair in points.windows(2) {
        let gap = (pair[1] - pair[0]).length();
        assert!(gap >= resolution, "gap {gap:.3e} below resolution {resolution:.3e}");
    }
}

/// Tick `n` times with the configured cadence.
pub fn run_frames(controller: &mut SimulationController, n: usize) {
    for _ in 0..n {
        controller.tick_frame().expect("tick should succeed");
    }
}
