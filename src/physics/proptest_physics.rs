//! Property-based tests for the semi-implicit Euler step using proptest.
//!
//! These tests verify physical invariants across a range of launch distances
//! and speeds around Earth.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{PhysicsState, StepStatus};
use crate::test_utils::{assertions, fixtures};
use crate::types::{EARTH_RADIUS, PlanetSpec};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// A circular launch stays near its starting radius for one full period.
    ///
    /// Semi-implicit Euler is symplectic, so the radius oscillates but does
    /// not drift away over a single orbit.
    #[test]
    fn prop_circular_orbit_radius_bounded(
        distance in 1.0e7f64..4.0e8,
    ) {
        let earth = PlanetSpec::earth();
        let (pos, vel) = fixtures::circular_launch(distance);
        let period = assertions::orbital_period(distance);
        let steps = 5000;
        let dt = period / steps as f64;

        let mut state = PhysicsState::new(pos, vel);
        for _ in 0..steps {
            let result = state.step(dt, &earth).unwrap();
            prop_assert_eq!(result.status, StepStatus::Advanced);
            let deviation = (result.position.length() - distance).abs() / distance;
            prop_assert!(
                deviation < 0.01,
                "radius deviated {:.4}% from {:.3e} m",
                deviation * 100.0, distance
            );
        }
    }

    /// Angular momentum about the center survives every step.
    ///
    /// The acceleration is parallel to the radius vector, so both halves of
    /// the step preserve r × v up to rounding.
    #[test]
    fn prop_angular_momentum_conserved(
        distance in 1.0e7f64..4.0e8,
        speed_factor in 0.5f64..1.3,
    ) {
        let earth = PlanetSpec::earth();
        let (pos, vel) = fixtures::circular_launch(distance);
        let vel = vel * speed_factor;
        let initial_l = assertions::angular_momentum(pos, vel);

        let mut state = PhysicsState::new(pos, vel);
        let dt = assertions::orbital_period(distance) / 2000.0;
        for _ in 0..1000 {
            if state.step(dt, &earth).unwrap().status == StepStatus::Impacted {
                break;
            }
        }

        let final_l = state.angular_momentum(&earth);
        let drift = ((final_l - initial_l) / initial_l).abs();
        prop_assert!(drift < 1e-9, "angular momentum drift {:.3e}", drift);
    }

    /// An escape launch recedes on every step and its energy stays positive.
    #[test]
    fn prop_escape_launch_recedes(
        distance in 1.0e7f64..4.0e8,
        factor in 1.1f64..1.3,
    ) {
        let earth = PlanetSpec::earth();
        let (pos, vel) = fixtures::escape_launch(distance, factor);
        let initial_energy = assertions::orbital_energy(pos, vel);
        prop_assert!(initial_energy > 0.0);

        let mut state = PhysicsState::new(pos, vel);
        let dt = assertions::orbital_period(distance) / 2000.0;
        let mut last_radius = distance;
        for _ in 0..2000 {
            let result = state.step(dt, &earth).unwrap();
            let radius = result.position.length();
            prop_assert!(radius > last_radius, "fell back to {:.3e} m", radius);
            last_radius = radius;

            let energy = assertions::orbital_energy(result.position, result.velocity);
            let drift = ((energy - initial_energy) / initial_energy).abs();
            prop_assert!(drift < 0.01, "energy drift {:.3e}", drift);
        }
        prop_assert!(last_radius > 5.0 * distance);
    }

    /// A body released at rest always ends up impacted, and stays put afterwards.
    #[test]
    fn prop_straight_drop_impacts(
        height in 1.0e5f64..1.0e8,
    ) {
        let earth = PlanetSpec::earth();
        let (pos, vel) = fixtures::straight_drop(EARTH_RADIUS + height);
        let mut state = PhysicsState::new(pos, vel);
        let dt = 10.0;

        let mut impacted = false;
        for _ in 0..2_000_000 {
            if state.step(dt, &earth).unwrap().status == StepStatus::Impacted {
                impacted = true;
                break;
            }
        }
        prop_assert!(impacted, "drop from {:.3e} m never impacted", height);

        let frozen = state.clone();
        let again = state.step(dt, &earth).unwrap();
        prop_assert_eq!(again.status, StepStatus::Impacted);
        prop_assert_eq!(state, frozen);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_drop_moves_straight_down() {
        let earth = PlanetSpec::earth();
        let mut state = PhysicsState::new(DVec2::new(0.0, 1.0e8), DVec2::ZERO);
        for _ in 0..100 {
            state.step(60.0, &earth).unwrap();
        }
        assert_eq!(state.position().x, 0.0);
        assert!(state.position().y < 1.0e8);
        assert!(state.velocity().y < 0.0);
    }

    #[test]
    fn test_energy_rises_with_speed() {
        let earth = PlanetSpec::earth();
        let (pos, vel) = fixtures::circular_launch(1.0e8);
        let slow = PhysicsState::new(pos, vel);
        let fast = PhysicsState::new(pos, vel * 1.5);
        assert!(fast.specific_energy(&earth) > slow.specific_energy(&earth));
        assert!(slow.specific_energy(&earth) < 0.0);
    }
}
