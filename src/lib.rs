//! Launchsim - two-body projectile simulator
//!
//! A library crate providing the physics integration and playback state
//! machine for a projectile launched near a single planet. Rendering is
//! left to the host, which ticks the controller and reads its trajectory.

pub mod config;
pub mod controller;
pub mod error;
pub mod physics;
pub mod playback;
pub mod presets;
pub mod trajectory;
pub mod types;
pub mod vector;

#[cfg(test)]
pub mod test_utils;

pub use config::SimulationConfig;
pub use controller::{
    DiagnosticSnapshot, SimulationController, SimulationState, TerminationReason, TickOutcome,
};
pub use error::SimulationError;
pub use types::PlanetSpec;
