//! Physics for a projectile around a single planet.
//!
//! Fixed-step semi-implicit Euler under inverse-square gravity. The
//! controller calls [`PhysicsState::step`] once per tick.

mod gravity;
mod state;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{acceleration_magnitude, compute_acceleration};
pub use state::{PhysicsState, StepResult, StepStatus};
