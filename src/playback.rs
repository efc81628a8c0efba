//! Bevy scheduling adapter for the simulation controller.
//!
//! The controller lives in the world as a resource and is ticked once per
//! `FixedUpdate` run. The fixed timestep is set to the configured fps, so
//! each run accounts `1 / fps` real seconds and integrates `dt` simulated
//! seconds. Rendering layers read the same resource.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::controller::{SimulationController, TickOutcome};
use crate::error::SimulationError;

/// Plugin that owns a launched [`SimulationController`] and drives it.
pub struct SimulationPlugin {
    controller: SimulationController,
}

impl SimulationPlugin {
    /// Validate `config` and launch with its default position and velocity.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let mut controller = SimulationController::new(config)?;
        controller.launch_default()?;
        Ok(Self { controller })
    }

    /// Use an already configured controller as is, in whatever state it is in.
    pub fn from_controller(controller: SimulationController) -> Self {
        Self { controller }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let fps = self.controller.config().fps;
        app.insert_resource(Time::<Fixed>::from_hz(fps))
            .insert_resource(self.controller.clone())
            .add_systems(FixedUpdate, advance_simulation);
    }
}

/// Tick the controller with the fixed timestep as real playback time.
fn advance_simulation(mut controller: ResMut<SimulationController>, time: Res<Time>) {
    let dt = controller.config().dt;
    match controller.tick(dt, time.delta_secs_f64()) {
        Ok(TickOutcome::TimedOut(snapshot)) | Ok(TickOutcome::Impacted(snapshot)) => {
            debug!("Simulation stopped: {}", snapshot);
        }
        Ok(_) => {}
        Err(err) => warn!("Simulation tick failed: {}", err),
    }
}
