//! Simulation controller: the playback state machine around one projectile.
//!
//! A host scheduler calls [`SimulationController::tick`] on its own cadence.
//! Each running tick performs one integration step, updates the distance
//! extrema and offers the new position to the trajectory recorder.
//!
//! States:
//! - `Idle` until the first launch
//! - `Running` / `Paused`, switched by [`SimulationController::toggle_playback`]
//! - `Terminated` after an impact or once the real playback cap is exceeded;
//!   only a new launch leaves it (an expired run is not resumable, so the cap
//!   ends it instead of pausing it)
//!
//! A diagnostic snapshot is produced whenever a run pauses or terminates.

use std::fmt;

use bevy::log::{info, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::config::SimulationConfig;
use crate::error::{SimulationError, require_positive};
use crate::physics::{PhysicsState, StepStatus};
use crate::trajectory::TrajectoryRecorder;
use crate::types::SECONDS_PER_DAY;
use crate::vector;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The projectile came closer to the center than the planet radius.
    Impacted,
    /// Real playback time exceeded the configured cap.
    TimedOut,
}

/// Playback state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SimulationState {
    #[default]
    Idle,
    Running,
    Paused,
    Terminated(TerminationReason),
}

/// Summary of a run, emitted on pause and termination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagnosticSnapshot {
    /// Elapsed simulated time in seconds.
    pub simulation_time: f64,
    /// Elapsed simulated time in days.
    pub simulation_days: f64,
    /// Largest distance from the planet center seen so far (meters).
    pub max_distance: f64,
    /// Smallest distance from the planet center seen so far (meters).
    pub min_distance: f64,
    /// How far above the launch distance the projectile got, in percent.
    pub max_deviation_pct: f64,
    /// How far below the launch distance the projectile got, in percent.
    pub min_deviation_pct: f64,
}

impl fmt::Display for DiagnosticSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {:.2}, max deviation {:.2}%, min deviation {:.2}%",
            self.simulation_days, self.max_deviation_pct, self.min_deviation_pct
        )
    }
}

/// What a single [`SimulationController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// One step was integrated; `recorded` says whether a trajectory point was added.
    Advanced { recorded: bool },
    /// The projectile hit the planet this tick.
    Impacted(DiagnosticSnapshot),
    /// The real playback cap was exceeded this tick; no step was taken.
    TimedOut(DiagnosticSnapshot),
    /// Nothing happened because the controller is not running.
    Inactive(SimulationState),
}

/// Owns the physics state and trajectory of one projectile and drives them
/// from external ticks.
#[derive(Resource, Clone, Debug)]
pub struct SimulationController {
    config: SimulationConfig,
    state: SimulationState,
    physics: PhysicsState,
    trajectory: TrajectoryRecorder,
    /// Launch state of the current run; speed changes relaunch from here.
    launch_position: DVec2,
    launch_velocity: DVec2,
    /// Real playback seconds accumulated by running ticks.
    elapsed_real_time: f64,
    min_distance: f64,
    max_distance: f64,
    /// Launch distance from the center; deviations are relative to it.
    reference_distance: f64,
    last_snapshot: Option<DiagnosticSnapshot>,
}

impl SimulationController {
    /// Build an idle controller.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfiguration`] if the configuration fails validation.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let physics = PhysicsState::new(config.launch_position, config.launch_velocity);
        let trajectory = TrajectoryRecorder::new(config.launch_position);
        let reference_distance = config.launch_distance();
        Ok(Self {
            launch_position: config.launch_position,
            launch_velocity: config.launch_velocity,
            config,
            state: SimulationState::Idle,
            physics,
            trajectory,
            elapsed_real_time: 0.0,
            min_distance: f64::INFINITY,
            max_distance: 0.0,
            reference_distance,
            last_snapshot: None,
        })
    }

    /// Start a fresh run from `position` with `velocity`, whatever the current state.
    pub fn launch(&mut self, position: DVec2, velocity: DVec2) -> Result<(), SimulationError> {
        if !position.is_finite() || !velocity.is_finite() {
            return Err(SimulationError::InvalidConfiguration {
                field: "launch",
                value: f64::NAN,
                reason: "launch position and velocity must be finite",
            });
        }

        self.physics.reset(position, velocity);
        self.trajectory.reset(position);
        self.launch_position = position;
        self.launch_velocity = velocity;
        self.elapsed_real_time = 0.0;
        self.min_distance = f64::INFINITY;
        self.max_distance = 0.0;
        self.reference_distance = vector::distance(self.config.planet.center, position);
        self.last_snapshot = None;
        self.state = SimulationState::Running;

        info!(
            "Launch from ({:.3e}, {:.3e}) m at ({:.1}, {:.1}) m/s",
            position.x, position.y, velocity.x, velocity.y
        );
        Ok(())
    }

    /// Launch with the configured position and velocity.
    pub fn launch_default(&mut self) -> Result<(), SimulationError> {
        self.launch(self.config.launch_position, self.config.launch_velocity)
    }

    /// Re-launch from the current run's launch position with a new velocity.
    ///
    /// Before the first launch that is the configured position. The speed is
    /// clamped into the configured bounds, keeping direction. Returns the
    /// velocity actually used.
    pub fn set_speed(&mut self, velocity: DVec2) -> Result<DVec2, SimulationError> {
        let clamped = self.config.speed_bounds.clamp_velocity(velocity)?;
        if clamped != velocity {
            warn!(
                "Launch speed {:.1} m/s clamped to {:.1} m/s",
                vector::length(velocity),
                vector::length(clamped)
            );
        }
        self.launch(self.launch_position, clamped)?;
        Ok(clamped)
    }

    /// Re-launch with a new horizontal launch speed, keeping the launch
    /// position and vertical velocity of the current run. Returns the
    /// velocity actually used.
    pub fn set_launch_speed(&mut self, speed: f64) -> Result<DVec2, SimulationError> {
        let clamped = self.config.speed_bounds.clamp_speed(speed);
        if clamped != speed {
            warn!("Launch speed {:.1} m/s clamped to {:.1} m/s", speed, clamped);
        }
        let velocity = DVec2::new(clamped, self.launch_velocity.y);
        self.launch(self.launch_position, velocity)?;
        Ok(velocity)
    }

    /// Advance the run by one integration step of `dt` simulated seconds,
    /// accounting `real_time_delta` seconds of playback.
    ///
    /// Does nothing unless the controller is running.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfiguration`] for a non-positive `dt` or a
    /// negative `real_time_delta`.
    pub fn tick(&mut self, dt: f64, real_time_delta: f64) -> Result<TickOutcome, SimulationError> {
        require_positive("dt", dt)?;
        if !(real_time_delta >= 0.0 && real_time_delta.is_finite()) {
            return Err(SimulationError::InvalidConfiguration {
                field: "real_time_delta",
                value: real_time_delta,
                reason: "must be non-negative and finite",
            });
        }

        if self.state != SimulationState::Running {
            return Ok(TickOutcome::Inactive(self.state));
        }

        self.elapsed_real_time += real_time_delta;
        if self.elapsed_real_time > self.config.max_real_playback_duration {
            let snapshot = self.terminate(TerminationReason::TimedOut);
            info!("Max playback time reached: {}", snapshot);
            return Ok(TickOutcome::TimedOut(snapshot));
        }

        let result = self.physics.step(dt, &self.config.planet)?;
        self.record_distance(result.distance_to_planet_center);

        if result.status == StepStatus::Impacted {
            let snapshot = self.terminate(TerminationReason::Impacted);
            info!(
                "Impact at {:.2} km/s: {}",
                vector::length(result.velocity) / 1000.0,
                snapshot
            );
            return Ok(TickOutcome::Impacted(snapshot));
        }

        let recorded = self.trajectory.offer(result.position, self.config.resolution);
        Ok(TickOutcome::Advanced { recorded })
    }

    /// One tick at the configured cadence: `dt` simulated seconds per
    /// `1 / fps` real seconds.
    pub fn tick_frame(&mut self) -> Result<TickOutcome, SimulationError> {
        self.tick(self.config.dt, self.config.frame_duration())
    }

    /// Pause a running simulation or resume a paused one.
    ///
    /// Pausing records and logs a diagnostic snapshot. Resuming keeps all
    /// state. Idle and terminated controllers are left as they are.
    pub fn toggle_playback(&mut self) -> SimulationState {
        match self.state {
            SimulationState::Running => {
                self.state = SimulationState::Paused;
                let snapshot = self.snapshot();
                self.last_snapshot = Some(snapshot);
                info!("Simulation paused: {}", snapshot);
            }
            SimulationState::Paused => {
                self.state = SimulationState::Running;
                info!("Simulation resumed");
            }
            SimulationState::Idle | SimulationState::Terminated(_) => {}
        }
        self.state
    }

    /// Diagnostic snapshot of the current run.
    ///
    /// Before the first step there are no extrema, so both deviations are zero.
    pub fn snapshot(&self) -> DiagnosticSnapshot {
        let simulation_time = self.physics.simulation_time();
        let reference = self.reference_distance;
        let sampled = self.min_distance.is_finite();

        let (max_deviation_pct, min_deviation_pct) = if sampled && reference > 0.0 {
            (
                self.max_distance / reference * 100.0 - 100.0,
                100.0 - self.min_distance / reference * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        DiagnosticSnapshot {
            simulation_time,
            simulation_days: simulation_time / SECONDS_PER_DAY,
            max_distance: self.max_distance,
            min_distance: self.min_distance,
            max_deviation_pct,
            min_deviation_pct,
        }
    }

    /// Snapshot taken at the most recent pause or termination of this run.
    pub fn last_snapshot(&self) -> Option<DiagnosticSnapshot> {
        self.last_snapshot
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.state {
            SimulationState::Terminated(reason) => Some(reason),
            _ => None,
        }
    }

    /// Recorded trajectory points, first point is the launch position.
    pub fn trajectory(&self) -> &[DVec2] {
        self.trajectory.points()
    }

    pub fn recorder(&self) -> &TrajectoryRecorder {
        &self.trajectory
    }

    pub fn physics(&self) -> &PhysicsState {
        &self.physics
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn launch_position(&self) -> DVec2 {
        self.launch_position
    }

    pub fn launch_velocity(&self) -> DVec2 {
        self.launch_velocity
    }

    pub fn elapsed_real_time(&self) -> f64 {
        self.elapsed_real_time
    }

    /// Smallest distance from the center seen this run (`+inf` before the first step).
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Largest distance from the center seen this run (0 before the first step).
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn reference_distance(&self) -> f64 {
        self.reference_distance
    }

    fn record_distance(&mut self, distance: f64) {
        if distance > self.max_distance {
            self.max_distance = distance;
        }
        if distance < self.min_distance {
            self.min_distance = distance;
        }
    }

    fn terminate(&mut self, reason: TerminationReason) -> DiagnosticSnapshot {
        self.state = SimulationState::Terminated(reason);
        let snapshot = self.snapshot();
        self.last_snapshot = Some(snapshot);
        snapshot
    }
}
