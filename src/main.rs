//! Launchsim - headless launch simulation runner
//!
//! Runs one preset through the fixed-rate scheduler until the projectile
//! impacts or the playback cap is reached, logging the diagnostic snapshot.
//!
//! Usage: `launchsim [preset-id]` (defaults to `moon_orbit`).

use std::process::ExitCode;
use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use launchsim::controller::SimulationController;
use launchsim::playback::SimulationPlugin;
use launchsim::presets::{PRESETS, get_preset};

fn main() -> ExitCode {
    let preset_id = std::env::args().nth(1).unwrap_or_else(|| "moon_orbit".to_string());
    let Some(preset) = get_preset(&preset_id) else {
        eprintln!("Unknown preset: {preset_id}");
        eprintln!("Available presets:");
        for preset in PRESETS {
            eprintln!("  {:<16} {}", preset.id, preset.description);
        }
        return ExitCode::FAILURE;
    };

    let config = preset.config();
    let frame = Duration::from_secs_f64(config.frame_duration() / 4.0);
    let plugin = match SimulationPlugin::new(config) {
        Ok(plugin) => plugin,
        Err(err) => {
            eprintln!("Invalid configuration for {}: {err}", preset.id);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(plugin);
    app.finish();
    app.cleanup();

    info!("Running preset: {} ({})", preset.name, preset.id);

    loop {
        app.update();
        if !app.world().resource::<SimulationController>().is_playing() {
            break;
        }
        std::thread::sleep(frame);
    }

    let controller = app.world().resource::<SimulationController>();
    info!(
        "Finished with {:?} after {} trajectory points: {}",
        controller.state(),
        controller.trajectory().len(),
        controller.last_snapshot().unwrap_or_else(|| controller.snapshot())
    );
    ExitCode::SUCCESS
}
