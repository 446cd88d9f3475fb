// galaxy_sim/src/lib.rs

use bevy::prelude::*;

// Import the plugins defined within the simulation crate.
use crate::simulation::config::ConfigPlugin;
use crate::simulation::core::app_state::AppState;
use crate::simulation::core::generation::GalaxyGenerationPlugin;
use crate::simulation::plugins::camera::OrbitCameraPlugin;
use crate::simulation::plugins::panel::DebugPanelPlugin;
use crate::simulation::plugins::points::GalaxyPointsPlugin;
use crate::simulation::plugins::world::spawner::WorldSpawnerPlugin;

// This prelude is for convenience for other files WITHIN the galaxy_sim crate.
pub mod prelude;

// This module contains all the simulation-specific logic.
pub mod cli;
pub mod simulation;

/// Everything needed to turn a `GalaxyConfig` into particle buffers, with no
/// window or renderer. Used on its own in headless mode.
pub struct GalaxyHeadlessPlugin;

impl Plugin for GalaxyHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            // Seeds the parameter set from the config, presets and CLI.
            ConfigPlugin,
            // Regenerates the buffers whenever the parameters change.
            GalaxyGenerationPlugin,
        ));
    }
}

/// The main plugin that brings together all the viewer parts.
/// `main.rs` just adds this one plugin to the Bevy App.
pub struct GalaxySimulationPlugin;

impl Plugin for GalaxySimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>();

        app.add_plugins((
            GalaxyHeadlessPlugin,
            // Loads the sprite mask, spawns the camera and clear color.
            WorldSpawnerPlugin,
            // Uploads the buffers into a billboarded point cloud and spins it.
            GalaxyPointsPlugin,
            OrbitCameraPlugin,
            DebugPanelPlugin,
        ));
    }
}
