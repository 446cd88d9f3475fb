// galaxy_sim/src/main.rs

//! The `galaxy` binary: opens the viewer, or with `--headless` generates the
//! configured galaxy once and logs a summary.

use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, log::LogPlugin, prelude::*};
use clap::Parser;

use galaxy_sim::cli::Cli;
use galaxy_sim::prelude::{GalaxyBuffers, GalaxyConfig};
use galaxy_sim::simulation::config::load_config;
use galaxy_sim::{GalaxyHeadlessPlugin, GalaxySimulationPlugin};

const LOG_FILTER: &str = "info,wgpu_core=error,wgpu_hal=error,galaxy_sim=debug,galaxy_core=debug";

fn log_plugin() -> LogPlugin {
    LogPlugin {
        level: bevy::log::Level::INFO,
        filter: LOG_FILTER.to_string(),
        ..default()
    }
}

fn main() -> AppExit {
    // --- 1. Parse CLI and load the configuration ---
    let cli = Cli::parse();

    // Logging is not up before the App exists, so this one goes to stderr.
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config '{}': {}", cli.config.display(), e);
            return AppExit::error();
        }
    };

    let mut app = App::new();
    let headless = cli.headless;

    // The plugins read both while building, so they go in first.
    app.insert_resource(config.clone()).insert_resource(cli);

    if headless {
        run_headless(app)
    } else {
        run_viewer(app, &config)
    }
}

/// One generation pass with no window, renderer or input.
fn run_headless(mut app: App) -> AppExit {
    app.add_plugins((MinimalPlugins, log_plugin(), GalaxyHeadlessPlugin));
    app.finish();
    app.cleanup();

    // Startup applies presets and CLI overrides, Update generates.
    app.update();

    let buffers = app.world().resource::<GalaxyBuffers>();
    let summary = buffers.buffer.summary();
    info!(
        "[HEADLESS] Generated {} particles, {} non-finite, max radius {:.4}.",
        summary.particles, summary.non_finite, summary.max_radius
    );
    AppExit::Success
}

fn run_viewer(mut app: App, config: &GalaxyConfig) -> AppExit {
    app.add_plugins(
        DefaultPlugins.set(log_plugin()).set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                ..default()
            }),
            ..default()
        }),
    )
    // Feeds the FPS readout in the panel.
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(GalaxySimulationPlugin);

    info!("Starting galaxy viewer...");
    app.run()
}
