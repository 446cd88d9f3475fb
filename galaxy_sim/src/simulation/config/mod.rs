// galaxy_sim/src/simulation/config/mod.rs

//! This module handles loading the viewer configuration from disk, the
//! preset catalog, and working out which parameter set the run starts from.

mod catalog;

pub mod structs;

use bevy::prelude::*;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use galaxy_core::prelude::GalaxyParameters;
use std::path::Path;
use thiserror::Error;

use crate::cli::Cli;

// Re-export public types
pub use catalog::{load_catalog_from_disk, PresetCatalog};
pub use structs::GalaxyConfig;

/// Layers the built-in defaults under the config file. A missing file
/// simply leaves the defaults in place.
pub fn load_config(path: &Path) -> Result<GalaxyConfig, figment::Error> {
    base_figment().merge(Toml::file(path)).extract()
}

/// Same as [`load_config`], for TOML already held in memory.
pub fn load_config_str(toml: &str) -> Result<GalaxyConfig, figment::Error> {
    base_figment().merge(Toml::string(toml)).extract()
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(GalaxyConfig::default()))
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("preset '{name}' not found in the catalog (available: {available})")]
pub struct UnknownPresetError {
    pub name: String,
    pub available: String,
}

/// Picks the parameter set a run starts from: the config's `[galaxy]` table,
/// replaced by a named preset if one was requested, then the seed override.
pub fn starting_parameters(
    config: &GalaxyConfig,
    catalog: &PresetCatalog,
    preset: Option<&str>,
    seed: Option<u64>,
) -> Result<GalaxyParameters, UnknownPresetError> {
    let mut params = match preset {
        Some(name) => catalog
            .get(name)
            .cloned()
            .ok_or_else(|| UnknownPresetError {
                name: name.to_string(),
                available: catalog.names().collect::<Vec<_>>().join(", "),
            })?,
        None => config.galaxy.clone(),
    };

    if let Some(seed) = seed {
        params.seed = seed;
    }
    Ok(params)
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // The config and CLI are inserted by the binary; fall back to
        // defaults so the plugin also works in tests and examples.
        let config = app
            .world()
            .get_resource::<GalaxyConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(config.galaxy.clone())
            .insert_resource(config)
            .init_resource::<Cli>()
            .init_resource::<PresetCatalog>()
            .add_systems(Startup, load_presets_and_apply_cli);
    }
}

/// Loads the preset catalog and applies the `--preset`/`--seed` overrides
/// before the first generation runs.
pub fn load_presets_and_apply_cli(
    cli: Res<Cli>,
    config: Res<GalaxyConfig>,
    mut catalog: ResMut<PresetCatalog>,
    mut params: ResMut<GalaxyParameters>,
) {
    *catalog = load_catalog_from_disk(&cli.presets);

    match starting_parameters(&config, &catalog, cli.preset.as_deref(), cli.seed) {
        Ok(start) => {
            info!(
                "Starting galaxy: seed {}, {} particles, {} arms.",
                start.seed,
                start.particle_count(),
                start.branches
            );
            params.set_if_neq(start);
        }
        Err(e) => {
            error!("{}. Keeping the configured parameters.", e);
        }
    }
}
