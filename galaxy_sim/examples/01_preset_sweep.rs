// galaxy_sim/examples/01_preset_sweep.rs

//! Generates every preset in the catalog once, without a window, and prints
//! a summary line per preset. Handy for spotting parameter sets that produce
//! non-finite points before opening them in the viewer.
//!
//! To run this example:
//! `cargo run --example 01_preset_sweep`

use std::path::Path;
use std::time::Instant;

use galaxy_core::prelude::*;
use galaxy_sim::simulation::config::load_catalog_from_disk;

fn main() {
    // --- 1. Load the preset catalog ---
    let catalog = load_catalog_from_disk(Path::new("assets/presets"));
    if catalog.is_empty() {
        println!("No presets found, sweeping the default parameters only.");
    }

    let mut sets: Vec<(String, GalaxyParameters)> = catalog
        .0
        .iter()
        .map(|(name, params)| (name.clone(), params.clone()))
        .collect();
    sets.push(("default".to_string(), GalaxyParameters::default()));

    // --- 2. Generate each one with both random sources ---
    for (name, params) in sets {
        for rng in RngAlgorithm::ALL {
            let params = GalaxyParameters {
                rng,
                ..params.clone()
            };
            let started = Instant::now();
            let summary = generate(&params).summary();
            println!(
                "{name:>16} [{:>7}] {:>8} particles, {:>5} non-finite, max radius {:>7.3} ({:.1} ms)",
                rng.label(),
                summary.particles,
                summary.non_finite,
                summary.max_radius,
                started.elapsed().as_secs_f64() * 1_000.0
            );
        }
    }
}
