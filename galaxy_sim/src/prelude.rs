// galaxy_sim/src/prelude.rs

// Re-export the entire Bevy prelude for convenience.
pub use bevy::prelude::*;

// Re-export the entire galaxy_core prelude so you can easily access
// pure types like `GalaxyParameters`, `ParticleBuffer`, `Rgb`, etc.
pub use galaxy_core::prelude::*;

// Re-export common simulation-specific types for easy access in other plugins.
pub use crate::cli::Cli;
pub use crate::simulation::config::structs::*;
pub use crate::simulation::config::PresetCatalog;
pub use crate::simulation::core::app_state::{AppState, GalaxySet};
pub use crate::simulation::core::generation::GalaxyBuffers;
pub use crate::simulation::core::rgb_to_bevy_color;
