// galaxy_sim/src/simulation/core/app_state.rs

use bevy::{ecs::schedule::SystemSet, prelude::States};

/// Defines the major phases of the viewer's lifecycle.
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// The initial state. The sprite mask is being loaded or generated.
    #[default]
    Loading,

    /// The scene is built. The render loop is now running.
    Running,
}

// =========================================================================
// == Per-Frame Sets (The "Data Flow") ==
// =========================================================================

/// Orders the work done in `Update`. Regeneration is edit-driven and the
/// animation is time-driven; they live in separate sets and never share a system.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GalaxySet {
    /// Mouse and keyboard handling (camera orbit, panel toggle).
    Input,
    /// Rebuilds the particle buffers when the parameters changed.
    Regenerate,
    /// Pushes new buffers and material settings to the GPU-side assets.
    Upload,
    /// Time-driven motion: galaxy spin, camera damping.
    Animate,
}
