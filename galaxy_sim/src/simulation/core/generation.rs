// galaxy_sim/src/simulation/core/generation.rs

use bevy::prelude::*;
use galaxy_core::prelude::{generate, GalaxyParameters, ParticleBuffer};
use std::sync::Arc;
use std::time::Instant;

use super::app_state::GalaxySet;

/// The most recent generation result.
///
/// The buffer is never mutated in place: every regeneration swaps in a new
/// `Arc`, so anything still holding the previous one keeps a complete cloud.
#[derive(Resource, Debug, Clone, Default)]
pub struct GalaxyBuffers {
    pub buffer: Arc<ParticleBuffer>,
    /// Incremented on every regeneration; 0 means nothing generated yet.
    pub generation: u64,
}

pub struct GalaxyGenerationPlugin;

impl Plugin for GalaxyGenerationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalaxyParameters>()
            .init_resource::<GalaxyBuffers>()
            .configure_sets(
                Update,
                (
                    GalaxySet::Input,
                    GalaxySet::Regenerate,
                    GalaxySet::Upload,
                    GalaxySet::Animate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                regenerate_galaxy
                    .in_set(GalaxySet::Regenerate)
                    .run_if(resource_changed::<GalaxyParameters>),
            );
    }
}

/// Runs the generator from scratch whenever the parameter resource changed.
fn regenerate_galaxy(params: Res<GalaxyParameters>, mut buffers: ResMut<GalaxyBuffers>) {
    let started = Instant::now();
    let buffer = generate(&params);
    let summary = buffer.summary();

    buffers.buffer = Arc::new(buffer);
    buffers.generation += 1;

    debug!(
        "[GALAXY] Generation {}: {} particles in {:.1} ms (max radius {:.3}).",
        buffers.generation,
        summary.particles,
        started.elapsed().as_secs_f64() * 1_000.0,
        summary.max_radius
    );
    if summary.non_finite > 0 {
        warn!(
            "[GALAXY] {} of {} particles have non-finite coordinates (spread {} vs radius {}).",
            summary.non_finite, summary.particles, params.spread, params.radius
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(params: GalaxyParameters) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(params)
            .add_plugins(GalaxyGenerationPlugin);
        app
    }

    #[test]
    fn first_update_generates_the_configured_cloud() {
        let mut app = test_app(GalaxyParameters {
            count: 2.0,
            ..Default::default()
        });
        app.update();

        let buffers = app.world().resource::<GalaxyBuffers>();
        assert_eq!(buffers.generation, 1);
        assert_eq!(buffers.buffer.len(), 100);
    }

    #[test]
    fn unchanged_parameters_do_not_regenerate() {
        let mut app = test_app(GalaxyParameters {
            count: 2.0,
            ..Default::default()
        });
        app.update();
        app.update();
        app.update();
        assert_eq!(app.world().resource::<GalaxyBuffers>().generation, 1);
    }

    #[test]
    fn edits_swap_in_a_new_buffer() {
        let mut app = test_app(GalaxyParameters {
            count: 2.0,
            ..Default::default()
        });
        app.update();
        let before = app.world().resource::<GalaxyBuffers>().clone();

        app.world_mut().resource_mut::<GalaxyParameters>().seed = 20_000;
        app.update();
        let after = app.world().resource::<GalaxyBuffers>().clone();

        assert_eq!(after.generation, 2);
        assert!(!Arc::ptr_eq(&before.buffer, &after.buffer));
        assert_ne!(before.buffer.positions, after.buffer.positions);
        // The old buffer is still whole for whoever held on to it.
        assert_eq!(before.buffer.len(), 100);
    }

    #[test]
    fn count_edits_resize_the_buffers() {
        let mut app = test_app(GalaxyParameters {
            count: 2.0,
            ..Default::default()
        });
        app.update();
        app.world_mut().resource_mut::<GalaxyParameters>().count = 3.0;
        app.update();

        let buffers = app.world().resource::<GalaxyBuffers>();
        assert_eq!(buffers.buffer.len(), 1_000);
        assert_eq!(buffers.buffer.colors.len(), 3_000);
    }
}
