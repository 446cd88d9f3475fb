// galaxy_sim/src/simulation/plugins/points/mod.rs

//! The point-cloud primitive: turns `GalaxyBuffers` into a sprite mesh,
//! keeps the material in sync with the panel and spins the cloud.

use bevy::{asset::load_internal_asset, render::view::NoFrustumCulling};

use crate::prelude::*;

mod alpha_mask;
mod material;
mod mesh;

pub use alpha_mask::{soft_disc_alpha, soft_disc_mask};
pub use material::{GalaxyPointsMaterial, PointSpriteUniform, GALAXY_POINTS_SHADER_HANDLE};
pub use mesh::build_points_mesh;

/// The sprite mask handed to the material, loaded or generated while in
/// `AppState::Loading`.
#[derive(Resource, Debug, Clone)]
pub struct AlphaMask(pub Handle<Image>);

/// Live, panel-editable look of the sprites.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub size: f32,
    pub rotation_speed: f32,
}

/// Marks the entity carrying the galaxy mesh.
#[derive(Component, Debug, Default)]
pub struct GalaxyPoints {
    /// The `GalaxyBuffers::generation` currently on the GPU.
    pub uploaded_generation: u64,
}

pub struct GalaxyPointsPlugin;

impl Plugin for GalaxyPointsPlugin {
    fn build(&self, app: &mut App) {
        load_internal_asset!(
            app,
            GALAXY_POINTS_SHADER_HANDLE,
            "galaxy_points.wgsl",
            Shader::from_wgsl
        );

        let render = app
            .world()
            .get_resource::<GalaxyConfig>()
            .map(|config| config.render.clone())
            .unwrap_or_default();

        app.add_plugins(MaterialPlugin::<GalaxyPointsMaterial> {
            prepass_enabled: false,
            shadows_enabled: false,
            ..default()
        })
        .insert_resource(PointStyle {
            size: render.point_size,
            rotation_speed: render.rotation_speed,
        })
        .add_systems(OnEnter(AppState::Running), spawn_galaxy_points)
        .add_systems(
            Update,
            (
                (
                    upload_galaxy_mesh.run_if(resource_changed::<GalaxyBuffers>),
                    apply_point_style.run_if(resource_changed::<PointStyle>),
                )
                    .in_set(GalaxySet::Upload),
                spin_galaxy.in_set(GalaxySet::Animate),
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}

fn spawn_galaxy_points(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GalaxyPointsMaterial>>,
    buffers: Res<GalaxyBuffers>,
    style: Res<PointStyle>,
    mask: Res<AlphaMask>,
    config: Res<GalaxyConfig>,
) {
    info!(
        "[SPAWN] Spawning galaxy point cloud with {} particles.",
        buffers.buffer.len()
    );

    let [x, y, z] = config.render.position;
    commands.spawn((
        Name::new("Galaxy"),
        Mesh3d(meshes.add(build_points_mesh(&buffers.buffer))),
        MeshMaterial3d(materials.add(GalaxyPointsMaterial::new(style.size, mask.0.clone()))),
        Transform::from_xyz(x, y, z),
        GalaxyPoints {
            uploaded_generation: buffers.generation,
        },
        // The bounds change with every regeneration; skip culling altogether.
        NoFrustumCulling,
    ));
}

/// Swaps a freshly built mesh in whenever the buffers were regenerated.
/// The previous mesh asset is dropped with its last handle.
fn upload_galaxy_mesh(
    buffers: Res<GalaxyBuffers>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<(&mut Mesh3d, &mut GalaxyPoints)>,
) {
    for (mut mesh, mut points) in &mut query {
        if points.uploaded_generation == buffers.generation {
            continue;
        }
        mesh.0 = meshes.add(build_points_mesh(&buffers.buffer));
        points.uploaded_generation = buffers.generation;
        debug!(
            "[GALAXY] Uploaded generation {} ({} particles).",
            buffers.generation,
            buffers.buffer.len()
        );
    }
}

fn apply_point_style(
    style: Res<PointStyle>,
    mut materials: ResMut<Assets<GalaxyPointsMaterial>>,
    query: Query<&MeshMaterial3d<GalaxyPointsMaterial>, With<GalaxyPoints>>,
) {
    for handle in &query {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.sprite.size = style.size;
        }
    }
}

/// The render tick: a slow spin driven purely by elapsed time.
fn spin_galaxy(
    time: Res<Time>,
    style: Res<PointStyle>,
    mut query: Query<&mut Transform, With<GalaxyPoints>>,
) {
    let angle = time.elapsed_secs() * style.rotation_speed;
    for mut transform in &mut query {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::core::generation::GalaxyGenerationPlugin;
    use approx::assert_abs_diff_eq;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    /// Runs the upload and spin systems without a renderer.
    fn headless_points_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .insert_resource(GalaxyParameters {
                count: 1.0,
                ..Default::default()
            })
            .insert_resource(PointStyle {
                size: 0.03,
                rotation_speed: 0.5,
            })
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs(1)))
            .add_plugins(GalaxyGenerationPlugin)
            .add_systems(
                Update,
                (
                    upload_galaxy_mesh.in_set(GalaxySet::Upload),
                    spin_galaxy.in_set(GalaxySet::Animate),
                ),
            );
        app
    }

    #[test]
    fn regenerated_buffers_replace_the_mesh_handle() {
        let mut app = headless_points_app();
        let entity = app
            .world_mut()
            .spawn((
                Mesh3d(Handle::default()),
                GalaxyPoints::default(),
                Transform::default(),
            ))
            .id();

        app.update();
        let first = app.world().get::<Mesh3d>(entity).unwrap().0.clone();
        assert_eq!(app.world().get::<GalaxyPoints>(entity).unwrap().uploaded_generation, 1);
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(meshes.get(&first).unwrap().count_vertices(), 40);

        app.world_mut().resource_mut::<GalaxyParameters>().count = 2.0;
        app.update();
        let second = app.world().get::<Mesh3d>(entity).unwrap().0.clone();
        assert_ne!(first, second);
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(meshes.get(&second).unwrap().count_vertices(), 400);
    }

    #[test]
    fn spin_follows_elapsed_time() {
        let mut app = headless_points_app();
        let entity = app
            .world_mut()
            .spawn((
                Mesh3d(Handle::default()),
                GalaxyPoints::default(),
                Transform::default(),
            ))
            .id();

        app.update();
        app.update();
        let elapsed = app.world().resource::<Time>().elapsed_secs();
        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
        assert_abs_diff_eq!(yaw, elapsed * 0.5, epsilon = 1e-4);
    }
}
