// galaxy_sim/src/simulation/plugins/world/spawner.rs

use bevy::asset::LoadState;

use crate::prelude::*;
use crate::simulation::plugins::camera::OrbitCamera;
use crate::simulation::plugins::points::{soft_disc_mask, AlphaMask};

// --- Resources to track loading state ---

/// Set while a configured sprite texture is still on its way from disk.
#[derive(Resource)]
struct PendingAlphaMask(Handle<Image>);

pub struct WorldSpawnerPlugin;

impl Plugin for WorldSpawnerPlugin {
    fn build(&self, app: &mut App) {
        app
            // --- STAGE 1: ASSET LOADING ---
            // Kicks off the mask load, or generates one right away.
            .add_systems(OnEnter(AppState::Loading), start_alpha_mask_loading)
            // Waits for the mask before transitioning to the next state.
            .add_systems(
                Update,
                check_for_alpha_mask_completion.run_if(in_state(AppState::Loading)),
            )
            // --- STAGE 2: SCENE ---
            .add_systems(OnEnter(AppState::Running), spawn_camera_and_background);
    }
}

fn start_alpha_mask_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    config: Res<GalaxyConfig>,
) {
    match &config.render.alpha_map {
        Some(path) => {
            info!("[ASSETS] Starting to load sprite mask: {}", path.display());
            let handle: Handle<Image> = asset_server.load(path.clone());
            commands.insert_resource(PendingAlphaMask(handle));
        }
        None => {
            debug!(
                "[ASSETS] No sprite mask configured, generating a {}px soft disc.",
                config.render.mask_resolution
            );
            let handle = images.add(soft_disc_mask(config.render.mask_resolution));
            commands.insert_resource(AlphaMask(handle));
        }
    }
}

/// Moves on once the mask exists. A texture that fails to load is replaced
/// by the generated disc rather than stalling the viewer.
fn check_for_alpha_mask_completion(
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    config: Res<GalaxyConfig>,
    pending: Option<Res<PendingAlphaMask>>,
) {
    let Some(pending) = pending else {
        next_state.set(AppState::Running);
        return;
    };

    match asset_server.get_load_state(&pending.0) {
        Some(LoadState::Loaded) => {
            info!("[ASSETS] Sprite mask loaded.");
            commands.insert_resource(AlphaMask(pending.0.clone()));
        }
        Some(LoadState::Failed(e)) => {
            error!(
                "[ASSETS] Failed to load sprite mask ({}); falling back to a generated one.",
                e
            );
            let handle = images.add(soft_disc_mask(config.render.mask_resolution));
            commands.insert_resource(AlphaMask(handle));
        }
        _ => return,
    }

    commands.remove_resource::<PendingAlphaMask>();
    next_state.set(AppState::Running);
}

fn spawn_camera_and_background(mut commands: Commands, config: Res<GalaxyConfig>) {
    commands.insert_resource(ClearColor(rgb_to_bevy_color(config.render.clear_color)));

    let camera = &config.camera;
    let eye = Vec3::from_array(camera.position);
    // The camera orbits the point cloud, wherever it was placed.
    let focus = Vec3::from_array(config.render.position);

    info!(
        "[SPAWN] Spawning orbit camera at {:?}, looking at {:?}.",
        eye, focus
    );

    commands.spawn((
        Name::new("Orbit Camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(eye).looking_at(focus, Vec3::Y),
        OrbitCamera::from_eye(eye, focus)
            .with_damping(camera.damping)
            .with_speeds(camera.rotate_speed, camera.zoom_speed),
    ));
}
