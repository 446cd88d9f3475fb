// galaxy_sim/src/simulation/plugins/camera/mod.rs

//! A damped orbit camera: left-drag rotates around the focus, the wheel
//! zooms. Input is ignored while the debug panel owns the pointer.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use std::f32::consts::FRAC_PI_2;

use crate::prelude::*;

/// Keeps the camera off the poles, where yaw becomes meaningless.
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;
pub const MIN_RADIUS: f32 = 0.2;
pub const MAX_RADIUS: f32 = 50.0;

/// Pixel-based wheels report roughly this many units per line.
const PIXELS_PER_LINE: f32 = 40.0;

/// Set by the debug panel each frame it wants the mouse for itself.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelPointerCapture(pub bool);

// =========================================================================
// == Orbit State ==
// =========================================================================

/// Spherical coordinates of the camera around `focus`.
///
/// Input moves the `target_*` fields; [`OrbitCamera::advance`] eases the
/// current values towards them.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_radius: f32,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    /// Zero or one snaps straight to the target.
    pub damping: f32,
    /// Radians per pixel of drag.
    pub rotate_speed: f32,
    /// Relative radius change per wheel line.
    pub zoom_speed: f32,
}

impl OrbitCamera {
    /// Places the orbit so that the camera sits at `eye`, looking at `focus`.
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);
        let yaw = offset.x.atan2(offset.z);
        let pitch = if offset.length() > f32::EPSILON {
            (offset.y / offset.length()).clamp(-1.0, 1.0).asin()
        } else {
            0.0
        }
        .clamp(-MAX_PITCH, MAX_PITCH);

        Self {
            focus,
            yaw,
            pitch,
            radius,
            target_yaw: yaw,
            target_pitch: pitch,
            target_radius: radius,
            damping: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_speeds(mut self, rotate_speed: f32, zoom_speed: f32) -> Self {
        self.rotate_speed = rotate_speed;
        self.zoom_speed = zoom_speed;
        self
    }

    /// World position of the camera for the current (not target) angles.
    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.focus + rotation * Vec3::new(0.0, 0.0, self.radius)
    }

    /// Dragging right swings the camera left around the focus; dragging
    /// down raises it.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.target_yaw -= delta.x * self.rotate_speed;
        self.target_pitch =
            (self.target_pitch + delta.y * self.rotate_speed).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Positive `lines` (wheel up) moves closer.
    pub fn apply_zoom(&mut self, lines: f32) {
        let factor = (1.0 - self.zoom_speed).max(0.01).powf(lines);
        self.target_radius = (self.target_radius * factor).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Eases towards the targets. The blend is expressed per 60 Hz frame so
    /// the feel does not depend on the frame rate.
    pub fn advance(&mut self, dt: f32) {
        let blend = if self.damping <= 0.0 || self.damping >= 1.0 {
            1.0
        } else {
            1.0 - (1.0 - self.damping).powf(dt * 60.0)
        };

        self.yaw += (self.target_yaw - self.yaw) * blend;
        self.pitch += (self.target_pitch - self.pitch) * blend;
        self.radius += (self.target_radius - self.radius) * blend;
    }
}

// =========================================================================
// == Plugin ==
// =========================================================================

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelPointerCapture>().add_systems(
            Update,
            (
                orbit_camera_input.in_set(GalaxySet::Input),
                orbit_camera_transform.in_set(GalaxySet::Animate),
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}

fn orbit_camera_input(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    capture: Option<Res<PanelPointerCapture>>,
    mut query: Query<&mut OrbitCamera>,
) {
    if capture.is_some_and(|c| c.0) {
        return;
    }

    let drag = if buttons.pressed(MouseButton::Left) {
        motion.delta
    } else {
        Vec2::ZERO
    };
    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    if drag == Vec2::ZERO && lines == 0.0 {
        return;
    }

    for mut orbit in &mut query {
        orbit.apply_drag(drag);
        orbit.apply_zoom(lines);
    }
}

fn orbit_camera_transform(time: Res<Time>, mut query: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut orbit, mut transform) in &mut query {
        orbit.advance(time.delta_secs());
        *transform = Transform::from_translation(orbit.eye()).looking_at(orbit.focus, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_eye_reproduces_the_eye() {
        let focus = Vec3::new(0.0, 0.5, -4.0);
        let eye = Vec3::new(0.0, 2.0, 0.0);
        let orbit = OrbitCamera::from_eye(eye, focus);

        let back = orbit.eye();
        assert_abs_diff_eq!(back.x, eye.x, epsilon = 1e-5);
        assert_abs_diff_eq!(back.y, eye.y, epsilon = 1e-5);
        assert_abs_diff_eq!(back.z, eye.z, epsilon = 1e-5);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        assert!(orbit.pitch <= MAX_PITCH);

        orbit.apply_drag(Vec2::new(0.0, 1.0e6));
        assert_eq!(orbit.target_pitch, MAX_PITCH);
        orbit.apply_drag(Vec2::new(0.0, -1.0e6));
        assert_eq!(orbit.target_pitch, -MAX_PITCH);
    }

    #[test]
    fn zoom_moves_closer_and_stays_in_range() {
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        orbit.apply_zoom(1.0);
        assert_abs_diff_eq!(orbit.target_radius, 4.5, epsilon = 1e-5);

        orbit.apply_zoom(-1.0e4);
        assert_eq!(orbit.target_radius, MAX_RADIUS);
        orbit.apply_zoom(1.0e4);
        assert_eq!(orbit.target_radius, MIN_RADIUS);
    }

    #[test]
    fn damping_eases_towards_the_target() {
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        orbit.apply_drag(Vec2::new(-100.0, 0.0));
        let target = orbit.target_yaw;

        orbit.advance(1.0 / 60.0);
        assert_abs_diff_eq!(orbit.yaw, target * 0.05, epsilon = 1e-5);

        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert_abs_diff_eq!(orbit.yaw, target, epsilon = 1e-4);
    }

    #[test]
    fn zero_damping_snaps() {
        let mut orbit =
            OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).with_damping(0.0);
        orbit.apply_zoom(2.0);
        orbit.advance(1.0 / 60.0);
        assert_eq!(orbit.radius, orbit.target_radius);
    }

    fn input_app(captured: bool) -> (App, Entity) {
        let mut app = App::new();
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        app.insert_resource(buttons)
            .insert_resource(AccumulatedMouseMotion {
                delta: Vec2::new(10.0, 0.0),
            })
            .insert_resource(AccumulatedMouseScroll {
                unit: MouseScrollUnit::Pixel,
                delta: Vec2::new(0.0, 40.0),
            })
            .insert_resource(PanelPointerCapture(captured))
            .add_systems(Update, orbit_camera_input);

        let entity = app
            .world_mut()
            .spawn(OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO))
            .id();
        (app, entity)
    }

    #[test]
    fn drag_and_scroll_move_the_targets() {
        let (mut app, entity) = input_app(false);
        app.update();

        let orbit = app.world().get::<OrbitCamera>(entity).unwrap();
        assert_abs_diff_eq!(orbit.target_yaw, -0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(orbit.target_radius, 4.5, epsilon = 1e-5);
    }

    #[test]
    fn panel_capture_blocks_camera_input() {
        let (mut app, entity) = input_app(true);
        app.update();

        let orbit = app.world().get::<OrbitCamera>(entity).unwrap();
        assert_eq!(orbit.target_yaw, 0.0);
        assert_eq!(orbit.target_radius, 5.0);
    }
}
