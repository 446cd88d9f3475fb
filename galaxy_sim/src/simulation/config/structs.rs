// galaxy_sim/src/simulation/config/structs.rs

use bevy::prelude::Resource;
use galaxy_core::prelude::{GalaxyParameters, Rgb};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =========================================================================
// == Top-Level Configuration Resource ==
// =========================================================================

/// # GalaxyConfig
/// The primary Bevy resource holding all configuration for a viewer run.
/// This struct is the root of the data parsed from `galaxy.toml`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct GalaxyConfig {
    /// The starting parameter set.
    pub galaxy: GalaxyParameters,
    pub render: RenderConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
}

// =========================================================================
// == Configuration Sub-Structs ==
// These map directly to the sections in galaxy.toml.
// =========================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Edge length of one particle sprite, in world units.
    pub point_size: f32,
    /// Asset path (relative to the asset folder) of the sprite alpha mask.
    /// A soft radial mask is generated when this is absent.
    pub alpha_map: Option<PathBuf>,
    /// Resolution of the generated mask, in pixels per side.
    pub mask_resolution: u32,
    /// Spin of the whole point cloud around its Y axis, in rad/s.
    pub rotation_speed: f32,
    /// Where the point cloud sits in the scene.
    pub position: [f32; 3],
    pub clear_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            point_size: 0.03,
            alpha_map: None,
            mask_resolution: 64,
            rotation_speed: 0.02,
            position: [0.0, 0.5, -4.0],
            clear_color: Rgb::new(0.0, 0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Initial eye position. The orbit focus is the point cloud's position.
    pub position: [f32; 3],
    /// Vertical field of view.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of the remaining orbit motion applied per 60 Hz frame.
    /// 1.0 disables smoothing.
    pub damping: f32,
    /// Radians of orbit per pixel dragged.
    pub rotate_speed: f32,
    /// Relative zoom per scroll line.
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 0.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            damping: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    /// Whether the debug panel starts expanded.
    pub show_panel: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Galaxy".to_string(),
            show_panel: false,
        }
    }
}
