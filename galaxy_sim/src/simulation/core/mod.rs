// galaxy_sim/src/simulation/core/mod.rs

use bevy::prelude::Color;
use galaxy_core::prelude::Rgb;

pub mod app_state;
pub mod generation;

/// Core colors are plain sRGB components; Bevy wants to know that explicitly.
pub fn rgb_to_bevy_color(rgb: Rgb) -> Color {
    Color::srgb(rgb.r(), rgb.g(), rgb.b())
}
