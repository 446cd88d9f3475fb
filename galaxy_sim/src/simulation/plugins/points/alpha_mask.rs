// galaxy_sim/src/simulation/plugins/points/alpha_mask.rs

use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

/// Mask value at pixel `(x, y)` of a `size`-square soft disc: opaque at the
/// center, fading quadratically to zero at the inscribed circle.
pub fn soft_disc_alpha(x: u32, y: u32, size: u32) -> u8 {
    let center = (size.max(2) - 1) as f32 / 2.0;
    let dx = (x as f32 - center) / center;
    let dy = (y as f32 - center) / center;
    let falloff = (1.0 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
    (falloff * falloff * 255.0).round() as u8
}

/// Builds the fallback sprite mask used when no texture is configured.
pub fn soft_disc_mask(size: u32) -> Image {
    let size = size.max(2);
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let a = soft_disc_alpha(x, y, size);
            data.extend_from_slice(&[a, a, a, 255]);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::RENDER_WORLD,
    )
}
