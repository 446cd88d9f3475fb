// galaxy_sim/src/simulation/plugins/points/mesh.rs

use bevy::{
    asset::RenderAssetUsages,
    color::ColorToComponents,
    prelude::*,
    render::mesh::{Indices, PrimitiveTopology},
};
use galaxy_core::prelude::ParticleBuffer;

/// UV of each sprite corner, counter-clockwise.
const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Two triangles per sprite, relative to its first vertex.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Expands a particle buffer into a sprite mesh: four vertices per particle,
/// all at the particle's position, told apart by their UV. Vertex colors are
/// converted to linear RGB.
pub fn build_points_mesh(buffer: &ParticleBuffer) -> Mesh {
    let particles = buffer.len();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(particles * 4);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(particles * 4);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(particles * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(particles * 6);

    for (i, (position, color)) in buffer
        .positions_as_triplets()
        .zip(buffer.colors_as_triplets())
        .enumerate()
    {
        let linear = Color::srgb(color[0], color[1], color[2])
            .to_linear()
            .to_f32_array();
        for corner in CORNERS {
            positions.push(position);
            uvs.push(corner);
            colors.push(linear);
        }

        let base = (i * 4) as u32;
        indices.extend(QUAD_INDICES.iter().map(|offset| base + offset));
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}
