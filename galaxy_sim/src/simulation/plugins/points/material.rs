// galaxy_sim/src/simulation/plugins/points/material.rs

use bevy::{
    asset::weak_handle,
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType,
            SpecializedMeshPipelineError,
        },
    },
};

/// Handle of the embedded `galaxy_points.wgsl`.
pub const GALAXY_POINTS_SHADER_HANDLE: Handle<Shader> =
    weak_handle!("5c3e7f0a-9b8d-4f41-a2c6-0d7e1b9f4a63");

/// The uniform block shared by every sprite of one point cloud.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct PointSpriteUniform {
    /// Multiplied into every vertex color.
    pub tint: Vec4,
    /// Sprite edge length in world units.
    pub size: f32,
}

/// Additive, camera-facing sprites masked by a grayscale texture.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GalaxyPointsMaterial {
    #[uniform(0)]
    pub sprite: PointSpriteUniform,
    #[texture(1)]
    #[sampler(2)]
    pub alpha_mask: Handle<Image>,
}

impl GalaxyPointsMaterial {
    pub fn new(size: f32, alpha_mask: Handle<Image>) -> Self {
        Self {
            sprite: PointSpriteUniform {
                tint: Vec4::ONE,
                size,
            },
            alpha_mask,
        }
    }
}

impl Material for GalaxyPointsMaterial {
    fn vertex_shader() -> ShaderRef {
        GALAXY_POINTS_SHADER_HANDLE.into()
    }

    fn fragment_shader() -> ShaderRef {
        GALAXY_POINTS_SHADER_HANDLE.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Only the attributes the sprite shader reads.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];

        // Sprites overlap heavily; none of them may hide the others.
        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            depth_stencil.depth_write_enabled = false;
        }
        Ok(())
    }
}
