//! Interleaved vertex format shared by the quad and the mesh.

use glam::{Vec2, Vec3};

/// 32-byte vertex: position, texture coordinate and normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Model-space position.
    pub position: [f32; 3],
    /// Texture coordinate, origin at the top-left of the image.
    pub uv: [f32; 2],
    /// Model-space normal.
    pub normal: [f32; 3],
}

const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Float32x3];

impl Vertex {
    /// Buffer layout matching `VertexInput` in the scene shader.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Zip parallel attribute arrays into interleaved vertices.
///
/// The output length is that of the shortest input.
pub fn interleave(
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
) -> Vec<Vertex> {
    positions
        .iter()
        .zip(uvs)
        .zip(normals)
        .map(|((position, uv), normal)| Vertex {
            position: position.to_array(),
            uv: uv.to_array(),
            normal: normal.to_array(),
        })
        .collect()
}
