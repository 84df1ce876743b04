//! Static vertex/index buffers uploaded once at startup.

use wgpu::util::DeviceExt;

use crate::gpu::vertex::{interleave, Vertex};
use crate::mesh::Mesh;
use crate::scene::Quad;

/// GPU-resident geometry: an interleaved vertex buffer plus an optional
/// 16-bit index buffer.
pub struct GeometryBuffer {
    vertices: wgpu::Buffer,
    indices: Option<wgpu::Buffer>,
    /// Vertices drawn for non-indexed geometry, indices otherwise.
    element_count: u32,
}

impl GeometryBuffer {
    /// Upload the quad as a non-indexed triangle list.
    pub fn from_quad(device: &wgpu::Device, quad: &Quad) -> Self {
        let vertices = interleave(&quad.positions, &quad.uvs, &quad.normals);
        Self {
            vertices: vertex_buffer(device, "Quad Vertices", &vertices),
            indices: None,
            element_count: quad.vertex_count(),
        }
    }

    /// Upload an indexed mesh.
    pub fn from_mesh(device: &wgpu::Device, mesh: &Mesh) -> Self {
        let vertices = interleave(&mesh.positions, &mesh.uvs, &mesh.normals);
        let indices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertices: vertex_buffer(device, "Mesh Vertices", &vertices),
            indices: Some(indices),
            element_count: mesh.indices.len() as u32,
        }
    }

    /// Bind the buffers and issue the draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertices.slice(..));
        match &self.indices {
            Some(indices) => {
                pass.set_index_buffer(
                    indices.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                pass.draw_indexed(0..self.element_count, 0, 0..1);
            }
            None => pass.draw(0..self.element_count, 0..1),
        }
    }
}

fn vertex_buffer(
    device: &wgpu::Device,
    label: &str,
    vertices: &[Vertex],
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}
