//! Mesh loading: OBJ parsing and vertex indexing.
//!
//! [`load_mesh`] is the single entry point used by the viewer. The result is
//! immutable for the lifetime of the process.

/// Vertex deduplication into an indexed mesh.
pub mod indexer;
/// Wavefront OBJ reader.
pub mod obj;

use std::path::Path;

use glam::{Vec2, Vec3};

use crate::error::OrbitError;

/// An indexed triangle mesh with per-vertex UVs and normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Unique vertex positions.
    pub positions: Vec<Vec3>,
    /// Texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vec2>,
    /// Normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Triangle list indices into the vertex arrays.
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Number of unique vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles described by the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Load an OBJ file and index it.
///
/// # Errors
///
/// Returns [`OrbitError::MeshLoad`] if the file is unreadable, malformed,
/// or needs more vertices than a 16-bit index can address.
pub fn load_mesh(path: &Path) -> Result<Mesh, OrbitError> {
    let soup = obj::load_obj(path)?;
    let mesh = indexer::index_vertices(&soup)?;
    log::info!(
        "loaded {}: {} corners -> {} vertices, {} triangles",
        path.display(),
        soup.positions.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
