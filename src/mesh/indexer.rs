//! Vertex deduplication: turns a triangle soup into an indexed mesh.
//!
//! Two corners share an index only when position, UV and normal are
//! bit-identical.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use super::obj::TriangleSoup;
use super::Mesh;
use crate::error::OrbitError;

/// Bit pattern of one (position, uv, normal) triple.
type VertexKey = [u32; 8];

fn vertex_key(position: Vec3, uv: Vec2, normal: Vec3) -> VertexKey {
    [
        position.x.to_bits(),
        position.y.to_bits(),
        position.z.to_bits(),
        uv.x.to_bits(),
        uv.y.to_bits(),
        normal.x.to_bits(),
        normal.y.to_bits(),
        normal.z.to_bits(),
    ]
}

/// Deduplicate the corners of `soup` into shared vertices plus a `u16`
/// index list, preserving triangle order and winding.
///
/// # Errors
///
/// Fails when more than 65536 unique vertices would be needed.
pub fn index_vertices(soup: &TriangleSoup) -> Result<Mesh, OrbitError> {
    let corner_count = soup.positions.len();
    let mut seen: FxHashMap<VertexKey, u16> = FxHashMap::default();
    seen.reserve(corner_count / 2);

    let mut mesh = Mesh {
        positions: Vec::new(),
        uvs: Vec::new(),
        normals: Vec::new(),
        indices: Vec::with_capacity(corner_count),
    };

    for ((&position, &uv), &normal) in soup
        .positions
        .iter()
        .zip(&soup.uvs)
        .zip(&soup.normals)
    {
        let key = vertex_key(position, uv, normal);
        let index = if let Some(&existing) = seen.get(&key) {
            existing
        } else {
            let next = u16::try_from(mesh.positions.len()).map_err(|_| {
                OrbitError::MeshLoad(format!(
                    "mesh needs more than {} unique vertices",
                    usize::from(u16::MAX) + 1
                ))
            })?;
            mesh.positions.push(position);
            mesh.uvs.push(uv);
            mesh.normals.push(normal);
            let _ = seen.insert(key, next);
            next
        };
        mesh.indices.push(index);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::obj::parse_obj;

    #[test]
    fn shared_corners_collapse() {
        // Two triangles sharing an edge with identical attributes
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vn 0 0 1
f 1/1/1 2/1/1 3/1/1
f 1/1/1 3/1/1 4/1/1
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        let mesh = index_vertices(&soup).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn differing_normals_stay_separate() {
        let soup = TriangleSoup {
            positions: vec![Vec3::ZERO, Vec3::ZERO],
            uvs: vec![Vec2::ZERO, Vec2::ZERO],
            normals: vec![Vec3::Z, Vec3::X],
        };
        let mesh = index_vertices(&soup).unwrap();
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1]);
    }

    #[test]
    fn indexed_mesh_reproduces_every_corner() {
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
vt 0 0
vt 1 0
vt 1 1
f 1/1 2/2 3/3 4/1
f 1/1 5/2 2/3
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        let mesh = index_vertices(&soup).unwrap();
        assert_eq!(mesh.indices.len(), soup.positions.len());
        for (corner, &index) in mesh.indices.iter().enumerate() {
            let i = usize::from(index);
            assert_eq!(mesh.positions[i], soup.positions[corner]);
            assert_eq!(mesh.uvs[i], soup.uvs[corner]);
            assert_eq!(mesh.normals[i], soup.normals[corner]);
        }
    }

    #[test]
    fn too_many_unique_vertices_is_an_error() {
        let count = usize::from(u16::MAX) + 2;
        let positions: Vec<Vec3> =
            (0..count).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let soup = TriangleSoup {
            uvs: vec![Vec2::ZERO; count],
            normals: vec![Vec3::Z; count],
            positions,
        };
        assert!(matches!(
            index_vertices(&soup),
            Err(OrbitError::MeshLoad(_))
        ));
    }
}
