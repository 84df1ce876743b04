use glam::{Vec2, Vec3};

/// Non-indexed square on the z = 0 plane, two triangles, facing +Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    /// Corner positions.
    pub positions: [Vec3; 6],
    /// Texture coordinates (top-left origin).
    pub uvs: [Vec2; 6],
    /// Normals, all +Z.
    pub normals: [Vec3; 6],
}

impl Quad {
    /// A square of side `width` centred on the origin.
    pub fn new(width: f32) -> Self {
        let h = width / 2.0;
        let positions = [
            Vec3::new(-h, -h, 0.0),
            Vec3::new(h, -h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
            Vec3::new(-h, -h, 0.0),
        ];
        let uvs = [
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];
        Self {
            positions,
            uvs,
            normals: [Vec3::Z; 6],
        }
    }

    /// Vertex count for a non-indexed draw.
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }
}
