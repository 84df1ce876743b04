//! Model transforms for the fixed scene.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

/// Number of mesh copies placed around the origin.
pub const INSTANCE_COUNT: usize = 4;

/// Offset applied to each copy after its rotations.
const INSTANCE_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 1.87);

/// `projection * view * model`.
pub fn compose_transform(projection: Mat4, view: Mat4, model: Mat4) -> Mat4 {
    projection * view * model
}

/// A static placement of one mesh copy in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInstance {
    /// Model-to-world transform.
    pub model: Mat4,
}

impl ModelInstance {
    /// Placement of copy `index`: stand the mesh up on the z = 0 plane,
    /// turn it by `index` quarter turns, then push it outward.
    pub fn ring(index: usize) -> Self {
        let quarter_turns = index as f32 * FRAC_PI_2;
        let model = Mat4::from_rotation_x(FRAC_PI_2)
            * Mat4::from_rotation_y(quarter_turns)
            * Mat4::from_translation(INSTANCE_OFFSET);
        Self { model }
    }
}

/// The four precomputed mesh placements.
pub fn instance_ring() -> [ModelInstance; INSTANCE_COUNT] {
    std::array::from_fn(ModelInstance::ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, 1e-6)
    }

    #[test]
    fn identity_model_gives_view_projection() {
        let projection =
            Mat4::perspective_rh(45.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(3.0, -2.0, 7.0), Vec3::ZERO, Vec3::Z);
        let mvp = compose_transform(projection, view, Mat4::IDENTITY);
        assert!(approx_eq(mvp, projection * view));
    }

    #[test]
    fn composition_order_is_projection_view_model() {
        let projection = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        let view = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let model = Mat4::from_rotation_z(FRAC_PI_2);

        // Model rotates +X to +Y, view shifts +X, projection scales
        let p = compose_transform(projection, view, model).transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(2.0, 3.0, 0.0), 1e-6), "{p}");
    }

    #[test]
    fn ring_instances_surround_the_z_axis() {
        let ring = instance_ring();
        let centers: Vec<Vec3> = ring
            .iter()
            .map(|i| i.model.transform_point3(Vec3::ZERO))
            .collect();

        // Rx(90°) maps the local +Y offset onto +Z; the ring lies at z = 1
        for c in &centers {
            assert!((c.z - 1.0).abs() < 1e-5, "{c}");
            let planar = (c.x * c.x + c.y * c.y).sqrt();
            assert!((planar - 1.87).abs() < 1e-5, "{c}");
        }

        // Consecutive copies are a quarter turn apart
        assert!(centers[0].abs_diff_eq(Vec3::new(0.0, -1.87, 1.0), 1e-5));
        assert!(centers[1].abs_diff_eq(Vec3::new(1.87, 0.0, 1.0), 1e-5));
        assert!(centers[2].abs_diff_eq(Vec3::new(0.0, 1.87, 1.0), 1e-5));
        assert!(centers[3].abs_diff_eq(Vec3::new(-1.87, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn first_instance_matches_direct_construction() {
        let expected = Mat4::from_rotation_x(FRAC_PI_2)
            * Mat4::from_translation(Vec3::new(0.0, 1.0, 1.87));
        assert!(approx_eq(ModelInstance::ring(0).model, expected));
    }
}
