//! Uniform block layouts mirrored by `standard_shading.wgsl`.

use glam::Mat4;

use crate::options::LightingOptions;
use crate::scene::FramePlan;

/// Per-draw transforms (bind group 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// `projection * view * model`.
    pub mvp: [[f32; 4]; 4],
    /// Model-to-world transform.
    pub model: [[f32; 4]; 4],
}

impl ObjectUniform {
    /// Pack a draw's matrices.
    pub fn new(mvp: Mat4, model: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// Per-frame view and light parameters (bind group 0).
///
/// Each `vec3` is followed by a scalar so the WGSL struct needs no implicit
/// padding apart from the 16-byte tail.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Light position in world space.
    pub light_position: [f32; 3],
    /// Light power before distance falloff.
    pub light_power: f32,
    /// Light color.
    pub light_color: [f32; 3],
    /// Ambient term as a fraction of the diffuse color.
    pub ambient_factor: f32,
    /// Specular color.
    pub specular_color: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
    /// Non-zero when diffuse and specular terms are applied.
    pub lighting_on: u32,
    /// Pads the struct to a multiple of 16 bytes.
    pub _pad: [u32; 3],
}

impl FrameUniform {
    /// Build the frame block from the plan and the static light settings.
    pub fn new(plan: &FramePlan, lighting: &LightingOptions) -> Self {
        Self {
            view: plan.view.to_cols_array_2d(),
            light_position: plan.light_position.to_array(),
            light_power: lighting.light_power,
            light_color: lighting.light_color,
            ambient_factor: lighting.ambient_factor,
            specular_color: lighting.specular_color,
            shininess: lighting.shininess,
            lighting_on: u32::from(plan.lighting.is_on()),
            _pad: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitController;
    use crate::options::CameraOptions;
    use crate::scene::{LightingMode, SceneDriver};

    #[test]
    fn sizes_match_wgsl_layout() {
        assert_eq!(size_of::<ObjectUniform>(), 128);
        assert_eq!(size_of::<FrameUniform>(), 128);
        assert_eq!(size_of::<FrameUniform>() % 16, 0);
    }

    #[test]
    fn frame_uniform_tracks_lighting_mode() {
        let lighting = LightingOptions::default();
        let mut driver = SceneDriver::new(&lighting);
        let camera = OrbitController::new(&CameraOptions::default());

        let plan = driver.plan_frame(&camera.view_state());
        let block = FrameUniform::new(&plan, &lighting);
        assert_eq!(block.lighting_on, 1);
        assert_eq!(block.light_position, [4.0, 4.0, 4.0]);
        assert_eq!(block.light_power, 50.0);
        assert_eq!(block.view, camera.view_matrix().to_cols_array_2d());

        assert_eq!(driver.frame_tick(0.01, true), LightingMode::Off);
        let plan = driver.plan_frame(&camera.view_state());
        assert_eq!(FrameUniform::new(&plan, &lighting).lighting_on, 0);
    }

    #[test]
    fn object_uniform_is_column_major() {
        let model = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let block = ObjectUniform::new(Mat4::IDENTITY, model);
        assert_eq!(block.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(block.mvp, Mat4::IDENTITY.to_cols_array_2d());
    }
}
