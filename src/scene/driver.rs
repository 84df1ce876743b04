//! Per-frame scene logic: lighting toggle and the fixed draw plan.

use glam::{Mat4, Vec3};

use super::lighting::{LightingMode, LightingToggle};
use super::transform::{compose_transform, instance_ring, ModelInstance, INSTANCE_COUNT};
use crate::camera::ViewState;
use crate::options::LightingOptions;

/// Which uploaded geometry (and texture) a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTarget {
    /// The textured quad, non-indexed, drawn from both sides.
    Quad,
    /// The indexed mesh, back faces culled.
    Mesh,
}

impl DrawTarget {
    /// Whether back faces stay visible.
    pub fn double_sided(self) -> bool {
        matches!(self, Self::Quad)
    }
}

/// One draw with its per-object transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Geometry to draw.
    pub target: DrawTarget,
    /// `projection * view * model`.
    pub mvp: Mat4,
    /// Model-to-world transform.
    pub model: Mat4,
}

/// Everything the renderer needs for one frame, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// World-to-eye transform shared by every draw.
    pub view: Mat4,
    /// Light position in world space.
    pub light_position: Vec3,
    /// Current lighting mode.
    pub lighting: LightingMode,
    /// Quad first, then each mesh instance.
    pub draws: Vec<DrawItem>,
}

/// Owns the static scene description and the lighting state machine.
pub struct SceneDriver {
    instances: [ModelInstance; INSTANCE_COUNT],
    lighting: LightingToggle,
    light_position: Vec3,
    elapsed: f64,
    frames: u64,
}

impl SceneDriver {
    /// Scene with the four ring instances and lighting from options.
    #[must_use]
    pub fn new(options: &LightingOptions) -> Self {
        let mode = if options.start_enabled {
            LightingMode::On
        } else {
            LightingMode::Off
        };
        Self {
            instances: instance_ring(),
            lighting: LightingToggle::new(mode),
            light_position: Vec3::from_array(options.light_position),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Advance one frame. The lighting mode flips only on a fresh press of
    /// the toggle key.
    pub fn frame_tick(
        &mut self,
        elapsed_seconds: f32,
        toggle_lighting_requested: bool,
    ) -> LightingMode {
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.elapsed += f64::from(elapsed_seconds);
        }
        self.frames += 1;

        if self.lighting.sample(toggle_lighting_requested) {
            log::debug!("lighting {:?}", self.lighting.mode());
        }
        self.lighting.mode()
    }

    /// Draw list for the current camera: the quad, then every instance.
    pub fn plan_frame(&self, view_state: &ViewState) -> FramePlan {
        let ViewState { view, projection } = *view_state;

        let quad = DrawItem {
            target: DrawTarget::Quad,
            mvp: compose_transform(projection, view, Mat4::IDENTITY),
            model: Mat4::IDENTITY,
        };
        let meshes = self.instances.iter().map(|instance| DrawItem {
            target: DrawTarget::Mesh,
            mvp: compose_transform(projection, view, instance.model),
            model: instance.model,
        });

        FramePlan {
            view,
            light_position: self.light_position,
            lighting: self.lighting.mode(),
            draws: std::iter::once(quad).chain(meshes).collect(),
        }
    }

    /// The precomputed mesh placements.
    pub fn instances(&self) -> &[ModelInstance] {
        &self.instances
    }

    /// Current lighting mode.
    pub fn lighting_mode(&self) -> LightingMode {
        self.lighting.mode()
    }

    /// Seconds accumulated across ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitController;
    use crate::options::CameraOptions;

    fn driver() -> SceneDriver {
        SceneDriver::new(&LightingOptions::default())
    }

    #[test]
    fn plan_has_quad_then_four_meshes() {
        let camera = OrbitController::new(&CameraOptions::default());
        let plan = driver().plan_frame(&camera.view_state());

        assert_eq!(plan.draws.len(), 1 + INSTANCE_COUNT);
        assert_eq!(plan.draws[0].target, DrawTarget::Quad);
        assert!(plan.draws[0].target.double_sided());
        assert!(plan.draws[1..]
            .iter()
            .all(|d| d.target == DrawTarget::Mesh && !d.target.double_sided()));
        assert_eq!(plan.view, camera.view_matrix());
        assert_eq!(plan.light_position, Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn quad_mvp_is_view_projection() {
        let camera = OrbitController::new(&CameraOptions::default());
        let state = camera.view_state();
        let plan = driver().plan_frame(&state);
        assert!(plan.draws[0].mvp.abs_diff_eq(state.view_projection(), 1e-6));
        assert_eq!(plan.draws[0].model, Mat4::IDENTITY);
    }

    #[test]
    fn mesh_mvps_use_instance_models() {
        let camera = OrbitController::new(&CameraOptions::default());
        let state = camera.view_state();
        let scene = driver();
        let plan = scene.plan_frame(&state);

        for (draw, instance) in plan.draws[1..].iter().zip(scene.instances()) {
            assert_eq!(draw.model, instance.model);
            let expected = state.projection * state.view * instance.model;
            assert!(draw.mvp.abs_diff_eq(expected, 1e-6));
        }
    }

    #[test]
    fn frame_tick_toggles_on_rising_edge_only() {
        let mut scene = driver();
        assert_eq!(scene.frame_tick(0.016, false), LightingMode::On);
        assert_eq!(scene.frame_tick(0.016, true), LightingMode::Off);
        assert_eq!(scene.frame_tick(0.016, true), LightingMode::Off);
        assert_eq!(scene.frame_tick(0.016, false), LightingMode::Off);
        assert_eq!(scene.frame_tick(0.016, true), LightingMode::On);

        let camera = OrbitController::new(&CameraOptions::default());
        assert_eq!(
            scene.plan_frame(&camera.view_state()).lighting,
            LightingMode::On
        );
    }

    #[test]
    fn frame_tick_accumulates_time() {
        let mut scene = driver();
        let _ = scene.frame_tick(0.5, false);
        let _ = scene.frame_tick(0.25, false);
        let _ = scene.frame_tick(-1.0, false);
        assert_eq!(scene.frame_count(), 3);
        assert!((scene.elapsed() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn lighting_can_start_disabled() {
        let options = LightingOptions {
            start_enabled: false,
            ..LightingOptions::default()
        };
        let scene = SceneDriver::new(&options);
        assert_eq!(scene.lighting_mode(), LightingMode::Off);
    }
}
