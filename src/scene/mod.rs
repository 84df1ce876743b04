//! The fixed scene: one textured quad and four placed copies of a mesh.
//!
//! [`SceneDriver`] turns the camera's [`ViewState`](crate::camera::ViewState)
//! into a [`FramePlan`] each frame and owns the lighting toggle.

/// Frame ticking and draw planning.
pub mod driver;
/// Rising-edge lighting toggle.
pub mod lighting;
/// Quad geometry.
pub mod quad;
/// Window-independent per-frame step.
pub mod step;
/// Model placement and MVP composition.
pub mod transform;

pub use driver::{DrawItem, DrawTarget, FramePlan, SceneDriver};
pub use lighting::{LightingMode, LightingToggle};
pub use quad::Quad;
pub use step::{advance_frame, FrameStep};
pub use transform::{compose_transform, ModelInstance};
