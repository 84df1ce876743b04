//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, texture upload, the shared
//! vertex format and the uniform blocks consumed by the scene shader.

/// Shared wgpu boilerplate helpers for the scene pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth targets and sampled color textures.
pub mod texture;
/// Uniform block layouts.
pub mod uniforms;
/// Interleaved vertex format.
pub mod vertex;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::{DepthTarget, SampledTexture};
pub use uniforms::{FrameUniform, ObjectUniform};
pub use vertex::Vertex;
