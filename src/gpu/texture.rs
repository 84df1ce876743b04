//! Depth targets and sampled color textures.

use std::path::Path;

use image::{Rgba, RgbaImage};
use wgpu::util::DeviceExt;

use crate::error::OrbitError;

/// Depth buffer format used by every scene pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Side length of the fallback checkerboard in pixels.
const CHECKER_SIZE: u32 = 256;
/// Side length of one checkerboard cell in pixels.
const CHECKER_CELL: u32 = 32;

/// A depth attachment sized to the surface.
pub struct DepthTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// Create a depth texture with the given dimensions (clamped to 1x1).
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Target"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// An sRGB color texture uploaded once and sampled by the scene shader.
pub struct SampledTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl SampledTexture {
    /// Upload a decoded RGBA8 image.
    #[must_use]
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &RgbaImage,
    ) -> Self {
        let (width, height) = image.dimensions();
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING
                    | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            image.as_raw(),
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Decode an image file (BMP, PNG, JPEG or DDS) into RGBA8.
///
/// # Errors
///
/// Returns [`OrbitError::TextureLoad`] if the file cannot be opened or
/// decoded, or decodes to an empty image.
pub fn decode_image(path: &Path) -> Result<RgbaImage, OrbitError> {
    let decoded = image::open(path).map_err(|e| {
        OrbitError::TextureLoad(format!("{}: {e}", path.display()))
    })?;
    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(OrbitError::TextureLoad(format!(
            "{}: image has no pixels",
            path.display()
        )));
    }
    log::info!(
        "loaded texture {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// Two-tone checkerboard used when no texture file is configured.
#[must_use]
pub fn checkerboard(size: u32, cell: u32) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba([220, 220, 220, 255])
        } else {
            Rgba([40, 40, 40, 255])
        }
    })
}

/// Decode `path` when one is configured, otherwise fall back to the default
/// checkerboard.
///
/// # Errors
///
/// A configured path that fails to decode is an error, not a fallback.
pub fn image_or_checkerboard(
    path: Option<&Path>,
) -> Result<RgbaImage, OrbitError> {
    match path {
        Some(path) => decode_image(path),
        None => Ok(checkerboard(CHECKER_SIZE, CHECKER_CELL)),
    }
}
