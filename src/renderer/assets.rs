//! CPU-side scene assets, loaded before any GPU work starts.

use image::RgbaImage;

use crate::error::OrbitError;
use crate::gpu::texture::image_or_checkerboard;
use crate::mesh::{load_mesh, Mesh};
use crate::options::SceneOptions;
use crate::scene::Quad;

/// Everything the renderer uploads at startup.
pub struct SceneAssets {
    /// Indexed mesh drawn once per instance.
    pub mesh: Mesh,
    /// Ground quad.
    pub quad: Quad,
    /// Texture sampled by the mesh instances.
    pub mesh_image: RgbaImage,
    /// Texture sampled by the quad.
    pub quad_image: RgbaImage,
}

impl SceneAssets {
    /// Load the mesh and both textures named by the scene options.
    ///
    /// # Errors
    ///
    /// Fails if the mesh cannot be read or indexed, or if a configured
    /// texture path cannot be decoded.
    pub fn load(options: &SceneOptions) -> Result<Self, OrbitError> {
        let mesh = load_mesh(&options.mesh_path)?;
        let mesh_image = image_or_checkerboard(options.mesh_texture.as_deref())?;
        let quad_image = image_or_checkerboard(options.quad_texture.as_deref())?;
        Ok(Self {
            mesh,
            quad: Quad::new(options.quad_width),
            mesh_image,
            quad_image,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn options() -> SceneOptions {
        SceneOptions {
            mesh_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("assets/models/cube.obj"),
            ..SceneOptions::default()
        }
    }

    #[test]
    fn loads_default_scene() {
        let assets = SceneAssets::load(&options()).unwrap();
        assert_eq!(assets.mesh.triangle_count(), 12);
        assert_eq!(assets.quad.vertex_count(), 6);
        assert!(assets.mesh_image.width() > 0);
        assert!(assets.quad_image.width() > 0);
    }

    #[test]
    fn missing_mesh_fails() {
        let options = SceneOptions {
            mesh_path: PathBuf::from("does/not/exist.obj"),
            ..options()
        };
        assert!(SceneAssets::load(&options).is_err());
    }

    #[test]
    fn bad_texture_path_fails() {
        let options = SceneOptions {
            quad_texture: Some(PathBuf::from("does/not/exist.bmp")),
            ..options()
        };
        assert!(matches!(
            SceneAssets::load(&options),
            Err(OrbitError::TextureLoad(_))
        ));
    }
}
