use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Asset paths and fixed-scene parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Wavefront OBJ file drawn four times around the origin.
    pub mesh_path: PathBuf,
    /// Texture applied to the mesh instances. A checkerboard is used when
    /// unset.
    pub mesh_texture: Option<PathBuf>,
    /// Texture applied to the ground quad. A checkerboard is used when unset.
    pub quad_texture: Option<PathBuf>,
    /// Side length of the square quad on the z = 0 plane.
    pub quad_width: f32,
    /// Framebuffer clear color (RGBA).
    pub clear_color: [f32; 4],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            mesh_path: PathBuf::from("assets/models/cube.obj"),
            mesh_texture: None,
            quad_texture: None,
            quad_width: 6.25,
            clear_color: [0.0, 0.0, 0.4, 0.0],
        }
    }
}
