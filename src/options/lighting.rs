use serde::{Deserialize, Serialize};

/// Point-light parameters for the standard shading model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingOptions {
    /// Light position in world space.
    pub light_position: [f32; 3],
    /// Light color (linear RGB).
    pub light_color: [f32; 3],
    /// Light power; attenuated by squared distance in the shader.
    pub light_power: f32,
    /// Fraction of the diffuse color used as ambient term.
    pub ambient_factor: f32,
    /// Specular reflectance color.
    pub specular_color: [f32; 3],
    /// Specular lobe exponent.
    pub shininess: f32,
    /// Whether diffuse and specular terms start enabled.
    pub start_enabled: bool,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_position: [4.0, 4.0, 4.0],
            light_color: [1.0, 1.0, 1.0],
            light_power: 50.0,
            ambient_factor: 0.1,
            specular_color: [0.3, 0.3, 0.3],
            shininess: 5.0,
            start_enabled: true,
        }
    }
}
