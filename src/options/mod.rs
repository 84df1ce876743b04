//! Centralized viewer options with TOML file support.
//!
//! All tweakable settings (camera, lighting, scene assets, display,
//! keybindings) are consolidated here. Every section uses
//! `#[serde(default)]`, so a file overriding only `[camera]` is valid.

mod camera;
mod display;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit camera projection and control parameters.
    pub camera: CameraOptions,
    /// Point-light parameters.
    pub lighting: LightingOptions,
    /// Mesh and texture paths, quad size, clear color.
    pub scene: SceneOptions,
    /// Window size, title, frame reporting.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::OptionsParse`] for malformed TOML, mistyped
    /// fields, or values rejected by [`Self::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, OrbitError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Check every section that has range constraints.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::OptionsParse`] for the first invalid value.
    pub fn validate(&self) -> Result<(), OrbitError> {
        self.camera.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Io`] if the file cannot be read, or a parse
    /// error as for [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }
}
