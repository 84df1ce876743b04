use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// toggle_lighting = "KeyL"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the camera toward the origin.
    Forward,
    /// Move the camera away from the origin.
    Backward,
    /// Decrease the azimuth.
    RotateLeft,
    /// Increase the azimuth.
    RotateRight,
    /// Decrease the polar angle (toward +Z).
    PitchUp,
    /// Increase the polar angle (toward -Z).
    PitchDown,
    /// Flip diffuse/specular lighting on a fresh press.
    ToggleLighting,
    /// Leave the frame loop.
    Exit,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Forward,
        Self::Backward,
        Self::RotateLeft,
        Self::RotateRight,
        Self::PitchUp,
        Self::PitchDown,
        Self::ToggleLighting,
        Self::Exit,
    ];
}
