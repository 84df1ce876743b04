//! Input handling: bindable actions, held-key tracking, and the per-frame
//! snapshot consumed by the orbit camera.

/// Bindable viewer actions.
pub mod keyboard;
/// Held-key state and camera input snapshots.
pub mod state;

pub use keyboard::KeyAction;
pub use state::{CameraInput, KeySnapshot, KeySource, KeyboardState};
