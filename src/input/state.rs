//! Held-key tracking and per-frame input snapshots.

use rustc_hash::FxHashSet;

use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;

/// A queryable "is this action pressed this frame" provider.
///
/// The frame loop samples it once per frame; nothing here is event-driven.
pub trait KeySource {
    /// Whether the key bound to `action` is held right now.
    fn is_pressed(&self, action: KeyAction) -> bool;
}

/// Snapshot of the six camera-driving actions for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CameraInput {
    /// Move toward the origin.
    pub forward: bool,
    /// Move away from the origin.
    pub backward: bool,
    /// Decrease the azimuth.
    pub rotate_left: bool,
    /// Increase the azimuth.
    pub rotate_right: bool,
    /// Decrease the polar angle.
    pub pitch_up: bool,
    /// Increase the polar angle.
    pub pitch_down: bool,
}

impl CameraInput {
    /// No keys held.
    pub const NONE: Self = Self {
        forward: false,
        backward: false,
        rotate_left: false,
        rotate_right: false,
        pitch_up: false,
        pitch_down: false,
    };

    /// Sample the camera actions from a key source.
    pub fn sample(source: &impl KeySource) -> Self {
        Self {
            forward: source.is_pressed(KeyAction::Forward),
            backward: source.is_pressed(KeyAction::Backward),
            rotate_left: source.is_pressed(KeyAction::RotateLeft),
            rotate_right: source.is_pressed(KeyAction::RotateRight),
            pitch_up: source.is_pressed(KeyAction::PitchUp),
            pitch_down: source.is_pressed(KeyAction::PitchDown),
        }
    }
}

/// The actions that counted as pressed for one frame.
///
/// Produced by [`KeyboardState::take_snapshot`] and fed to the camera and
/// scene driver so both see the same keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    actions: FxHashSet<KeyAction>,
}

impl KeySnapshot {
    /// Snapshot with exactly the given actions pressed.
    #[must_use]
    pub fn from_actions(actions: impl IntoIterator<Item = KeyAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Whether no action is pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl KeySource for KeySnapshot {
    fn is_pressed(&self, action: KeyAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Tracks which physical keys are held, keyed by `KeyCode` debug strings
/// (`"KeyW"`, `"ArrowUp"`, ...), and resolves them through the bindings.
///
/// Presses are sticky: a key pressed and released between two snapshots
/// still shows up in the next snapshot, so a quick tap is never lost.
pub struct KeyboardState {
    held: FxHashSet<String>,
    pressed_since_snapshot: FxHashSet<String>,
    bindings: KeybindingOptions,
}

impl KeyboardState {
    /// Create an empty state using the given bindings.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self {
            held: FxHashSet::default(),
            pressed_since_snapshot: FxHashSet::default(),
            bindings,
        }
    }

    /// Record a press or release of a physical key.
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        if pressed {
            let _ = self.held.insert(key.to_owned());
            let _ = self.pressed_since_snapshot.insert(key.to_owned());
        } else {
            let _ = self.held.remove(key);
        }
    }

    /// Drop every held key and pending press (e.g. when the window loses
    /// focus).
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed_since_snapshot.clear();
    }

    /// Actions held now or pressed since the previous snapshot. Clears the
    /// pending presses; call once per frame.
    #[must_use]
    pub fn take_snapshot(&mut self) -> KeySnapshot {
        let actions = self
            .held
            .iter()
            .chain(&self.pressed_since_snapshot)
            .filter_map(|key| self.bindings.lookup(key))
            .collect();
        self.pressed_since_snapshot.clear();
        KeySnapshot { actions }
    }
}
