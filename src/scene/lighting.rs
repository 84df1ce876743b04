//! Lighting mode toggle driven by a held key.

/// Whether the diffuse and specular terms are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Ambient + diffuse + specular.
    #[default]
    On,
    /// Ambient only.
    Off,
}

impl LightingMode {
    /// The other mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Whether diffuse and specular are enabled.
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Two-state machine that flips on a rising edge of the toggle key and
/// ignores sustained holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightingToggle {
    mode: LightingMode,
    was_pressed: bool,
}

impl LightingToggle {
    /// Start in `mode` with the key released.
    pub fn new(mode: LightingMode) -> Self {
        Self {
            mode,
            was_pressed: false,
        }
    }

    /// Feed this frame's key state; returns `true` when the mode flipped.
    pub fn sample(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        if rising {
            self.mode = self.mode.flipped();
        }
        rising
    }

    /// Current mode.
    pub fn mode(&self) -> LightingMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on() {
        assert_eq!(LightingToggle::default().mode(), LightingMode::On);
    }

    #[test]
    fn flips_once_per_press() {
        let mut toggle = LightingToggle::default();

        // press, hold, hold, release
        assert!(toggle.sample(true));
        assert!(!toggle.sample(true));
        assert!(!toggle.sample(true));
        assert!(!toggle.sample(false));
        assert_eq!(toggle.mode(), LightingMode::Off);

        // press again
        assert!(toggle.sample(true));
        assert_eq!(toggle.mode(), LightingMode::On);
    }

    #[test]
    fn release_never_flips() {
        let mut toggle = LightingToggle::new(LightingMode::Off);
        for _ in 0..10 {
            assert!(!toggle.sample(false));
        }
        assert_eq!(toggle.mode(), LightingMode::Off);
    }

    #[test]
    fn press_count_parity_decides_mode() {
        let mut toggle = LightingToggle::default();
        let pattern = [
            true, true, false, true, false, false, true, true, true, false,
        ];
        let mut flips = 0;
        for pressed in pattern {
            if toggle.sample(pressed) {
                flips += 1;
            }
        }
        // Three separate presses
        assert_eq!(flips, 3);
        assert_eq!(toggle.mode(), LightingMode::Off);
    }
}
