//! One frame of simulation, independent of any window.

use super::driver::{FramePlan, SceneDriver};
use crate::camera::OrbitController;
use crate::input::{CameraInput, KeyAction, KeySource};

/// What the frame loop should do after a step.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStep {
    /// The exit key was pressed; nothing was advanced.
    Exit,
    /// Draw this plan and keep running.
    Draw(FramePlan),
}

/// Advance the camera and scene by one frame.
///
/// Order: exit check, camera update, scene tick, then planning with the
/// updated camera.
pub fn advance_frame(
    controller: &mut OrbitController,
    driver: &mut SceneDriver,
    keys: &impl KeySource,
    elapsed_seconds: f32,
) -> FrameStep {
    if keys.is_pressed(KeyAction::Exit) {
        return FrameStep::Exit;
    }

    controller.update(CameraInput::sample(keys), elapsed_seconds);
    let _ = driver.frame_tick(
        elapsed_seconds,
        keys.is_pressed(KeyAction::ToggleLighting),
    );
    FrameStep::Draw(driver.plan_frame(&controller.view_state()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeySnapshot, KeyboardState};
    use crate::options::{CameraOptions, KeybindingOptions, LightingOptions};
    use crate::scene::LightingMode;

    fn setup() -> (OrbitController, SceneDriver) {
        (
            OrbitController::new(&CameraOptions::default()),
            SceneDriver::new(&LightingOptions::default()),
        )
    }

    fn drawn(step: FrameStep) -> FramePlan {
        match step {
            FrameStep::Draw(plan) => plan,
            FrameStep::Exit => unreachable!("unexpected exit"),
        }
    }

    #[test]
    fn exit_key_stops_before_advancing() {
        let (mut camera, mut scene) = setup();
        let keys =
            KeySnapshot::from_actions([KeyAction::Exit, KeyAction::Forward]);

        let step = advance_frame(&mut camera, &mut scene, &keys, 0.5);
        assert_eq!(step, FrameStep::Exit);
        assert_eq!(camera.radius(), 10.0);
        assert_eq!(scene.frame_count(), 0);
    }

    #[test]
    fn idle_frame_keeps_running() {
        let (mut camera, mut scene) = setup();
        let step =
            advance_frame(&mut camera, &mut scene, &KeySnapshot::default(), 0.016);
        assert!(matches!(step, FrameStep::Draw(_)));
        assert_eq!(scene.frame_count(), 1);
    }

    #[test]
    fn plan_uses_camera_after_update() {
        let (mut camera, mut scene) = setup();
        let before = camera.view_matrix();
        let keys = KeySnapshot::from_actions([KeyAction::Backward]);

        let plan = drawn(advance_frame(&mut camera, &mut scene, &keys, 0.2));
        assert!((camera.radius() - 13.0).abs() < 1e-5);
        assert_ne!(plan.view, before);
        assert_eq!(plan.view, camera.view_matrix());
    }

    #[test]
    fn toggle_is_reflected_in_the_same_frame() {
        let (mut camera, mut scene) = setup();
        let keys = KeySnapshot::from_actions([KeyAction::ToggleLighting]);

        let plan = drawn(advance_frame(&mut camera, &mut scene, &keys, 0.016));
        assert_eq!(plan.lighting, LightingMode::Off);
    }

    #[test]
    fn tap_within_one_frame_flips_lighting_once() {
        let (mut camera, mut scene) = setup();
        let mut keyboard = KeyboardState::new(KeybindingOptions::default());
        keyboard.set_key("KeyL", true);
        keyboard.set_key("KeyL", false);

        let first = drawn(advance_frame(
            &mut camera,
            &mut scene,
            &keyboard.take_snapshot(),
            0.016,
        ));
        assert_eq!(first.lighting, LightingMode::Off);

        let second = drawn(advance_frame(
            &mut camera,
            &mut scene,
            &keyboard.take_snapshot(),
            0.016,
        ));
        assert_eq!(second.lighting, LightingMode::Off);
    }

    #[test]
    fn exit_tap_within_one_frame_is_not_lost() {
        let (mut camera, mut scene) = setup();
        let mut keyboard = KeyboardState::new(KeybindingOptions::default());
        keyboard.set_key("Escape", true);
        keyboard.set_key("Escape", false);

        let step = advance_frame(
            &mut camera,
            &mut scene,
            &keyboard.take_snapshot(),
            0.016,
        );
        assert_eq!(step, FrameStep::Exit);
    }
}
