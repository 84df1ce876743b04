//! Keyboard-driven orbit camera in spherical coordinates.
//!
//! The eye sits on a sphere around the world origin, parameterized by
//! `radius`, an azimuth (`horizontal_angle`, around +Z) and a polar angle
//! (`vertical_angle`, measured from +Z). Every update applies rate-based
//! increments, then restores the invariants:
//!
//! - `radius >= min_radius > 0`
//! - `vertical_angle ∈ [ε, π − ε]`
//! - `horizontal_angle ∈ [0, 2π)`

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat4, Vec3};

use crate::camera::core::{Camera, ViewState};
use crate::input::CameraInput;
use crate::options::CameraOptions;

/// Lowest radius floor accepted from options.
const RADIUS_FLOOR: f32 = 1.0e-6;

/// World up axis used for the look-at basis.
const WORLD_UP: Vec3 = Vec3::Z;

/// Orbit camera owning its spherical state and the matrices derived from
/// it.
pub struct OrbitController {
    radius: f32,
    horizontal_angle: f32,
    vertical_angle: f32,

    camera: Camera,
    view_state: ViewState,

    distance_speed: f32,
    angle_speed: f32,
    min_radius: f32,
    pole_epsilon: f32,
}

impl OrbitController {
    /// Build a controller from options. Initial values outside the
    /// invariants are pulled back inside before the first matrices are
    /// computed.
    ///
    /// Options are expected to have passed [`CameraOptions::validate`]; a
    /// NaN radius floor or pole margin falls back to the smallest legal
    /// value instead of panicking.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let min_radius = options.min_radius.max(RADIUS_FLOOR);
        let pole_epsilon = options
            .pole_epsilon
            .max(f32::EPSILON)
            .min(FRAC_PI_2 - f32::EPSILON);

        let camera = Camera {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: WORLD_UP,
            aspect: options.aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            radius: options.initial_radius,
            horizontal_angle: options.initial_horizontal_angle,
            vertical_angle: options.initial_vertical_angle,
            view_state: ViewState {
                view: camera.build_view(),
                projection: camera.build_projection(),
            },
            camera,
            distance_speed: options.distance_speed,
            angle_speed: options.angle_speed,
            min_radius,
            pole_epsilon,
        };
        controller.enforce_bounds();
        controller.update_camera_pos();
        controller
    }

    /// Advance the camera by `elapsed_seconds` with the given keys held.
    ///
    /// Negative or non-finite elapsed times count as zero.
    pub fn update(&mut self, input: CameraInput, elapsed_seconds: f32) {
        let dt = if elapsed_seconds.is_finite() {
            elapsed_seconds.max(0.0)
        } else {
            0.0
        };
        let distance_step = dt * self.distance_speed;
        let angle_step = dt * self.angle_speed;

        if input.forward {
            self.radius -= distance_step;
        }
        if input.backward {
            self.radius += distance_step;
        }
        if input.rotate_left {
            self.horizontal_angle -= angle_step;
        }
        if input.rotate_right {
            self.horizontal_angle += angle_step;
        }
        if input.pitch_up {
            self.vertical_angle -= angle_step;
        }
        if input.pitch_down {
            self.vertical_angle += angle_step;
        }

        self.enforce_bounds();
        self.update_camera_pos();
    }

    fn enforce_bounds(&mut self) {
        self.radius = self.radius.max(self.min_radius);
        self.vertical_angle = self
            .vertical_angle
            .clamp(self.pole_epsilon, PI - self.pole_epsilon);
        self.horizontal_angle = wrap_angle(self.horizontal_angle);
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = spherical_to_cartesian(
            self.radius,
            self.horizontal_angle,
            self.vertical_angle,
        );
        self.view_state = ViewState {
            view: self.camera.build_view(),
            projection: self.camera.build_projection(),
        };
    }

    /// Most recently computed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        self.view_state.view
    }

    /// Most recently computed projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.view_state.projection
    }

    /// Both matrices as one value.
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.camera.eye
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth in `[0, 2π)`.
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    /// Polar angle in `[ε, π − ε]`.
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }
}

/// Map an angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`, which is
/// folded back to zero.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// `r · (sin v · cos h, sin v · sin h, cos v)`
fn spherical_to_cartesian(radius: f32, horizontal: f32, vertical: f32) -> Vec3 {
    let (sin_v, cos_v) = vertical.sin_cos();
    let (sin_h, cos_h) = horizontal.sin_cos();
    Vec3::new(sin_v * cos_h, sin_v * sin_h, cos_v) * radius
}
