use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Orbit camera projection, speed, and clamping parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Projection aspect ratio (width / height). Fixed, not window-derived.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Radial speed in world units per second.
    pub distance_speed: f32,
    /// Angular speed in radians per second.
    pub angle_speed: f32,
    /// Starting distance from the origin.
    pub initial_radius: f32,
    /// Starting azimuth in radians.
    pub initial_horizontal_angle: f32,
    /// Starting polar angle in radians, measured from +Z.
    pub initial_vertical_angle: f32,
    /// Smallest radius the camera may reach.
    pub min_radius: f32,
    /// Distance kept from each pole, in radians.
    pub pole_epsilon: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            aspect: 4.0 / 3.0,
            znear: 0.1,
            zfar: 100.0,
            distance_speed: 15.0,
            angle_speed: 3.0,
            initial_radius: 10.0,
            initial_horizontal_angle: 0.0,
            initial_vertical_angle: PI * 0.3,
            min_radius: 0.01,
            pole_epsilon: 1.0e-4,
        }
    }
}

impl CameraOptions {
    /// Reject values the orbit controller cannot keep inside its invariants.
    ///
    /// Every field must be finite. Projection parameters must describe a
    /// real frustum, speeds must not be negative, and the pole margin must
    /// lie strictly between zero and a quarter turn.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::OptionsParse`] naming the first bad field.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let fields = [
            ("fovy", self.fovy),
            ("aspect", self.aspect),
            ("znear", self.znear),
            ("zfar", self.zfar),
            ("distance_speed", self.distance_speed),
            ("angle_speed", self.angle_speed),
            ("initial_radius", self.initial_radius),
            ("initial_horizontal_angle", self.initial_horizontal_angle),
            ("initial_vertical_angle", self.initial_vertical_angle),
            ("min_radius", self.min_radius),
            ("pole_epsilon", self.pole_epsilon),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite())
        {
            return Err(invalid(name, *value, "must be finite"));
        }

        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(invalid("fovy", self.fovy, "must be in (0, 180)"));
        }
        if self.aspect <= 0.0 {
            return Err(invalid("aspect", self.aspect, "must be positive"));
        }
        if self.znear <= 0.0 {
            return Err(invalid("znear", self.znear, "must be positive"));
        }
        if self.zfar <= self.znear {
            return Err(invalid("zfar", self.zfar, "must exceed znear"));
        }
        if self.distance_speed < 0.0 {
            return Err(invalid(
                "distance_speed",
                self.distance_speed,
                "must not be negative",
            ));
        }
        if self.angle_speed < 0.0 {
            return Err(invalid(
                "angle_speed",
                self.angle_speed,
                "must not be negative",
            ));
        }
        if self.min_radius <= 0.0 {
            return Err(invalid("min_radius", self.min_radius, "must be positive"));
        }
        if self.pole_epsilon <= 0.0 || self.pole_epsilon >= FRAC_PI_2 {
            return Err(invalid(
                "pole_epsilon",
                self.pole_epsilon,
                "must be in (0, pi/2)",
            ));
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f32, rule: &str) -> OrbitError {
    OrbitError::OptionsParse(format!("camera.{name} = {value}: {rule}"))
}
