//! Camera system for orbiting the scene origin.
//!
//! Provides a keyboard-driven orbit camera in spherical coordinates and the
//! view/projection matrices derived from it.

/// Orbit controller: spherical state, clamping, and matrix updates.
pub mod controller;
/// Core camera struct and derived view state.
pub mod core;

pub use controller::OrbitController;
pub use core::{Camera, ViewState};
