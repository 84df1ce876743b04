//! Shared utilities for the viewer.

/// Frame clock and ms/frame reporting.
pub mod frame_timing;

pub use frame_timing::{FrameTick, FrameTiming};
