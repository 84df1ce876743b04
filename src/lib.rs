// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Keyboard-driven orbit-camera viewer built on wgpu.
//!
//! The scene is fixed: a double-sided textured quad on the z = 0 plane and
//! four copies of a mesh loaded from a Wavefront OBJ file, lit by one point
//! light that can be toggled off to leave only the ambient term.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - spherical orbit camera and its matrices
//! - [`scene::SceneDriver`] - lighting toggle and the per-frame draw plan
//! - [`renderer::SceneRenderer`] - GPU upload and the depth-tested pass
//! - [`options::Options`] - runtime configuration (camera, lighting, scene,
//!   display, keybindings)
//!
//! # Frame flow
//!
//! Each frame the held keys are sampled into a [`input::CameraInput`], the
//! controller integrates it over the elapsed time, and the driver turns the
//! resulting [`camera::ViewState`] into a [`scene::FramePlan`] that the
//! renderer replays.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::OrbitError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
