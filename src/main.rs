//! orbit-view: standalone viewer binary.
//!
//! # Usage
//!
//! ```bash
//! orbit-view
//! orbit-view --options viewer.toml
//! orbit-view --mesh assets/models/suzanne.obj
//! orbit-view --save-options viewer.toml
//! ```
//!
//! # Keyboard
//!
//! - W / S: move toward / away from the origin
//! - A / D: orbit around the vertical axis
//! - Up / Down: tilt toward / away from the pole
//! - L: toggle diffuse and specular lighting
//! - Esc: quit

use std::path::PathBuf;

use clap::Parser;
use orbit_view::{options::Options, OrbitError, Viewer};

#[derive(Parser)]
#[command(name = "orbit-view")]
#[command(author, version, about = "Orbit-camera mesh viewer")]
struct Args {
    /// TOML options file (missing sections use defaults)
    #[arg(long, short = 'o')]
    options: Option<PathBuf>,

    /// OBJ mesh to draw, overriding `scene.mesh_path`
    #[arg(long, short = 'm')]
    mesh: Option<PathBuf>,

    /// Write the effective options to this TOML file and exit
    #[arg(long, value_name = "PATH")]
    save_options: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), OrbitError> {
    let mut options = match args.options {
        Some(path) => Options::load(&path)?,
        None => Options::default(),
    };
    if let Some(mesh) = args.mesh {
        options.scene.mesh_path = mesh;
    }

    if let Some(path) = args.save_options {
        options.save(&path)?;
        log::info!("wrote options to {}", path.display());
        return Ok(());
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::init();

    let result = run(Args::parse());

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(-1);
    }
}
