//! Orb command line: render a scene file to a PPM image.
//!
//! Usage: `orb <scene-file>`
//!
//! The output path comes from the scene's `OUTPUT` keyword.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use orb_core::load_scene;
use orb_renderer::{render_parallel, write_ppm, PpmFormat};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: orb <scene-file>"),
    };
    if args.next().is_some() {
        bail!("usage: orb <scene-file>");
    }

    log::info!("Reading scene specification from '{}'", scene_path);
    let scene = load_scene(&scene_path)
        .with_context(|| format!("failed to load scene '{}'", scene_path))?;

    if scene.resolution.x == 0 || scene.resolution.y == 0 {
        bail!("scene '{}' has a zero resolution", scene_path);
    }
    if scene.output.is_empty() {
        bail!("scene '{}' names no OUTPUT file", scene_path);
    }

    let start = Instant::now();
    let image = render_parallel(&scene);
    log::info!(
        "Rendered {} pixels in {:?}",
        scene.pixel_count(),
        start.elapsed()
    );

    write_ppm(&image, &scene.output, PpmFormat::Binary)
        .with_context(|| format!("failed to write '{}'", scene.output))?;

    log::info!("Done");
    Ok(())
}
