//! Renders the "starfish" Julia set (c = -0.4 + 0.6i) to an RGBA image.
use std::path::Path;
use std::time::Instant;

use image::{ColorType, ImageFormat, RgbaImage};
use log::info;

use crate::renderer::Renderer;
use crate::state::Band;
use crate::threads::{make_solver, Solver};

pub mod complex;
pub mod config;
pub mod coord;
pub mod error;
pub mod painter;
pub mod renderer;
pub mod solver;
pub mod state;
pub mod threads;

pub use config::RenderConfig;
pub use error::RenderError;

/// Computes every pixel of the frame, top row first.
pub fn render(config: &RenderConfig) -> Result<RgbaImage, RenderError> {
    config.validate()?;
    info!(
        "rendering {}x{} (M={}, threads={})",
        config.width, config.height, config.max_iterations, config.threads
    );
    let start = Instant::now();

    let solver = make_solver::<_, Band>(Renderer::new(config), config.threads);
    let initial = Band::frame(config.width as usize, config.height as usize);
    let img = solver.solve(&initial)?.into_image()?;

    info!("rendered in {}ms", start.elapsed().as_millis());
    Ok(img)
}

/// Encodes the image as PNG, whatever the file extension.
pub fn write_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<(), RenderError> {
    let path = path.as_ref();
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )?;
    info!("wrote {}", path.display());
    Ok(())
}

pub fn render_to_file<P: AsRef<Path>>(config: &RenderConfig, path: P) -> Result<(), RenderError> {
    let img = render(config)?;
    write_png(&img, path)
}
