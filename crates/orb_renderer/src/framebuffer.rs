//! Frame assembly and the image buffer.
//!
//! One primary ray per pixel, traced at depth 0, clamped per channel to
//! [0, 1] as it lands in the buffer. Pixel (0, 0) is the bottom-left of
//! the image; the byte conversion for writers runs rows top-to-bottom.

use glam::Vec3;
use orb_core::Scene;
use rayon::prelude::*;

use crate::camera::primary_ray;
use crate::trace::trace;

/// Convert a clamped [0, 1] color to RGB bytes by truncation.
///
/// Truncation (not rounding) is part of the output contract: 0.2 maps
/// to byte 51, and only an exact 1.0 reaches 255.
#[inline]
pub fn color_to_rgb(color: Vec3) -> [u8; 3] {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}

/// Rendered image: clamped RGB colors, row 0 at the bottom.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (column, row); row 0 is the bottom scanline.
    pub fn get(&self, column: u32, row: u32) -> Vec3 {
        self.pixels[(row * self.width + column) as usize]
    }

    /// Set the pixel at (column, row).
    pub fn set(&mut self, column: u32, row: u32, color: Vec3) {
        self.pixels[(row * self.width + column) as usize] = color;
    }

    /// Convert to RGB bytes in writer order: rows top-to-bottom,
    /// columns left-to-right.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                bytes.extend_from_slice(&color_to_rgb(self.get(column, row)));
            }
        }
        bytes
    }
}

/// Render the scene, one pixel at a time.
pub fn render(scene: &Scene) -> ImageBuffer {
    let width = scene.resolution.x;
    let height = scene.resolution.y;
    let mut image = ImageBuffer::new(width, height);

    log::info!("Rendering {}x{} serially", width, height);

    for row in 0..height {
        for column in 0..width {
            image.set(column, row, render_pixel(scene, column, row));
        }

        if height >= 10 && row % (height / 10) == 0 {
            log::debug!("rendered {} / {} rows", row, height);
        }
    }

    image
}

/// Render the scene with rayon, one scanline per task.
///
/// Pixels are mutually independent and the per-pixel evaluation is
/// identical to the serial path, so the output is bit-identical to
/// `render` for the same scene.
pub fn render_parallel(scene: &Scene) -> ImageBuffer {
    let width = scene.resolution.x;
    let height = scene.resolution.y;
    let mut image = ImageBuffer::new(width, height);

    log::info!("Rendering {}x{} across scanlines", width, height);

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, scanline)| {
            for (column, pixel) in scanline.iter_mut().enumerate() {
                *pixel = render_pixel(scene, column as u32, row as u32);
            }
        });

    image
}

/// Trace the primary ray for one pixel and clamp the result.
#[inline]
fn render_pixel(scene: &Scene, column: u32, row: u32) -> Vec3 {
    let ray = primary_ray(scene, column, row);
    trace(&ray, scene, 0, None).clamp(Vec3::ZERO, Vec3::ONE)
}
