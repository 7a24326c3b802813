//! PPM image output.
//!
//! Writes the rendered buffer as P6 (binary, the default) or P3 (ASCII)
//! with a `255` max value. Rows go top-to-bottom, columns left-to-right,
//! one byte per channel by truncating `component * 255`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::framebuffer::{color_to_rgb, ImageBuffer};

/// PPM flavor to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// P6, binary pixel data
    Binary,
    /// P3, ASCII pixel data
    Ascii,
}

impl PpmFormat {
    fn magic(self) -> &'static str {
        match self {
            PpmFormat::Binary => "P6",
            PpmFormat::Ascii => "P3",
        }
    }
}

/// Write an image to a PPM file.
pub fn write_ppm(
    image: &ImageBuffer,
    path: impl AsRef<Path>,
    format: PpmFormat,
) -> std::io::Result<()> {
    let path = path.as_ref();
    log::info!(
        "Saving image '{}' as {}: {} x {}",
        path.display(),
        format.magic(),
        image.width,
        image.height
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm_to(image, &mut writer, format)
}

/// Write an image as PPM to any writer.
pub fn write_ppm_to(
    image: &ImageBuffer,
    writer: &mut impl Write,
    format: PpmFormat,
) -> std::io::Result<()> {
    writeln!(writer, "{}", format.magic())?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    match format {
        PpmFormat::Binary => {
            writer.write_all(&image.to_rgb_bytes())?;
        }
        PpmFormat::Ascii => {
            // Top scanline first, like the binary path
            for row in (0..image.height).rev() {
                for column in 0..image.width {
                    let [r, g, b] = color_to_rgb(image.get(column, row));
                    write!(writer, "{} {} {} ", r, g, b)?;
                }
                writeln!(writer)?;
            }
        }
    }

    writer.flush()
}
