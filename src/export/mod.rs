//! Read-only consumers of generated grids.
//!
//! Supports plain-text rendering for terminals, a 16-bit PNG heightmap of
//! elevation, and RGB preview maps of terrain categories and resource quality.

mod png;
mod resource_map;
mod terrain_map;
mod text;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgb};
use thiserror::Error;

pub use png::{export_elevation_png, HeightmapOptions};
pub use resource_map::{export_resource_map_png, quality_color};
pub use terrain_map::export_terrain_map_png;
pub use text::{render_elevation, render_resources, render_terrain};

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid pixels per cell: {0}")]
    InvalidScale(u32),
}

/// Options for RGB preview maps.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Side length in pixels of one grid cell.
    pub cell_pixels: u32,
    /// RGB color for masked-out cells.
    pub background: [u8; 3],
    pub compression: CompressionType,
    pub filter: FilterType,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            cell_pixels: 16,
            background: [15, 15, 20],
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Paints a `size` x `size` grid of cell colors and writes it as RGB PNG.
fn write_cell_colors_png(
    size: usize,
    path: &Path,
    options: &MapOptions,
    color_at: impl Fn(usize, usize) -> [u8; 3],
) -> Result<(), ExportError> {
    let scale = options.cell_pixels;
    if scale == 0 {
        return Err(ExportError::InvalidScale(scale));
    }

    let side = size as u32 * scale;
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(side, side, |x, y| {
        let (row, col) = ((y / scale) as usize, (x / scale) as usize);
        Rgb(color_at(row, col))
    });

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), side, side, image::ExtendedColorType::Rgb8)?;

    Ok(())
}
