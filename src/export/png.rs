//! PNG heightmap export of elevation grids.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};

use crate::grid::Grid;
use super::ExportError;

/// Options for heightmap export.
#[derive(Debug, Clone)]
pub struct HeightmapOptions {
    /// Side length in pixels of one grid cell.
    pub cell_pixels: u32,
    /// Gray level written for masked-out cells.
    pub masked_value: u16,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for HeightmapOptions {
    fn default() -> Self {
        Self {
            cell_pixels: 1,
            masked_value: 0,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports an elevation grid as a 16-bit grayscale PNG.
///
/// Elevation in [0, 1] maps linearly onto 0..=65535 so the image can be
/// extruded as a 3D surface by any heightmap viewer.
///
/// # Returns
/// `Ok(())` on success, or an error if export fails
pub fn export_elevation_png(
    grid: &Grid<f32>,
    path: &Path,
    options: &HeightmapOptions,
) -> Result<(), ExportError> {
    let scale = options.cell_pixels;
    if scale == 0 {
        return Err(ExportError::InvalidScale(scale));
    }

    let side = grid.size() as u32 * scale;
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_fn(side, side, |x, y| {
        let value = match grid.get((y / scale) as usize, (x / scale) as usize) {
            Some(&e) => (e.clamp(0.0, 1.0) * 65535.0).round() as u16,
            None => options.masked_value,
        };
        Luma([value])
    });

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    // Convert u16 slice to bytes for the encoder
    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());

    encoder.write_image(byte_slice, side, side, image::ExtendedColorType::L16)?;

    Ok(())
}
