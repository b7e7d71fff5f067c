//! Resource quality heat map.

use std::path::Path;

use crate::grid::Grid;
use crate::resources::ResourceCell;
use super::{write_cell_colors_png, ExportError, MapOptions};

/// Viridis control points, evenly spaced over [0, 1].
const VIRIDIS: [[f32; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

/// Maps a quality in [0, 1] onto a viridis-like color ramp.
pub fn quality_color(quality: f32) -> [u8; 3] {
    let t = quality.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f32;
    let i = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = t - i as f32;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    [0, 1, 2].map(|c| (a[c] + (b[c] - a[c]) * frac).round() as u8)
}

/// Exports resource quality as an RGB PNG heat map.
pub fn export_resource_map_png(
    grid: &Grid<ResourceCell>,
    path: &Path,
    options: &MapOptions,
) -> Result<(), ExportError> {
    write_cell_colors_png(grid.size(), path, options, |row, col| {
        match grid.get(row, col) {
            Some(cell) => quality_color(cell.quality),
            None => options.background,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceGenerator;
    use crate::terrain::{TerrainBands, TerrainGenerator};
    use tempfile::tempdir;

    #[test]
    fn test_quality_color_endpoints() {
        assert_eq!(quality_color(0.0), [68, 1, 84]);
        assert_eq!(quality_color(1.0), [253, 231, 37]);
        assert_eq!(quality_color(0.5), [33, 145, 140]);
        assert_eq!(quality_color(-1.0), quality_color(0.0));
    }

    #[test]
    fn export_resource_map_smoke() {
        let terrain = TerrainGenerator::with_seed(7, TerrainBands::default(), 2).unwrap();
        let resources = ResourceGenerator::from_terrain(&terrain, Some(2)).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("resources.png");
        let options = MapOptions {
            cell_pixels: 4,
            ..Default::default()
        };

        export_resource_map_png(resources.grid(), &path, &options).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (28, 28));
        let center = resources.get(3, 3).unwrap();
        assert_eq!(img.get_pixel(13, 13).0, quality_color(center.quality));
    }
}
