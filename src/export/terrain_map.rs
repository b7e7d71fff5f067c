//! Terrain category preview map.

use std::path::Path;

use crate::grid::Grid;
use crate::terrain::TerrainCategory;
use super::{write_cell_colors_png, ExportError, MapOptions};

/// Exports terrain categories as an RGB PNG, one colored square per cell.
pub fn export_terrain_map_png(
    grid: &Grid<TerrainCategory>,
    path: &Path,
    options: &MapOptions,
) -> Result<(), ExportError> {
    write_cell_colors_png(grid.size(), path, options, |row, col| {
        match grid.get(row, col) {
            Some(category) => category.preview_rgb(),
            None => options.background,
        }
    })
}
