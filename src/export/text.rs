//! Plain-text rendering of grids for terminals and logs.

use crate::grid::Grid;
use crate::resources::ResourceCell;
use crate::terrain::TerrainCategory;

/// One glyph per cell, one line per row. Masked cells render as spaces.
pub fn render_terrain(grid: &Grid<TerrainCategory>) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() + 1));
    for row in 0..grid.size() {
        for cell in grid.row(row) {
            out.push(cell.copied().unwrap_or(TerrainCategory::Masked).glyph());
        }
        out.push('\n');
    }
    out
}

/// Two-decimal elevations, masked cells as blanks of the same width.
pub fn render_elevation(grid: &Grid<f32>) -> String {
    render_rows(grid, |e| format!("{:.2}", e), 4)
}

/// Resource quantity to two decimals followed by the type glyph.
pub fn render_resources(grid: &Grid<ResourceCell>) -> String {
    render_rows(
        grid,
        |cell| format!("{:.2}{}", cell.quantity, cell.resource_type.glyph()),
        5,
    )
}

fn render_rows<T>(grid: &Grid<T>, fmt_cell: impl Fn(&T) -> String, width: usize) -> String {
    let mut out = String::new();
    for row in 0..grid.size() {
        let line: Vec<String> = grid
            .row(row)
            .map(|cell| match cell {
                Some(v) => fmt_cell(v),
                None => " ".repeat(width),
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}
