//! Terrain generator configuration.

use serde::{Deserialize, Serialize};

use super::bands::TerrainBands;

/// Default grid width and height. Odd so a true center cell exists.
pub const DEFAULT_GRID_SIZE: usize = 21;

/// Configuration for [`TerrainGenerator`](super::TerrainGenerator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Grid width in cells. Must equal `height`.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Elevation band widths.
    pub bands: TerrainBands,
    /// Grid cells per noise lattice cell.
    pub noise_scale: f32,
    /// Noise octaves (1 = plain gradient noise).
    pub octaves: u8,
    /// Explicit seed; `None` draws a fresh one per generator.
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            bands: TerrainBands::default(),
            noise_scale: 10.0,
            octaves: 1,
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Square grid of `size` cells with default bands.
    pub fn with_size(size: usize) -> Self {
        Self {
            width: size,
            height: size,
            ..Default::default()
        }
    }

    /// Sets an explicit seed for reproducible output.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the band configuration.
    pub fn with_bands(mut self, bands: TerrainBands) -> Self {
        self.bands = bands;
        self
    }
}
