//! Terrain generation module.
//!
//! Provides elevation synthesis, band classification and the
//! [`TerrainGenerator`] that ties them to a circular grid.

mod bands;
mod config;
mod generator;
mod heightmap;

pub use bands::{TerrainBands, TerrainCategory, elevation_to_terrain};
pub use config::{TerrainConfig, DEFAULT_GRID_SIZE};
pub use generator::{TerrainCell, TerrainGenerator};
pub use heightmap::generate_elevation;
