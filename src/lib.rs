//! Procedural circular arena generator.
//!
//! This crate generates a circular terrain grid from coherent noise, classifies
//! it into water, sand, grass and rock bands, and overlays a resource grid whose
//! quantity and quality vary with distance from the center.

pub mod arena;
pub mod error;
pub mod export;
pub mod grid;
pub mod noise;
pub mod resources;
pub mod terrain;

pub use arena::{Arena, ArenaConfig};
pub use error::{GenerationError, Result};
pub use grid::{CircularMask, Grid, compute_circular_mask};
pub use noise::NoiseConfig;
pub use resources::{ResourceCell, ResourceGenerator, ResourceType};
pub use terrain::{
    TerrainBands, TerrainCategory, TerrainCell, TerrainConfig, TerrainGenerator,
    elevation_to_terrain,
};
