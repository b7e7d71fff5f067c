//! One-shot arena generation: terrain first, then resources on its footprint.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::resources::ResourceGenerator;
use crate::terrain::{TerrainBands, TerrainConfig, TerrainGenerator, DEFAULT_GRID_SIZE};

/// Configuration for a complete arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Grid width and height (odd recommended).
    pub size: usize,
    pub bands: TerrainBands,
    pub noise_scale: f32,
    pub octaves: u8,
    /// Master seed. Terrain uses it directly; resources use a derived seed.
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            bands: TerrainBands::default(),
            noise_scale: 10.0,
            octaves: 1,
            seed: None,
        }
    }
}

impl ArenaConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn terrain_config(&self) -> TerrainConfig {
        TerrainConfig {
            width: self.size,
            height: self.size,
            bands: self.bands,
            noise_scale: self.noise_scale,
            octaves: self.octaves,
            seed: self.seed,
        }
    }
}

/// A terrain grid and the resource grid generated over it.
#[derive(Debug, Clone)]
pub struct Arena {
    pub terrain: TerrainGenerator,
    pub resources: ResourceGenerator,
}

impl Arena {
    /// Generates terrain, then resources sharing its size and mask.
    pub fn generate(config: &ArenaConfig) -> Result<Self> {
        let terrain = TerrainGenerator::new(config.terrain_config())?;
        let resource_seed = terrain.seed().wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ 0x5EED;
        let resources = ResourceGenerator::from_terrain(&terrain, Some(resource_seed))?;

        info!(
            size = terrain.size(),
            seed = terrain.seed(),
            cells = terrain.mask().inside_count(),
            "arena generated"
        );

        Ok(Self { terrain, resources })
    }

    pub fn size(&self) -> usize {
        self.terrain.size()
    }

    pub fn seed(&self) -> u64 {
        self.terrain.seed()
    }
}
