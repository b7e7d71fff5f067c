//! The resource generator.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::grid::{CircularMask, Grid, compute_circular_mask};
use crate::terrain::TerrainGenerator;
use super::gradient::{normalized_distance, radial_gradient};

/// Kind of supply found in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Weapons,
    Food,
    Medicine,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Weapons,
        ResourceType::Food,
        ResourceType::Medicine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Weapons => "weapons",
            ResourceType::Food => "food",
            ResourceType::Medicine => "medicine",
        }
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            ResourceType::Weapons => 'W',
            ResourceType::Food => 'F',
            ResourceType::Medicine => 'M',
        }
    }
}

/// Resources held by a single inside cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceCell {
    /// Amount available in [0, 1]; low at the center, high at the edge.
    pub quantity: f32,
    pub resource_type: ResourceType,
    /// Quality in [0, 1]; high at the center, low at the edge.
    pub quality: f32,
}

/// Resource grid co-located with a terrain grid.
///
/// Only the terrain's size and mask are consulted, never its elevation.
#[derive(Debug, Clone)]
pub struct ResourceGenerator {
    seed: u64,
    mask: CircularMask,
    grid: Grid<ResourceCell>,
}

impl ResourceGenerator {
    /// Builds resources for a `size` x `size` grid with the given mask.
    ///
    /// # Errors
    /// - [`GenerationError::Configuration`] if `size` is zero or `mask` is not square
    /// - [`GenerationError::ShapeMismatch`] if `mask` does not have `size` rows or
    ///   is not the circular mask of a `size` grid
    pub fn new(size: usize, mask: &CircularMask, seed: Option<u64>) -> Result<Self> {
        if size == 0 {
            return Err(GenerationError::config("grid size must be positive"));
        }
        if !mask.is_square() {
            return Err(GenerationError::config(format!(
                "mask must be square, got {}x{}",
                mask.height(),
                mask.width()
            )));
        }
        if mask.height() != size {
            return Err(GenerationError::shape(
                format!("{}x{} mask", size, size),
                format!("{}x{} mask", mask.height(), mask.width()),
            ));
        }
        let expected = compute_circular_mask(size);
        if *mask != expected {
            return Err(GenerationError::shape(
                format!("circular mask with {} inside cells", expected.inside_count()),
                format!("mask with {} inside cells", mask.inside_count()),
            ));
        }

        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let grid = Grid::from_fn(size, |row, col| {
            if !mask.contains(row, col) {
                return None;
            }
            let (quantity, quality) = radial_gradient(normalized_distance(row, col, size));
            let resource_type = ResourceType::ALL[rng.random_range(0..ResourceType::ALL.len())];
            Some(ResourceCell {
                quantity,
                resource_type,
                quality,
            })
        });

        debug!(size, seed, cells = grid.present_count(), "generated resources");

        Ok(Self {
            seed,
            mask: expected,
            grid,
        })
    }

    /// Builds resources over the footprint of `terrain`.
    pub fn from_terrain(terrain: &TerrainGenerator, seed: Option<u64>) -> Result<Self> {
        Self::new(terrain.size(), terrain.mask(), seed)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Seed the resource types were drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mask(&self) -> &CircularMask {
        &self.mask
    }

    /// Resource grid; masked-out cells are absent.
    pub fn grid(&self) -> &Grid<ResourceCell> {
        &self.grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ResourceCell> {
        self.grid.get(row, col)
    }

    /// Number of cells holding each resource type.
    pub fn type_counts(&self) -> [(ResourceType, usize); 3] {
        ResourceType::ALL.map(|kind| {
            let count = self
                .grid
                .iter_present()
                .filter(|(_, _, cell)| cell.resource_type == kind)
                .count();
            (kind, count)
        })
    }

    /// Mean quantity over present cells.
    pub fn mean_quantity(&self) -> f32 {
        self.mean_of(|cell| cell.quantity)
    }

    /// Mean quality over present cells.
    pub fn mean_quality(&self) -> f32 {
        self.mean_of(|cell| cell.quality)
    }

    fn mean_of(&self, f: impl Fn(&ResourceCell) -> f32) -> f32 {
        let count = self.grid.present_count();
        if count == 0 {
            return 0.0;
        }
        let total: f32 = self.grid.iter_present().map(|(_, _, cell)| f(cell)).sum();
        total / count as f32
    }
}

impl fmt::Display for ResourceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::export::render_resources(&self.grid))
    }
}
