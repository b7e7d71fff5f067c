//! The terrain generator: masked elevation plus its classification.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::grid::{CircularMask, Grid};
use crate::noise::NoiseConfig;
use super::bands::{TerrainBands, TerrainCategory};
use super::config::TerrainConfig;
use super::heightmap::generate_elevation;

/// A present terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainCell {
    pub elevation: f32,
    pub category: TerrainCategory,
}

/// A generated circular terrain grid.
///
/// Grids are fixed once constructed. Use [`TerrainGenerator::regenerate`] for
/// fresh terrain with the same configuration.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    seed: u64,
    noise: NoiseConfig,
    mask: CircularMask,
    elevation: Grid<f32>,
    categories: Grid<TerrainCategory>,
}

impl TerrainGenerator {
    /// Validates `config` and generates the terrain.
    ///
    /// # Errors
    /// [`GenerationError::Configuration`] if the grid is not square, has zero
    /// size, the noise scale is not positive, or the bands do not sum to 1.0.
    pub fn new(config: TerrainConfig) -> Result<Self> {
        if config.width != config.height {
            return Err(GenerationError::config(format!(
                "grid must be square, got width {} and height {}",
                config.width, config.height
            )));
        }
        if config.width == 0 {
            return Err(GenerationError::config("grid size must be positive"));
        }
        if !(config.noise_scale > 0.0 && config.noise_scale.is_finite()) {
            return Err(GenerationError::config(format!(
                "noise scale must be positive, got {}",
                config.noise_scale
            )));
        }
        config.bands.validate()?;

        Ok(Self::generate(config))
    }

    /// Generates a `size` x `size` grid with the given bands and an explicit seed.
    pub fn with_seed(size: usize, bands: TerrainBands, seed: u64) -> Result<Self> {
        Self::new(TerrainConfig::with_size(size).with_bands(bands).seeded(seed))
    }

    /// Generates new terrain with this configuration and a fresh random seed.
    pub fn regenerate(&self) -> Self {
        Self::generate(TerrainConfig {
            seed: None,
            ..self.config.clone()
        })
    }

    fn generate(config: TerrainConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let noise = NoiseConfig {
            scale: config.noise_scale,
            octaves: config.octaves,
            seed: rng.random::<i32>(),
            ..Default::default()
        };

        let mask = CircularMask::new(config.height, config.width);
        let elevation = generate_elevation(&mask, &noise);
        let categories = elevation.map(|&e| config.bands.classify(e));

        debug!(
            size = config.width,
            seed,
            inside = mask.inside_count(),
            "generated terrain"
        );

        Self {
            config,
            seed,
            noise,
            mask,
            elevation,
            categories,
        }
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.elevation.size()
    }

    /// Seed this terrain was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn bands(&self) -> &TerrainBands {
        &self.config.bands
    }

    /// Noise parameters used for elevation, including the derived noise seed.
    pub fn noise_config(&self) -> &NoiseConfig {
        &self.noise
    }

    pub fn mask(&self) -> &CircularMask {
        &self.mask
    }

    /// Elevation grid; masked-out cells are absent.
    pub fn elevation(&self) -> &Grid<f32> {
        &self.elevation
    }

    /// Terrain categories; masked-out cells are absent.
    pub fn categories(&self) -> &Grid<TerrainCategory> {
        &self.categories
    }

    pub fn elevation_at(&self, row: usize, col: usize) -> Option<f32> {
        self.elevation.get(row, col).copied()
    }

    /// Category at `(row, col)`, [`TerrainCategory::Masked`] when outside the circle.
    pub fn terrain_at(&self, row: usize, col: usize) -> TerrainCategory {
        self.categories
            .get(row, col)
            .copied()
            .unwrap_or(TerrainCategory::Masked)
    }

    /// Elevation and category of a present cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<TerrainCell> {
        self.elevation_at(row, col).map(|elevation| TerrainCell {
            elevation,
            category: self.terrain_at(row, col),
        })
    }

    /// Number of present cells per terrain type, in band order.
    pub fn category_counts(&self) -> [(TerrainCategory, usize); 4] {
        TerrainCategory::BANDS.map(|band| {
            let count = self
                .categories
                .iter_present()
                .filter(|(_, _, c)| **c == band)
                .count();
            (band, count)
        })
    }
}

impl fmt::Display for TerrainGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::export::render_terrain(&self.categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let terrain = TerrainGenerator::new(TerrainConfig::default()).unwrap();
        assert_eq!(terrain.size(), 21);
        assert_eq!(terrain.bands(), &TerrainBands::default());
    }

    #[test]
    fn test_non_square_rejected() {
        let config = TerrainConfig {
            width: 21,
            height: 19,
            ..Default::default()
        };
        let err = TerrainGenerator::new(config).unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = TerrainGenerator::new(TerrainConfig::with_size(0)).unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));
    }

    #[test]
    fn test_bad_bands_rejected() {
        let config = TerrainConfig::default().with_bands(TerrainBands {
            water: 0.3,
            sand: 0.05,
            grass: 0.45,
            rock: 0.25,
        });
        assert!(matches!(
            TerrainGenerator::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_bad_noise_scale_rejected() {
        let config = TerrainConfig {
            noise_scale: 0.0,
            ..Default::default()
        };
        assert!(TerrainGenerator::new(config).is_err());
    }

    #[test]
    fn test_seed_determinism() {
        let a = TerrainGenerator::with_seed(21, TerrainBands::default(), 1234).unwrap();
        let b = TerrainGenerator::with_seed(21, TerrainBands::default(), 1234).unwrap();

        assert_eq!(a.seed(), 1234);
        assert_eq!(a.noise_config(), b.noise_config());
        for ((_, _, ea), (_, _, eb)) in a.elevation().iter().zip(b.elevation().iter()) {
            assert_eq!(ea.map(|e| e.to_bits()), eb.map(|e| e.to_bits()));
        }
        assert_eq!(a.categories(), b.categories());
    }

    #[test]
    fn test_unseeded_records_seed() {
        let a = TerrainGenerator::new(TerrainConfig::with_size(9)).unwrap();
        let replay = TerrainGenerator::with_seed(9, TerrainBands::default(), a.seed()).unwrap();
        assert_eq!(a.elevation(), replay.elevation());
    }

    #[test]
    fn test_regenerate_keeps_config() {
        let a = TerrainGenerator::with_seed(11, TerrainBands::default(), 7).unwrap();
        let b = a.regenerate();
        assert_eq!(b.size(), 11);
        assert_eq!(b.config().seed, None);
        assert_eq!(b.mask(), a.mask());
    }

    #[test]
    fn test_coverage_matches_mask() {
        for size in [5usize, 7, 11, 21] {
            let terrain = TerrainGenerator::with_seed(size, TerrainBands::default(), 3).unwrap();
            assert!(terrain.elevation().matches_mask(terrain.mask()));
            assert!(terrain.categories().matches_mask(terrain.mask()));
            for row in 0..size {
                for col in 0..size {
                    let inside = terrain.mask().contains(row, col);
                    assert_eq!(terrain.cell(row, col).is_some(), inside);
                    assert_eq!(terrain.terrain_at(row, col) == TerrainCategory::Masked, !inside);
                }
            }
        }
    }

    #[test]
    fn test_categories_follow_bands() {
        let terrain = TerrainGenerator::with_seed(21, TerrainBands::default(), 42).unwrap();
        for (row, col, &e) in terrain.elevation().iter_present() {
            assert_eq!(terrain.terrain_at(row, col), terrain.bands().classify(e));
        }
        let total: usize = terrain.category_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, terrain.mask().inside_count());
    }

    #[test]
    fn test_size_five_scenario() {
        let terrain = TerrainGenerator::with_seed(5, TerrainBands::default(), 42).unwrap();
        assert_eq!(terrain.mask().inside_count(), 13);
        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(terrain.elevation_at(row, col), None);
        }
        assert!(terrain.elevation_at(2, 2).is_some());
    }

    #[test]
    fn test_default_bands_spread_over_seeds() {
        let mut totals = [0usize; 4];
        for seed in 0..10 {
            let terrain = TerrainGenerator::with_seed(21, TerrainBands::default(), seed).unwrap();
            let values: Vec<f32> = terrain.elevation().iter_present().map(|(_, _, &e)| e).collect();
            let min = values.iter().cloned().fold(f32::MAX, f32::min);
            let max = values.iter().cloned().fold(f32::MIN, f32::max);
            assert!(max - min > 0.3, "seed {}: elevation spread {} too narrow", seed, max - min);

            for (i, (category, n)) in terrain.category_counts().iter().enumerate() {
                assert_eq!(*category, TerrainCategory::BANDS[i]);
                totals[i] += n;
            }
        }

        let seen = totals.iter().filter(|&&n| n > 0).count();
        assert!(seen >= 3, "only {} of 4 bands appeared: {:?}", seen, totals);
    }
}
