//! Terrain bands and elevation classification.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// Terrain category of a grid cell. `as_u8()` is stable and used for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainCategory {
    /// Outside the playable circle. Not one of the four terrain types.
    Masked = 0,
    Water = 1,
    Sand = 2,
    Grass = 3,
    Rock = 4,
}

impl TerrainCategory {
    /// The four terrain types in band order.
    pub const BANDS: [TerrainCategory; 4] = [
        TerrainCategory::Water,
        TerrainCategory::Sand,
        TerrainCategory::Grass,
        TerrainCategory::Rock,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            TerrainCategory::Masked => "masked",
            TerrainCategory::Water => "water",
            TerrainCategory::Sand => "sand",
            TerrainCategory::Grass => "grass",
            TerrainCategory::Rock => "rock",
        }
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            TerrainCategory::Masked => ' ',
            TerrainCategory::Water => '~',
            TerrainCategory::Sand => '.',
            TerrainCategory::Grass => '"',
            TerrainCategory::Rock => '^',
        }
    }

    /// RGB preview color for this category.
    pub fn preview_rgb(self) -> [u8; 3] {
        match self {
            TerrainCategory::Masked => [0, 0, 0],
            TerrainCategory::Water => [64, 120, 255],
            TerrainCategory::Sand => [220, 205, 140],
            TerrainCategory::Grass => [110, 180, 110],
            TerrainCategory::Rock => [150, 150, 150],
        }
    }
}

/// Widths of the four elevation bands, walked from 0.0 upward in the order
/// water, sand, grass, rock.
///
/// The widths must sum to exactly 1.0. The sum is taken in band order with
/// no tolerance, so a configuration like `0.1 + 0.2 + 0.3 + 0.4` (which is
/// `1.0000000000000002` in f64) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainBands {
    pub water: f64,
    pub sand: f64,
    pub grass: f64,
    pub rock: f64,
}

impl Default for TerrainBands {
    fn default() -> Self {
        Self {
            water: 0.25,
            sand: 0.05,
            grass: 0.45,
            rock: 0.25,
        }
    }
}

impl TerrainBands {
    /// Creates a validated band configuration.
    pub fn new(water: f64, sand: f64, grass: f64, rock: f64) -> Result<Self> {
        let bands = Self { water, sand, grass, rock };
        bands.validate()?;
        Ok(bands)
    }

    /// Checks that every width is non-negative and that they sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (category, width) in self.widths() {
            if !(width >= 0.0) {
                return Err(GenerationError::config(format!(
                    "{} band width must be non-negative, got {}",
                    category.name(),
                    width
                )));
            }
        }

        let total = self.water + self.sand + self.grass + self.rock;
        if total != 1.0 {
            return Err(GenerationError::config(format!(
                "terrain band sizes must sum to 1.0, got {}",
                total
            )));
        }
        Ok(())
    }

    /// Band widths paired with their category, in band order.
    pub fn widths(&self) -> [(TerrainCategory, f64); 4] {
        [
            (TerrainCategory::Water, self.water),
            (TerrainCategory::Sand, self.sand),
            (TerrainCategory::Grass, self.grass),
            (TerrainCategory::Rock, self.rock),
        ]
    }

    /// Classifies an elevation in [0, 1].
    ///
    /// Bands are half-open `[lower, lower + width)`; anything left over at the
    /// top (including exactly 1.0) is rock. Input is clamped to [0, 1] first.
    pub fn classify(&self, elevation: f32) -> TerrainCategory {
        let e = (elevation as f64).clamp(0.0, 1.0);
        let mut lower = 0.0f64;
        for (category, width) in self.widths() {
            if e >= lower && e < lower + width {
                return category;
            }
            lower += width;
        }
        TerrainCategory::Rock
    }
}

/// Maps an optional elevation to its terrain category.
///
/// Absent elevations (masked-out cells) map to [`TerrainCategory::Masked`].
pub fn elevation_to_terrain(elevation: Option<f32>, bands: &TerrainBands) -> TerrainCategory {
    match elevation {
        Some(e) => bands.classify(e),
        None => TerrainCategory::Masked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_bands_valid() {
        assert!(TerrainBands::default().validate().is_ok());
    }

    #[test]
    fn test_bad_sum_rejected() {
        let err = TerrainBands::new(0.25, 0.05, 0.45, 0.3).unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));

        // Floating-point drift is not forgiven.
        assert!(TerrainBands::new(0.1, 0.2, 0.3, 0.4).is_err());
    }

    #[test]
    fn test_negative_width_rejected() {
        assert!(TerrainBands::new(0.5, -0.25, 0.5, 0.25).is_err());
        assert!(TerrainBands::new(f64::NAN, 0.0, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_dyadic_configurations_accepted() {
        // Multiples of 1/64 sum exactly, so every split of 64 parts is valid.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let a = rng.random_range(0..=64u32);
            let b = rng.random_range(0..=64 - a);
            let c = rng.random_range(0..=64 - a - b);
            let d = 64 - a - b - c;
            let bands = TerrainBands::new(
                a as f64 / 64.0,
                b as f64 / 64.0,
                c as f64 / 64.0,
                d as f64 / 64.0,
            );
            assert!(bands.is_ok(), "{} {} {} {}", a, b, c, d);

            // Shifting one band breaks the sum.
            let off = TerrainBands::new(
                a as f64 / 64.0 + 1.0 / 128.0,
                b as f64 / 64.0,
                c as f64 / 64.0,
                d as f64 / 64.0,
            );
            assert!(off.is_err());
        }
    }

    #[test]
    fn test_default_thresholds() {
        let bands = TerrainBands::default();
        assert_eq!(bands.classify(0.0), TerrainCategory::Water);
        assert_eq!(bands.classify(0.24), TerrainCategory::Water);
        assert_eq!(bands.classify(0.25), TerrainCategory::Sand);
        assert_eq!(bands.classify(0.29), TerrainCategory::Sand);
        assert_eq!(bands.classify(0.3), TerrainCategory::Grass);
        assert_eq!(bands.classify(0.74), TerrainCategory::Grass);
        assert_eq!(bands.classify(0.75), TerrainCategory::Rock);
        assert_eq!(bands.classify(0.99), TerrainCategory::Rock);
        assert_eq!(bands.classify(1.0), TerrainCategory::Rock);
    }

    #[test]
    fn test_masked_input() {
        let bands = TerrainBands::default();
        assert_eq!(elevation_to_terrain(None, &bands), TerrainCategory::Masked);
        assert_eq!(elevation_to_terrain(Some(0.5), &bands), TerrainCategory::Grass);
    }

    #[test]
    fn test_zero_width_band_skipped() {
        let bands = TerrainBands::new(0.5, 0.0, 0.5, 0.0).unwrap();
        assert_eq!(bands.classify(0.5), TerrainCategory::Grass);
        assert_eq!(bands.classify(1.0), TerrainCategory::Rock);
        assert_eq!(bands.classify(0.999), TerrainCategory::Grass);
    }

    #[test]
    fn test_classification_monotonic() {
        let bands = TerrainBands::default();
        let mut previous = TerrainCategory::Water;
        for i in 0..=1000 {
            let e = i as f32 / 1000.0;
            let category = bands.classify(e);
            assert_ne!(category, TerrainCategory::Masked);
            assert!(
                category.as_u8() >= previous.as_u8(),
                "{:?} after {:?} at {}",
                category,
                previous,
                e
            );
            previous = category;
        }
    }
}
