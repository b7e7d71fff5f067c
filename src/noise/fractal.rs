//! Multi-octave fractal Brownian motion (fBm) noise on the plane.

use serde::{Deserialize, Serialize};
use simdnoise::NoiseBuilder;

/// Configuration for 2D coherent noise sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Grid coordinates are divided by this before sampling (10 cells per noise cell).
    pub scale: f32,
    /// Number of noise octaves. One octave is plain gradient noise.
    pub octaves: u8,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude decay per octave.
    pub persistence: f32,
    /// Seed for the noise lattice.
    pub seed: i32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            octaves: 1,
            lacunarity: 2.0,
            persistence: 0.5,
            seed: 0,
        }
    }
}

impl NoiseConfig {
    /// Creates a new noise configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// Remaps a [-1, 1] noise sample into [0, 1] via `(n + 1) / 2`.
///
/// Samples that overshoot the range are clamped.
pub fn remap_unit(n: f32) -> f32 {
    ((n + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Samples a `width` x `height` block of noise in row-major order, remapped to [0, 1].
///
/// Cell `(row, col)` is sampled at `(col / scale, row / scale)`. simdnoise's raw
/// fBm output spans only a few hundredths, so the block is rescaled to [-1, 1]
/// before the remap. A block with no variation (a single cell) sits at 0.5.
pub fn sample_noise_grid(width: usize, height: usize, config: &NoiseConfig) -> Vec<f32> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let scaled = NoiseBuilder::fbm_2d_offset(0.0, width, 0.0, height)
        .with_seed(config.seed)
        .with_freq(1.0 / config.scale)
        .with_octaves(config.octaves.max(1))
        .with_lacunarity(config.lacunarity)
        .with_gain(config.persistence)
        .generate_scaled(-1.0, 1.0);

    scaled
        .into_iter()
        .map(|n| if n.is_finite() { remap_unit(n) } else { 0.5 })
        .collect()
}
