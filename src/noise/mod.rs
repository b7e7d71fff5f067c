//! Coherent noise used to synthesize elevation.
//!
//! Uses simdnoise to generate a whole grid of fBm noise in one SIMD batch.

mod fractal;

pub use fractal::{NoiseConfig, remap_unit, sample_noise_grid};
