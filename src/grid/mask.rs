//! Circular footprint shared by the terrain and resource grids.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GenerationError, Result};

/// Boolean inside/outside predicate over a `height` x `width` grid.
///
/// Stored row-major; `true` marks a cell inside the playable circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircularMask {
    height: usize,
    width: usize,
    bits: Vec<bool>,
}

/// Computes the largest centered circle that fits a `size` x `size` grid.
pub fn compute_circular_mask(size: usize) -> CircularMask {
    CircularMask::new(size, size)
}

impl CircularMask {
    /// Builds the circular mask for a `height` x `width` grid.
    ///
    /// Center is `(height / 2, width / 2)`; the radius is the smallest distance
    /// from the center to any grid edge. A cell is inside iff its Euclidean
    /// distance to the center is at most the radius.
    pub fn new(height: usize, width: usize) -> Self {
        let (center_row, center_col) = (height / 2, width / 2);
        let radius = center_row
            .min(center_col)
            .min(height - center_row)
            .min(width - center_col);
        let radius_sq = (radius * radius) as i64;

        let mut bits = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                let dr = row as i64 - center_row as i64;
                let dc = col as i64 - center_col as i64;
                bits.push(dr * dr + dc * dc <= radius_sq);
            }
        }

        Self { height, width, bits }
    }

    /// Wraps an externally produced mask, checking that `bits` covers the grid.
    pub fn from_bits(height: usize, width: usize, bits: Vec<bool>) -> Result<Self> {
        if bits.len() != height * width {
            return Err(GenerationError::shape(
                format!("{} mask cells", height * width),
                format!("{} mask cells", bits.len()),
            ));
        }
        Ok(Self { height, width, bits })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Grid cell the circle is centered on, as `(row, col)`.
    pub fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Returns true if `(row, col)` lies inside the circle.
    ///
    /// Out-of-bounds coordinates are outside.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.bits[row * self.width + col]
    }

    /// Number of cells inside the circle.
    pub fn inside_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterates over `(row, col)` of every inside cell in row-major order.
    pub fn iter_inside(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &inside)| inside)
            .map(move |(i, _)| (i / width, i % width))
    }
}

#[derive(Deserialize)]
struct MaskBits {
    height: usize,
    width: usize,
    bits: Vec<bool>,
}

impl<'de> Deserialize<'de> for CircularMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = MaskBits::deserialize(deserializer)?;
        CircularMask::from_bits(raw.height, raw.width, raw.bits).map_err(serde::de::Error::custom)
    }
}
