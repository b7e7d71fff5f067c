//! Square grids of optional cells.
//!
//! Cells outside the circular footprint are `None`, which keeps a masked-out
//! cell distinguishable from a legitimate zero value.

mod mask;

pub use mask::{CircularMask, compute_circular_mask};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GenerationError, Result};

/// An immutable `size` x `size` grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub(crate) fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Option<T>) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Reconstructs a grid from a row-major cell list.
    pub fn from_cells(size: usize, cells: Vec<Option<T>>) -> Result<Self> {
        if cells.len() != size * size {
            return Err(GenerationError::shape(
                format!("{} cells for a {}x{} grid", size * size, size, size),
                format!("{} cells", cells.len()),
            ));
        }
        Ok(Self { size, cells })
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` if it is masked out.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        assert!(row < self.size && col < self.size, "cell ({}, {}) out of bounds", row, col);
        self.cells[row * self.size + col].as_ref()
    }

    /// Returns true if `(row, col)` holds a value.
    pub fn is_present(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of cells holding a value.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<&T>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / size, i % size, cell.as_ref()))
    }

    /// Iterates over one row of cells.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&T>> + '_ {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(Option::as_ref)
    }

    /// Iterates over present cells only, as `(row, col, value)`.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.iter().filter_map(|(row, col, cell)| cell.map(|v| (row, col, v)))
    }

    /// Returns a grid of the same shape with `f` applied to every present cell.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(|c| c.as_ref().map(&mut f)).collect(),
        }
    }

    /// Returns true if exactly the cells inside `mask` are present.
    pub fn matches_mask(&self, mask: &CircularMask) -> bool {
        mask.height() == self.size
            && mask.width() == self.size
            && self.iter().all(|(row, col, cell)| cell.is_some() == mask.contains(row, col))
    }
}

impl<T: Clone> Grid<T> {
    /// Flattens the grid into a row-major cell list.
    pub fn to_cells(&self) -> Vec<Option<T>> {
        self.cells.clone()
    }
}

#[derive(Deserialize)]
struct CellList<T> {
    size: usize,
    cells: Vec<Option<T>>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let list = CellList::<T>::deserialize(deserializer)?;
        Grid::from_cells(list.size, list.cells).map_err(serde::de::Error::custom)
    }
}
