//! Resource distribution over a terrain footprint.
//!
//! Resources are `(quantity, type, quality)` triples. Quantity grows and
//! quality shrinks with normalized radial distance from the grid center;
//! the type is drawn uniformly per cell.

mod generator;
mod gradient;

pub use generator::{ResourceCell, ResourceGenerator, ResourceType};
pub use gradient::{normalized_distance, radial_gradient};
