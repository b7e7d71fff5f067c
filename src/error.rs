//! Errors raised while constructing generators.

use thiserror::Error;

/// Errors that can occur when building a terrain or resource grid.
///
/// Both kinds are raised synchronously at construction; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Band fractions do not sum to 1.0, the grid is not square, or a size is zero.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A mask or cell list does not match the grid it is paired with.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

impl GenerationError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        GenerationError::Configuration(msg.into())
    }

    pub(crate) fn shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        GenerationError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
