//! Error types for curtain extraction.

use thiserror::Error;

/// Errors that can occur while extracting a curtain.
#[derive(Debug, Error)]
pub enum CurtainError {
    /// Two inputs that must agree in length do not.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An axis is too short to interpolate along.
    #[error("{axis} axis needs at least 2 samples, got {len}")]
    DegenerateAxis { axis: &'static str, len: usize },
}

impl CurtainError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Result type for curtain operations.
pub type Result<T> = std::result::Result<T, CurtainError>;
