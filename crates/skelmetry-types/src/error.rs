//! Error types for the core data model.

use thiserror::Error;

/// Result type alias for grid construction and access.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur constructing grid types.
#[derive(Debug, Error)]
pub enum GridError {
    /// The flat data buffer does not match the requested dimensions.
    #[error("data length {actual} does not match dims {dims:?} ({expected} voxels)")]
    DataLength {
        /// Requested volume dimensions.
        dims: [usize; 3],
        /// Number of voxels implied by `dims`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// Voxel spacing components must be positive and finite.
    #[error("voxel spacing must be positive and finite, got {0:?}")]
    InvalidSpacing([f64; 3]),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::DataLength {
            dims: [2, 2, 2],
            expected: 8,
            actual: 7,
        };
        assert!(format!("{err}").contains("does not match"));

        let err = GridError::InvalidSpacing([1.0, 0.0, 1.0]);
        assert!(format!("{err}").contains("positive"));
    }
}
