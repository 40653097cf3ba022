//! Error types for volume operations.

use thiserror::Error;

/// Result type alias for volume operations.
pub type VolumeResult<T> = Result<T, VolumeError>;

/// Errors that can occur during label-space operations.
#[derive(Debug, Error)]
pub enum VolumeError {
    /// More distinct foreground ids than the dense id space can hold.
    #[error("volume has {0} distinct foreground ids, exceeding the dense u32 id space")]
    TooManyLabels(usize),

    /// Two volumes expected to share dimensions do not.
    #[error("volume dims {expected:?} do not match {actual:?}")]
    ShapeMismatch {
        /// Dimensions of the first volume.
        expected: [usize; 3],
        /// Dimensions of the second volume.
        actual: [usize; 3],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VolumeError::TooManyLabels(5_000_000_000);
        assert!(format!("{err}").contains("distinct foreground ids"));

        let err = VolumeError::ShapeMismatch {
            expected: [1, 2, 3],
            actual: [3, 2, 1],
        };
        assert!(format!("{err}").contains("do not match"));
    }
}
