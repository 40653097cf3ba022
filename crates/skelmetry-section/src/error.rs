//! Error types for cross-section annotation.

use thiserror::Error;

/// Result type alias for annotation operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// Errors that can occur during cross-section annotation.
#[derive(Debug, Error)]
pub enum SectionError {
    /// The smoothing window must be at least 1.
    #[error("smoothing window must be >= 1, got {0}")]
    InvalidWindow(usize),

    /// A sectioning plane normal had zero or non-finite length.
    #[error("sectioning normal is degenerate: {0:?}")]
    DegenerateNormal([f64; 3]),

    /// A label-space operation failed.
    #[error(transparent)]
    Volume(#[from] skelmetry_volume::VolumeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SectionError::InvalidWindow(0);
        assert!(format!("{err}").contains(">= 1"));

        let err = SectionError::DegenerateNormal([0.0, 0.0, 0.0]);
        assert!(format!("{err}").contains("degenerate"));
    }
}
