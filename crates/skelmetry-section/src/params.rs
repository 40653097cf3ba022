//! Annotation parameters.

use skelmetry_types::Anisotropy;

/// Configuration for [`annotate`](crate::annotate).
///
/// # Example
///
/// ```
/// use skelmetry_section::AnnotateParams;
/// use skelmetry_types::Anisotropy;
///
/// let params = AnnotateParams::default()
///     .with_anisotropy(Anisotropy::new(16.0, 16.0, 40.0).unwrap())
///     .with_smoothing_window(5)
///     .with_fill_holes(true);
///
/// assert_eq!(params.smoothing_window, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotateParams {
    /// Physical voxel spacing along each axis.
    pub anisotropy: Anisotropy,
    /// Width of the moving-average window applied to vertex normals
    /// before sampling. Must be at least 1; 1 disables smoothing.
    pub smoothing_window: usize,
    /// Fill cavities fully enclosed by each object before measuring, so
    /// internal voids do not punch holes in the sections.
    pub fill_holes: bool,
    /// Recompute only vertices whose existing contact bitfield is
    /// nonzero, instead of vertices with no recorded area.
    pub repair_contacts: bool,
    /// Emit per-skeleton progress at info level.
    pub progress: bool,
}

impl Default for AnnotateParams {
    fn default() -> Self {
        Self {
            anisotropy: Anisotropy::unit(),
            smoothing_window: 1,
            fill_holes: false,
            repair_contacts: false,
            progress: false,
        }
    }
}

impl AnnotateParams {
    /// Sets the physical voxel spacing.
    #[must_use]
    pub fn with_anisotropy(mut self, anisotropy: Anisotropy) -> Self {
        self.anisotropy = anisotropy;
        self
    }

    /// Sets the normal smoothing window.
    #[must_use]
    pub fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Enables or disables cavity filling.
    #[must_use]
    pub fn with_fill_holes(mut self, fill: bool) -> Self {
        self.fill_holes = fill;
        self
    }

    /// Enables or disables repair mode.
    #[must_use]
    pub fn with_repair_contacts(mut self, repair: bool) -> Self {
        self.repair_contacts = repair;
        self
    }

    /// Enables or disables progress logging.
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = AnnotateParams::default();
        assert_eq!(params.anisotropy, Anisotropy::unit());
        assert_eq!(params.smoothing_window, 1);
        assert!(!params.fill_holes);
        assert!(!params.repair_contacts);
        assert!(!params.progress);
    }

    #[test]
    fn test_builder_chain() {
        let params = AnnotateParams::default()
            .with_smoothing_window(7)
            .with_fill_holes(true)
            .with_repair_contacts(true)
            .with_progress(true);
        assert_eq!(params.smoothing_window, 7);
        assert!(params.fill_holes);
        assert!(params.repair_contacts);
        assert!(params.progress);
    }
}
