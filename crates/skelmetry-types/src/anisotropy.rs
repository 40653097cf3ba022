//! Physical voxel spacing.

use nalgebra::Vector3;

use crate::error::{GridError, GridResult};

/// Physical voxel spacing per axis.
///
/// Converts between voxel-index space and physical space. All components
/// are validated to be positive and finite at construction, so downstream
/// code can divide and multiply by the spacing without further checks.
///
/// # Example
///
/// ```
/// use skelmetry_types::Anisotropy;
///
/// // EM imagery is commonly anisotropic along z.
/// let aniso = Anisotropy::new(16.0, 16.0, 40.0).unwrap();
/// assert_eq!(aniso.z(), 40.0);
///
/// // The default spacing is the unit vector.
/// let unit = Anisotropy::default();
/// assert_eq!(unit.as_vector(), &nalgebra::Vector3::new(1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anisotropy(Vector3<f64>);

impl Anisotropy {
    /// Creates a spacing vector from per-axis components.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSpacing`] if any component is zero,
    /// negative, or not finite.
    pub fn new(x: f64, y: f64, z: f64) -> GridResult<Self> {
        if [x, y, z].iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return Err(GridError::InvalidSpacing([x, y, z]));
        }
        Ok(Self(Vector3::new(x, y, z)))
    }

    /// The identity spacing (1, 1, 1).
    #[must_use]
    pub fn unit() -> Self {
        Self(Vector3::new(1.0, 1.0, 1.0))
    }

    /// Spacing along the x axis.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Spacing along the y axis.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Spacing along the z axis.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The spacing as a vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Default for Anisotropy {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<[f64; 3]> for Anisotropy {
    type Error = GridError;

    fn try_from([x, y, z]: [f64; 3]) -> GridResult<Self> {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spacing() {
        let aniso = Anisotropy::new(16.0, 16.0, 40.0).unwrap();
        assert_eq!(aniso.x(), 16.0);
        assert_eq!(aniso.y(), 16.0);
        assert_eq!(aniso.z(), 40.0);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(Anisotropy::new(1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(Anisotropy::new(-1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Anisotropy::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(Anisotropy::new(1.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_default_is_unit() {
        assert_eq!(Anisotropy::default(), Anisotropy::unit());
    }

    #[test]
    fn test_try_from_array() {
        let aniso = Anisotropy::try_from([2.0, 2.0, 1.0]).unwrap();
        assert_eq!(aniso.x(), 2.0);
        assert!(Anisotropy::try_from([0.0, 1.0, 1.0]).is_err());
    }
}
