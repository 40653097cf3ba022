//! Cross-sectional area annotation for curve-skeletons.
//!
//! Given a labeled volume and the skeletons extracted from it, this crate
//! measures the cross-sectional area of each object at every skeleton
//! vertex, sectioning perpendicular to the local (smoothed) path
//! direction, and records a crop-face contact bitfield wherever a section
//! ran into the volume boundary.
//!
//! The entry point is [`annotate`], configured through [`AnnotateParams`];
//! the underlying plane sampler [`cross_sectional_area`] and the normal
//! smoother [`moving_average`] are exposed for direct use.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use skelmetry_section::{annotate, AnnotateParams};
//! use skelmetry_types::{LabeledVolume, MemoryLayout, Skeleton};
//!
//! let volume = LabeledVolume::filled([5, 5, 5], MemoryLayout::RowMajor, 1u32);
//!
//! let mut skeleton = Skeleton::from_parts(
//!     1,
//!     (0..5).map(|z| Point3::new(2.0, 2.0, f64::from(z))).collect(),
//!     (0..4).map(|i| [i, i + 1]).collect(),
//! );
//!
//! annotate(&volume, [&mut skeleton], &AnnotateParams::default()).unwrap();
//!
//! let areas = skeleton.cross_sectional_area.as_ref().unwrap();
//! assert!((f64::from(areas[2]) - 25.0).abs() < 1e-4);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod annotate;
mod error;
mod params;
mod sample;
mod smooth;

pub use annotate::annotate;
pub use error::{SectionError, SectionResult};
pub use params::AnnotateParams;
pub use sample::{
    cross_sectional_area, CrossSectionSample, CONTACT_X_HIGH, CONTACT_X_LOW, CONTACT_Y_HIGH,
    CONTACT_Y_LOW, CONTACT_Z_HIGH, CONTACT_Z_LOW,
};
pub use smooth::moving_average;
