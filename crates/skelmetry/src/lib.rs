//! Cross-sectional area annotation for curve-skeletons of labeled volumes.
//!
//! skelmetry measures, at every vertex of a curve-skeleton, the area of
//! the object's cross-section perpendicular to the local path direction,
//! and flags measurements the crop boundary may have truncated. It is
//! organized as three crates re-exported here:
//!
//! - [`types`] - Volumes, bounding boxes, anisotropy, and the skeleton
//!   data model
//! - [`volume`] - Label renumbering, bounding-box extraction, connected
//!   components, and cavity filling
//! - [`section`] - Normal smoothing, plane sampling, and the [`annotate`]
//!   pipeline
//!
//! # Example
//!
//! ```
//! use skelmetry::{annotate, AnnotateParams, LabeledVolume, MemoryLayout, Point3, Skeleton};
//!
//! // A solid object filling a small volume, with a straight skeleton
//! // running through its middle along z.
//! let volume = LabeledVolume::filled([5, 5, 5], MemoryLayout::RowMajor, 1u32);
//! let mut skeleton = Skeleton::from_parts(
//!     1,
//!     (0..5).map(|z| Point3::new(2.0, 2.0, f64::from(z))).collect(),
//!     (0..4).map(|i| [i, i + 1]).collect(),
//! );
//!
//! annotate(&volume, [&mut skeleton], &AnnotateParams::default()).unwrap();
//!
//! let areas = skeleton.cross_sectional_area.unwrap();
//! assert!((f64::from(areas[2]) - 25.0).abs() < 1e-4);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use skelmetry_section as section;
pub use skelmetry_types as types;
pub use skelmetry_volume as volume;

pub use skelmetry_section::{
    annotate, cross_sectional_area, moving_average, AnnotateParams, CrossSectionSample,
    SectionError, SectionResult,
};
pub use skelmetry_types::{
    Anisotropy, AttributeDataType, BinaryMask, GridBox, LabeledVolume, MemoryLayout, Point3,
    Skeleton, Vector3, VertexAttribute, CROSS_SECTIONAL_AREA_ATTRIBUTE,
};
pub use skelmetry_volume::{
    connected_components, fill_holes, find_bounding_boxes, renumber, Label, RemapTable,
    VolumeError, VolumeResult,
};
