//! Core data model for skelmetry.
//!
//! This crate provides the foundational types shared by the skelmetry
//! pipeline:
//!
//! - [`LabeledVolume`] - Dense 3D grid of per-voxel values with an explicit
//!   memory layout
//! - [`BinaryMask`] - A boolean [`LabeledVolume`], used for cropped object
//!   masks
//! - [`GridBox`] - Inclusive axis-aligned box in voxel-index space
//! - [`Anisotropy`] - Validated physical voxel spacing per axis
//! - [`Skeleton`] - A curve-skeleton embedded in physical space, with the
//!   per-vertex attribute arrays the pipeline writes
//!
//! # Coordinate Systems
//!
//! Voxel-index coordinates are `[i64; 3]` so that translated coordinates
//! (for example, crop-local positions) may go negative without wrapping.
//! Physical coordinates are `f64` and relate to voxel indices through an
//! [`Anisotropy`] spacing vector: the physical center of voxel `[x, y, z]`
//! is `(x * sx, y * sy, z * sz)`.
//!
//! # Example
//!
//! ```
//! use skelmetry_types::{LabeledVolume, MemoryLayout};
//!
//! // A 4x4x4 volume with one object (label 7) in a 2x2x2 corner block.
//! let volume = LabeledVolume::from_fn([4, 4, 4], MemoryLayout::RowMajor, |[x, y, z]| {
//!     u32::from(x < 2 && y < 2 && z < 2) * 7
//! });
//!
//! assert_eq!(volume.get([0, 0, 0]), Some(&7));
//! assert_eq!(volume.get([3, 3, 3]), Some(&0));
//! assert_eq!(volume.get([4, 0, 0]), None);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod anisotropy;
mod bounds;
mod error;
mod paths;
mod skeleton;
mod volume;

pub use anisotropy::Anisotropy;
pub use bounds::GridBox;
pub use error::{GridError, GridResult};
pub use skeleton::{
    AttributeDataType, Skeleton, VertexAttribute, CROSS_SECTIONAL_AREA_ATTRIBUTE,
};
pub use volume::{BinaryMask, LabeledVolume, MemoryLayout, VolumeView};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
