//! Label-space operations over dense voxel volumes.
//!
//! This crate provides the volume-level building blocks of the skelmetry
//! pipeline:
//!
//! - [`renumber`] - Remap an arbitrary-valued label volume to a compact
//!   positive id space (the label space normalizer)
//! - [`find_bounding_boxes`] - Minimal per-label bounding boxes, invariant
//!   to the volume's memory layout (the region locator)
//! - [`connected_components`] - 26-connected labeling splitting disjoint
//!   regions that share an id
//! - [`fill_holes`] - Close interior cavities of a binary mask
//!
//! # Example
//!
//! ```
//! use skelmetry_types::{LabeledVolume, MemoryLayout};
//! use skelmetry_volume::{find_bounding_boxes, renumber};
//!
//! // Sparse ids (7 and 400) become dense ids (1 and 2).
//! let volume = LabeledVolume::from_fn([4, 4, 4], MemoryLayout::RowMajor, |[x, _, _]| {
//!     match x {
//!         0 => 7u32,
//!         3 => 400,
//!         _ => 0,
//!     }
//! });
//!
//! let (dense, table) = renumber(&volume).unwrap();
//! assert_eq!(table.dense(7), Some(1));
//! assert_eq!(table.dense(400), Some(2));
//!
//! let boxes = find_bounding_boxes(&dense);
//! assert_eq!(boxes.len(), 2);
//! assert_eq!(boxes[0].unwrap().min, [0, 0, 0]);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod components;
mod error;
mod fill;
mod label;
mod regions;
mod remap;

pub use components::{component_label_map, connected_components};
pub use error::{VolumeError, VolumeResult};
pub use fill::fill_holes;
pub use label::{Label, RemapTable};
pub use regions::find_bounding_boxes;
pub use remap::renumber;
