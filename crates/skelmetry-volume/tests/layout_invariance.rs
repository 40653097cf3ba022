//! Property-based tests for the region locator.
//!
//! Bounding box detection must be invisible to the volume's memory layout:
//! the transposed fast path for column-major storage has to return boxes
//! identical to the row-major scan.

use proptest::prelude::*;
use skelmetry_types::{LabeledVolume, MemoryLayout};
use skelmetry_volume::{find_bounding_boxes, renumber};

/// Generate a small volume with a handful of labels.
fn arb_labels() -> impl Strategy<Value = (usize, usize, usize, Vec<u32>)> {
    (1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(dx, dy, dz)| {
        let len = dx * dy * dz;
        prop::collection::vec(0u32..4, len).prop_map(move |data| (dx, dy, dz, data))
    })
}

proptest! {
    #[test]
    fn boxes_invariant_under_layout((dx, dy, dz, data) in arb_labels()) {
        let row = LabeledVolume::new([dx, dy, dz], MemoryLayout::RowMajor, data.clone()).unwrap();

        // Rebuild the same logical volume in column-major storage.
        let column = LabeledVolume::from_fn([dx, dy, dz], MemoryLayout::ColumnMajor, |coord| {
            *row.get(coord.map(|c| c as i64)).unwrap()
        });

        prop_assert_eq!(find_bounding_boxes(&row), find_bounding_boxes(&column));
    }

    #[test]
    fn renumber_covers_every_present_id((dx, dy, dz, data) in arb_labels()) {
        let volume = LabeledVolume::new([dx, dy, dz], MemoryLayout::RowMajor, data.clone()).unwrap();
        let (dense, table) = renumber(&volume).unwrap();

        for &id in &data {
            prop_assert!(table.dense(i64::from(id)).is_some());
        }
        // The dense volume has the same background pattern.
        for (orig, new) in data.iter().zip(dense.data()) {
            prop_assert_eq!(*orig == 0, *new == 0);
        }
    }
}
