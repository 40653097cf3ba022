//! Per-label bounding box detection.

use skelmetry_types::{GridBox, LabeledVolume, MemoryLayout};

/// Finds the minimal bounding box of every dense label in the volume.
///
/// The result is indexed by `dense label - 1`: entry `L - 1` is the box
/// covering every voxel equal to `L`, or `None` when label `L` is absent.
/// The vector's length is the largest label present (zero for an all
/// background volume).
///
/// The scan is written for row-major storage, where the innermost loop
/// walks contiguous memory. Column-major volumes are handled through a
/// transposed view of the same buffer and the resulting boxes are
/// axis-reversed back, so callers always receive boxes in the original
/// axis order regardless of layout.
///
/// # Example
///
/// ```
/// use skelmetry_types::{LabeledVolume, MemoryLayout};
/// use skelmetry_volume::find_bounding_boxes;
///
/// let volume = LabeledVolume::from_fn([6, 6, 6], MemoryLayout::RowMajor, |[x, y, z]| {
///     u32::from(x >= 2 && x <= 4 && y == 1 && z <= 3)
/// });
///
/// let boxes = find_bounding_boxes(&volume);
/// let bbox = boxes[0].unwrap();
/// assert_eq!(bbox.min, [2, 1, 0]);
/// assert_eq!(bbox.max, [4, 1, 3]);
/// ```
#[must_use]
pub fn find_bounding_boxes(volume: &LabeledVolume<u32>) -> Vec<Option<GridBox>> {
    match volume.layout() {
        MemoryLayout::RowMajor => scan_row_major(volume.dims(), volume.data()),
        MemoryLayout::ColumnMajor => {
            let view = volume.transposed_view();
            scan_row_major(view.dims(), view.data())
                .into_iter()
                .map(|bbox| bbox.map(GridBox::reversed))
                .collect()
        }
    }
}

/// Linear scan over row-major storage, tracking one box per label.
fn scan_row_major(dims: [usize; 3], data: &[u32]) -> Vec<Option<GridBox>> {
    let mut boxes: Vec<Option<GridBox>> = Vec::new();
    let mut index = 0usize;

    for x in 0..dims[0] {
        for y in 0..dims[1] {
            for z in 0..dims[2] {
                let label = data[index];
                index += 1;
                if label == 0 {
                    continue;
                }
                let slot = label as usize - 1;
                if slot >= boxes.len() {
                    boxes.resize(slot + 1, None);
                }
                #[allow(clippy::cast_possible_wrap)]
                let coord = [x as i64, y as i64, z as i64];
                match &mut boxes[slot] {
                    Some(bbox) => bbox.expand_to_include(coord),
                    none => *none = Some(GridBox::from_point(coord)),
                }
            }
        }
    }

    boxes
}
