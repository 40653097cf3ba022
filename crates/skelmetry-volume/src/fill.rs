//! Hole filling for binary masks.

use std::collections::VecDeque;

use skelmetry_types::BinaryMask;

/// Fills interior cavities of a binary mask in place.
///
/// A cavity is any `false` region not 6-connected to the mask boundary.
/// The exterior is flood-filled from every `false` boundary voxel; all
/// remaining voxels become `true`. Cavities that open onto the volume
/// boundary are part of the exterior and stay unfilled.
///
/// # Example
///
/// ```
/// use skelmetry_types::{LabeledVolume, MemoryLayout};
/// use skelmetry_volume::fill_holes;
///
/// // A 5x5x5 shell with a hollow center voxel.
/// let mut mask = LabeledVolume::from_fn([5, 5, 5], MemoryLayout::RowMajor, |[x, y, z]| {
///     let interior = (1..4).contains(&x) && (1..4).contains(&y) && (1..4).contains(&z);
///     interior && [x, y, z] != [2, 2, 2]
/// });
///
/// fill_holes(&mut mask);
/// assert_eq!(mask.get([2, 2, 2]), Some(&true));
/// assert_eq!(mask.get([0, 0, 0]), Some(&false));
/// ```
pub fn fill_holes(mask: &mut BinaryMask) {
    let dims = mask.dims();
    if mask.voxel_count() == 0 {
        return;
    }

    let mut exterior = vec![false; mask.voxel_count()];
    let mut queue: VecDeque<[i64; 3]> = VecDeque::new();

    let seed = |mask: &BinaryMask,
                exterior: &mut [bool],
                queue: &mut VecDeque<[i64; 3]>,
                coord: [i64; 3]| {
        if let Some(index) = mask.index_of(coord) {
            if !mask.data()[index] && !exterior[index] {
                exterior[index] = true;
                queue.push_back(coord);
            }
        }
    };

    #[allow(clippy::cast_possible_wrap)]
    let far = [dims[0] as i64 - 1, dims[1] as i64 - 1, dims[2] as i64 - 1];
    for x in 0..=far[0] {
        for y in 0..=far[1] {
            for z in 0..=far[2] {
                if x == 0 || x == far[0] || y == 0 || y == far[1] || z == 0 || z == far[2] {
                    seed(mask, &mut exterior, &mut queue, [x, y, z]);
                }
            }
        }
    }

    const FACES: [[i64; 3]; 6] = [
        [1, 0, 0],
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
    ];

    while let Some(coord) = queue.pop_front() {
        for offset in FACES {
            let neighbor = [
                coord[0] + offset[0],
                coord[1] + offset[1],
                coord[2] + offset[2],
            ];
            seed(mask, &mut exterior, &mut queue, neighbor);
        }
    }

    for (voxel, outside) in mask.data_mut().iter_mut().zip(&exterior) {
        *voxel = !outside;
    }
}
