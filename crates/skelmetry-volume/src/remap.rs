//! Label space normalization.

use hashbrown::{HashMap, HashSet};
use skelmetry_types::LabeledVolume;

use crate::error::{VolumeError, VolumeResult};
use crate::label::{Label, RemapTable};

/// Remaps an arbitrary-valued label volume to a dense positive id space.
///
/// Every distinct foreground id present in the volume is assigned a dense
/// id in `1..=k` in ascending original-id order; background (id 0) stays 0.
/// Ascending assignment makes the remap a value-identity whenever the
/// input already uses ids `1..=k`, so renumbering an already-dense volume
/// only changes the element type, never the values.
///
/// Boolean volumes skip the scan entirely and use the fixed
/// `{false -> 0, true -> 1}` table.
///
/// The returned volume preserves the input's dimensions and memory layout.
///
/// # Errors
///
/// Returns [`VolumeError::TooManyLabels`] if the number of distinct
/// foreground ids exceeds the dense `u32` id space.
///
/// # Example
///
/// ```
/// use skelmetry_types::{LabeledVolume, MemoryLayout};
/// use skelmetry_volume::renumber;
///
/// let volume = LabeledVolume::from_fn([2, 2, 2], MemoryLayout::RowMajor, |[x, y, _]| {
///     [[0i64, -5], [31, 900]][x][y]
/// });
///
/// let (dense, table) = renumber(&volume).unwrap();
/// // Ascending original order: -5 -> 1, 31 -> 2, 900 -> 3.
/// assert_eq!(table.dense(-5), Some(1));
/// assert_eq!(table.dense(31), Some(2));
/// assert_eq!(table.dense(900), Some(3));
/// assert_eq!(dense.get([0, 0, 0]), Some(&0));
/// assert_eq!(dense.get([1, 1, 0]), Some(&3));
/// ```
pub fn renumber<T: Label>(volume: &LabeledVolume<T>) -> VolumeResult<(LabeledVolume<u32>, RemapTable)> {
    if T::BINARY {
        let dense = volume.map(|v| u32::from(v.to_id() != 0));
        return Ok((dense, RemapTable::from_pairs([(1, 1)])));
    }

    let mut present: HashSet<i64> = HashSet::new();
    for v in volume.data() {
        let id = v.to_id();
        if id != 0 {
            present.insert(id);
        }
    }

    let mut ordered: Vec<i64> = present.into_iter().collect();
    ordered.sort_unstable();
    let Ok(count) = u32::try_from(ordered.len()) else {
        return Err(VolumeError::TooManyLabels(ordered.len()));
    };
    if count == u32::MAX {
        return Err(VolumeError::TooManyLabels(ordered.len()));
    }

    let mut forward: HashMap<i64, u32> = HashMap::with_capacity(ordered.len() + 1);
    forward.insert(0, 0);
    for (i, id) in ordered.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        forward.insert(*id, i as u32 + 1);
    }

    let dense = volume.map(|v| forward.get(&v.to_id()).copied().unwrap_or(0));
    Ok((dense, RemapTable::from_pairs(forward)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use skelmetry_types::MemoryLayout;

    #[test]
    fn test_dense_input_is_value_identity() {
        let volume = LabeledVolume::from_fn([3, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            [2u32, 1, 0][x]
        });
        let (dense, table) = renumber(&volume).unwrap();
        assert!(table.is_identity());
        assert_eq!(dense.data(), volume.data());
    }

    #[test]
    fn test_sparse_ids_compacted() {
        let volume = LabeledVolume::from_fn([4, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            [0u32, 1000, 5, 1000][x]
        });
        let (dense, table) = renumber(&volume).unwrap();
        assert_eq!(table.dense(5), Some(1));
        assert_eq!(table.dense(1000), Some(2));
        assert_eq!(dense.data(), &[0, 2, 1, 2]);
    }

    #[test]
    fn test_no_foreground_id_lost() {
        let volume = LabeledVolume::from_fn([4, 4, 4], MemoryLayout::ColumnMajor, |[x, y, z]| {
            (x + y * 4 + z * 16) as u16
        });
        let (_, table) = renumber(&volume).unwrap();
        assert_eq!(table.foreground_count(), 63);
        for id in 1..64 {
            assert!(table.dense(id).is_some());
        }
    }

    #[test]
    fn test_negative_ids() {
        let volume = LabeledVolume::from_fn([2, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            [-9i32, 4][x]
        });
        let (dense, table) = renumber(&volume).unwrap();
        assert_eq!(table.dense(-9), Some(1));
        assert_eq!(table.dense(4), Some(2));
        assert_eq!(dense.data(), &[1, 2]);
    }

    #[test]
    fn test_u64_segmentation() {
        // Connectomics segmentations are commonly uint64; ids beyond the
        // u32 dense space must still renumber, and ids beyond i64::MAX
        // must stay distinct.
        let volume = LabeledVolume::from_fn([4, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            [0u64, 7_000_000_000, 12, u64::MAX][x]
        });
        let (dense, table) = renumber(&volume).unwrap();
        assert_eq!(table.foreground_count(), 3);
        assert_eq!(table.dense(u64::MAX.to_id()), Some(1));
        assert_eq!(table.dense(12), Some(2));
        assert_eq!(table.dense(7_000_000_000), Some(3));
        assert_eq!(dense.data(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_boolean_fast_path() {
        let volume = LabeledVolume::from_fn([2, 2, 1], MemoryLayout::ColumnMajor, |[x, _, _]| x == 1);
        let (dense, table) = renumber(&volume).unwrap();
        assert_eq!(table.dense(0), Some(0));
        assert_eq!(table.dense(1), Some(1));
        assert_eq!(dense.layout(), MemoryLayout::ColumnMajor);
        assert_eq!(dense.data().iter().sum::<u32>(), 2);
    }

    #[test]
    fn test_layout_preserved() {
        let volume = LabeledVolume::filled([2, 3, 4], MemoryLayout::ColumnMajor, 8u8);
        let (dense, _) = renumber(&volume).unwrap();
        assert_eq!(dense.layout(), MemoryLayout::ColumnMajor);
        assert_eq!(dense.dims(), [2, 3, 4]);
    }
}
