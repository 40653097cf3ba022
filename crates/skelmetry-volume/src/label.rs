//! Label value abstraction and the dense remap table.

use hashbrown::HashMap;

/// A voxel label value.
///
/// Implemented for the integer types a segmentation may carry plus `bool`.
/// Id 0 is the background sentinel on every implementation.
pub trait Label: Copy + Eq + core::hash::Hash + core::fmt::Debug {
    /// Whether this type is the strictly two-valued boolean volume, which
    /// bypasses remapping with the fixed `{false -> 0, true -> 1}` table.
    const BINARY: bool = false;

    /// The label as a signed 64-bit id.
    fn to_id(self) -> i64;
}

impl Label for bool {
    const BINARY: bool = true;

    fn to_id(self) -> i64 {
        i64::from(self)
    }
}

macro_rules! impl_label_int {
    ($($ty:ty),*) => {
        $(
            impl Label for $ty {
                fn to_id(self) -> i64 {
                    i64::from(self)
                }
            }
        )*
    };
}

impl_label_int!(u8, u16, u32, i8, i16, i32, i64);

impl Label for u64 {
    fn to_id(self) -> i64 {
        // Bit-pattern reinterpretation: a bijection, so every u64 id keeps
        // a distinct identity. Ids above i64::MAX surface as negative ids,
        // matching the signed ids skeletons carry.
        #[allow(clippy::cast_possible_wrap)]
        {
            self as i64
        }
    }
}

/// Mapping from original label ids to dense positive ids.
///
/// Produced by [`renumber`](crate::renumber). Background (id 0) always maps
/// to 0; every foreground id present in the source volume maps to a dense
/// id in `1..=foreground_count`.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    forward: HashMap<i64, u32>,
}

impl RemapTable {
    /// Builds a table from explicit (original, dense) pairs.
    ///
    /// The background entry `0 -> 0` is always present.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, u32)>) -> Self {
        let mut forward: HashMap<i64, u32> = pairs.into_iter().collect();
        forward.insert(0, 0);
        Self { forward }
    }

    /// The dense id for an original id, or `None` if the id was absent
    /// from the source volume.
    #[must_use]
    pub fn dense(&self, id: i64) -> Option<u32> {
        self.forward.get(&id).copied()
    }

    /// Number of foreground ids in the table.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.forward.len().saturating_sub(1)
    }

    /// Whether remapping every id to itself would be a no-op.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.forward.iter().all(|(&id, &dense)| id == i64::from(dense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_always_present() {
        let table = RemapTable::from_pairs([(17, 1)]);
        assert_eq!(table.dense(0), Some(0));
        assert_eq!(table.dense(17), Some(1));
        assert_eq!(table.dense(99), None);
        assert_eq!(table.foreground_count(), 1);
    }

    #[test]
    fn test_identity_detection() {
        assert!(RemapTable::from_pairs([(1, 1), (2, 2)]).is_identity());
        assert!(!RemapTable::from_pairs([(7, 1)]).is_identity());
    }

    #[test]
    fn test_label_ids() {
        assert_eq!(true.to_id(), 1);
        assert_eq!(false.to_id(), 0);
        assert_eq!(200u8.to_id(), 200);
        assert_eq!((-3i32).to_id(), -3);
        assert_eq!(7_000_000_000u64.to_id(), 7_000_000_000);
        assert_eq!(u64::MAX.to_id(), -1);
        assert!(bool::BINARY);
        assert!(!u32::BINARY);
        assert!(!u64::BINARY);
    }
}
