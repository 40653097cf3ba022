//! Connected component labeling.

use hashbrown::HashMap;
use skelmetry_types::{LabeledVolume, MemoryLayout};

use crate::error::{VolumeError, VolumeResult};
use crate::label::Label;

/// Splits every label of a dense volume into 26-connected components.
///
/// Voxels sharing a nonzero label are merged when any of their 26
/// neighbors carries the same label. Output component ids are assigned
/// `1..=k` in scan order; background stays 0. Disjoint regions that share
/// an input id receive distinct output ids, guaranteeing one id per
/// connected region for downstream region extraction.
///
/// The output is always row-major.
///
/// # Example
///
/// ```
/// use skelmetry_types::{LabeledVolume, MemoryLayout};
/// use skelmetry_volume::connected_components;
///
/// // Two disjoint blocks share label 1.
/// let volume = LabeledVolume::from_fn([7, 3, 3], MemoryLayout::RowMajor, |[x, _, _]| {
///     u32::from(x <= 1 || x >= 5)
/// });
///
/// let components = connected_components(&volume);
/// assert_eq!(components.get([0, 0, 0]), Some(&1));
/// assert_eq!(components.get([6, 0, 0]), Some(&2));
/// ```
#[must_use]
pub fn connected_components(volume: &LabeledVolume<u32>) -> LabeledVolume<u32> {
    let dims = volume.dims();
    let total = dims[0] * dims[1] * dims[2];
    let mut provisional: Vec<u32> = vec![0; total];
    let mut forest = UnionFind::new();

    // Offsets to the 13 neighbors already visited in x,y,z scan order.
    let mut prior_offsets: Vec<[i64; 3]> = Vec::with_capacity(13);
    for dx in -1i64..=1 {
        for dy in -1i64..=1 {
            for dz in -1i64..=1 {
                if (dx, dy, dz) < (0, 0, 0) {
                    prior_offsets.push([dx, dy, dz]);
                }
            }
        }
    }

    let row_major = |x: usize, y: usize, z: usize| (x * dims[1] + y) * dims[2] + z;

    for x in 0..dims[0] {
        for y in 0..dims[1] {
            for z in 0..dims[2] {
                #[allow(clippy::cast_possible_wrap)]
                let coord = [x as i64, y as i64, z as i64];
                let Some(&label) = volume.get(coord) else {
                    continue;
                };
                if label == 0 {
                    continue;
                }

                let mut assigned = 0u32;
                for offset in &prior_offsets {
                    let neighbor = [
                        coord[0] + offset[0],
                        coord[1] + offset[1],
                        coord[2] + offset[2],
                    ];
                    if volume.get(neighbor) != Some(&label) {
                        continue;
                    }
                    #[allow(clippy::cast_sign_loss)]
                    let neighbor_provisional = provisional[row_major(
                        neighbor[0] as usize,
                        neighbor[1] as usize,
                        neighbor[2] as usize,
                    )];
                    if assigned == 0 {
                        assigned = neighbor_provisional;
                    } else {
                        forest.union(assigned, neighbor_provisional);
                    }
                }

                if assigned == 0 {
                    assigned = forest.make_set();
                }
                provisional[row_major(x, y, z)] = assigned;
            }
        }
    }

    // Second pass: compact union-find roots into 1..=k in scan order.
    let mut compact: HashMap<u32, u32> = HashMap::new();
    let mut next = 0u32;
    let data: Vec<u32> = provisional
        .iter()
        .map(|&p| {
            if p == 0 {
                return 0;
            }
            let root = forest.find(p);
            *compact.entry(root).or_insert_with(|| {
                next += 1;
                next
            })
        })
        .collect();

    LabeledVolume::new(dims, MemoryLayout::RowMajor, data)
        .unwrap_or_else(|_| LabeledVolume::filled(dims, MemoryLayout::RowMajor, 0))
}

/// Recovers, for every component id, the original label it was split from.
///
/// # Errors
///
/// Returns [`VolumeError::ShapeMismatch`] if the two volumes differ in
/// dimensions.
pub fn component_label_map<T: Label>(
    labels: &LabeledVolume<T>,
    components: &LabeledVolume<u32>,
) -> VolumeResult<HashMap<u32, i64>> {
    if labels.dims() != components.dims() {
        return Err(VolumeError::ShapeMismatch {
            expected: labels.dims(),
            actual: components.dims(),
        });
    }

    let dims = labels.dims();
    let mut mapping = HashMap::new();
    for x in 0..dims[0] {
        for y in 0..dims[1] {
            for z in 0..dims[2] {
                #[allow(clippy::cast_possible_wrap)]
                let coord = [x as i64, y as i64, z as i64];
                let (Some(&component), Some(&label)) = (components.get(coord), labels.get(coord))
                else {
                    continue;
                };
                if component != 0 {
                    mapping.entry(component).or_insert_with(|| label.to_id());
                }
            }
        }
    }
    Ok(mapping)
}

/// Union-find over provisional component ids (1-based).
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Slot 0 is unused so provisional ids can start at 1.
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, id: u32) -> u32 {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression.
        let mut current = id;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (low, high) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[high as usize] = low;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component() {
        let volume = LabeledVolume::filled([3, 3, 3], MemoryLayout::RowMajor, 5u32);
        let components = connected_components(&volume);
        assert!(components.data().iter().all(|&c| c == 1));
    }

    #[test]
    fn test_disjoint_same_label_split() {
        let volume = LabeledVolume::from_fn([9, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            u32::from(x <= 2 || x >= 6) * 4
        });
        let components = connected_components(&volume);
        assert_eq!(components.get([0, 0, 0]), Some(&1));
        assert_eq!(components.get([4, 0, 0]), Some(&0));
        assert_eq!(components.get([8, 0, 0]), Some(&2));
    }

    #[test]
    fn test_different_labels_never_merge() {
        let volume = LabeledVolume::from_fn([4, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            if x < 2 { 1u32 } else { 2 }
        });
        let components = connected_components(&volume);
        assert_ne!(components.get([1, 0, 0]), components.get([2, 0, 0]));
    }

    #[test]
    fn test_diagonal_connectivity() {
        // Two voxels touching only at a corner are 26-connected.
        let mut volume = LabeledVolume::filled([2, 2, 2], MemoryLayout::RowMajor, 0u32);
        volume.set([0, 0, 0], 1);
        volume.set([1, 1, 1], 1);
        let components = connected_components(&volume);
        assert_eq!(components.get([0, 0, 0]), components.get([1, 1, 1]));
    }

    #[test]
    fn test_u_shape_merges() {
        // A U shape forces a union between two provisional ids.
        let volume = LabeledVolume::from_fn([3, 3, 1], MemoryLayout::RowMajor, |[x, y, _]| {
            u32::from(x == 0 || x == 2 || y == 2)
        });
        let components = connected_components(&volume);
        assert_eq!(components.get([0, 0, 0]), Some(&1));
        assert_eq!(components.get([2, 0, 0]), Some(&1));
    }

    #[test]
    fn test_component_label_map() {
        let volume = LabeledVolume::from_fn([9, 1, 1], MemoryLayout::RowMajor, |[x, _, _]| {
            u32::from(x <= 2 || x >= 6) * 4
        });
        let components = connected_components(&volume);
        let mapping = component_label_map(&volume, &components).unwrap();
        assert_eq!(mapping.get(&1), Some(&4));
        assert_eq!(mapping.get(&2), Some(&4));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = LabeledVolume::filled([2, 2, 2], MemoryLayout::RowMajor, 1u32);
        let b = LabeledVolume::filled([3, 3, 3], MemoryLayout::RowMajor, 1u32);
        assert!(component_label_map(&a, &b).is_err());
    }
}
