//! Axis-aligned boxes in voxel-index space.

/// An inclusive axis-aligned box in voxel-index space.
///
/// Both corners are inclusive: a box covering a single voxel has
/// `min == max`.
///
/// # Example
///
/// ```
/// use skelmetry_types::GridBox;
///
/// let bbox = GridBox::new([0, 0, 0], [9, 9, 9]);
/// assert!(bbox.contains([5, 5, 5]));
/// assert!(!bbox.contains([10, 5, 5]));
/// assert_eq!(bbox.size(), [10, 10, 10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBox {
    /// Minimum corner (inclusive).
    pub min: [i64; 3],
    /// Maximum corner (inclusive).
    pub max: [i64; 3],
}

impl GridBox {
    /// Creates a box from two corners, ordering them per axis.
    ///
    /// # Example
    ///
    /// ```
    /// use skelmetry_types::GridBox;
    ///
    /// let bbox = GridBox::new([9, 0, 9], [0, 9, 0]);
    /// assert_eq!(bbox.min, [0, 0, 0]);
    /// assert_eq!(bbox.max, [9, 9, 9]);
    /// ```
    #[must_use]
    pub fn new(a: [i64; 3], b: [i64; 3]) -> Self {
        let mut min = [0i64; 3];
        let mut max = [0i64; 3];
        for axis in 0..3 {
            min[axis] = a[axis].min(b[axis]);
            max[axis] = a[axis].max(b[axis]);
        }
        Self { min, max }
    }

    /// Creates a box covering a single voxel.
    #[must_use]
    pub const fn from_point(coord: [i64; 3]) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// The box spanning a whole volume of the given dimensions.
    ///
    /// Returns a degenerate box at the origin for an empty volume.
    #[must_use]
    pub fn of_dims(dims: [usize; 3]) -> Self {
        let far = dims.map(|d| i64::try_from(d).unwrap_or(i64::MAX).saturating_sub(1).max(0));
        Self {
            min: [0, 0, 0],
            max: far,
        }
    }

    /// The number of voxels covered per axis.
    #[must_use]
    pub fn size(&self) -> [u64; 3] {
        [
            self.max[0].abs_diff(self.min[0]) + 1,
            self.max[1].abs_diff(self.min[1]) + 1,
            self.max[2].abs_diff(self.min[2]) + 1,
        ]
    }

    /// The number of voxels covered by the box.
    #[must_use]
    pub fn voxel_count(&self) -> u64 {
        let [w, h, d] = self.size();
        w.saturating_mul(h).saturating_mul(d)
    }

    /// The corner-to-corner extent product, `∏(max - min)`.
    ///
    /// This is the volume measure used by the degenerate-object check: any
    /// object flat along some axis (including one- and two-voxel objects)
    /// spans zero extent on that axis and collapses the product to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use skelmetry_types::GridBox;
    ///
    /// // A two-voxel object is degenerate by this measure.
    /// assert_eq!(GridBox::new([0, 0, 0], [0, 0, 1]).span_volume(), 0);
    /// // A 10x10x10 object is not.
    /// assert_eq!(GridBox::new([0, 0, 0], [9, 9, 9]).span_volume(), 729);
    /// ```
    #[must_use]
    pub fn span_volume(&self) -> u64 {
        let spans = [
            self.max[0].abs_diff(self.min[0]),
            self.max[1].abs_diff(self.min[1]),
            self.max[2].abs_diff(self.min[2]),
        ];
        spans[0].saturating_mul(spans[1]).saturating_mul(spans[2])
    }

    /// Checks whether the box contains a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: [i64; 3]) -> bool {
        coord[0] >= self.min[0]
            && coord[0] <= self.max[0]
            && coord[1] >= self.min[1]
            && coord[1] <= self.max[1]
            && coord[2] >= self.min[2]
            && coord[2] <= self.max[2]
    }

    /// Expands the box to include a coordinate.
    pub fn expand_to_include(&mut self, coord: [i64; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(coord[axis]);
            self.max[axis] = self.max[axis].max(coord[axis]);
        }
    }

    /// Returns the box grown by `by` voxels on every face.
    ///
    /// # Example
    ///
    /// ```
    /// use skelmetry_types::GridBox;
    ///
    /// let grown = GridBox::new([1, 1, 1], [8, 8, 8]).grown(1);
    /// assert_eq!(grown.min, [0, 0, 0]);
    /// assert_eq!(grown.max, [9, 9, 9]);
    /// ```
    #[must_use]
    pub fn grown(self, by: i64) -> Self {
        Self {
            min: self.min.map(|c| c.saturating_sub(by)),
            max: self.max.map(|c| c.saturating_add(by)),
        }
    }

    /// Returns the intersection with another box, or `None` if disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut min = [0i64; 3];
        let mut max = [0i64; 3];
        for axis in 0..3 {
            min[axis] = self.min[axis].max(other.min[axis]);
            max[axis] = self.max[axis].min(other.max[axis]);
            if min[axis] > max[axis] {
                return None;
            }
        }
        Some(Self { min, max })
    }

    /// Returns the box with its axis order reversed.
    ///
    /// Used when bounding boxes were computed on a transposed view of a
    /// volume and must be expressed in the original axis order.
    ///
    /// # Example
    ///
    /// ```
    /// use skelmetry_types::GridBox;
    ///
    /// let bbox = GridBox::new([1, 2, 3], [4, 5, 6]).reversed();
    /// assert_eq!(bbox.min, [3, 2, 1]);
    /// assert_eq!(bbox.max, [6, 5, 4]);
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            min: [self.min[2], self.min[1], self.min[0]],
            max: [self.max[2], self.max[1], self.max[0]],
        }
    }
}
