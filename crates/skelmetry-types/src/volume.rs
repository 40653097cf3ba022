//! Dense labeled volumes.

use crate::bounds::GridBox;
use crate::error::{GridError, GridResult};

/// Memory layout of a volume's flat storage.
///
/// Detection routines over volumes are sensitive to traversal order, so the
/// layout is tracked explicitly rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryLayout {
    /// The last axis (z) is contiguous in memory (C order).
    RowMajor,
    /// The first axis (x) is contiguous in memory (Fortran order).
    ColumnMajor,
}

impl MemoryLayout {
    /// The opposite layout.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::RowMajor => Self::ColumnMajor,
            Self::ColumnMajor => Self::RowMajor,
        }
    }
}

/// A dense 3D grid of per-voxel values.
///
/// Dimensions are `[x, y, z]` voxel counts. Storage is a flat buffer whose
/// element order is governed by [`MemoryLayout`]. Voxel accessors take
/// `[i64; 3]` coordinates and return `None` out of bounds, so translated
/// (crop-local, possibly negative) coordinates can be probed safely.
///
/// # Example
///
/// ```
/// use skelmetry_types::{LabeledVolume, MemoryLayout};
///
/// let mut volume: LabeledVolume<u32> =
///     LabeledVolume::filled([3, 3, 3], MemoryLayout::RowMajor, 0);
/// volume.set([1, 1, 1], 9);
///
/// assert_eq!(volume.get([1, 1, 1]), Some(&9));
/// assert_eq!(volume.get([-1, 0, 0]), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledVolume<T> {
    dims: [usize; 3],
    layout: MemoryLayout,
    data: Vec<T>,
}

/// A boolean volume, used for cropped object masks.
pub type BinaryMask = LabeledVolume<bool>;

impl<T> LabeledVolume<T> {
    /// Creates a volume from a flat buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if the buffer length does not equal
    /// the product of `dims`.
    pub fn new(dims: [usize; 3], layout: MemoryLayout, data: Vec<T>) -> GridResult<Self> {
        let expected = dims[0] * dims[1] * dims[2];
        if data.len() != expected {
            return Err(GridError::DataLength {
                dims,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, layout, data })
    }

    /// Creates a volume with every voxel set to `value`.
    #[must_use]
    pub fn filled(dims: [usize; 3], layout: MemoryLayout, value: T) -> Self
    where
        T: Clone,
    {
        let data = vec![value; dims[0] * dims[1] * dims[2]];
        Self { dims, layout, data }
    }

    /// Creates a volume by evaluating `f` at every coordinate.
    ///
    /// The buffer is filled in the storage order implied by `layout`.
    #[must_use]
    pub fn from_fn(
        dims: [usize; 3],
        layout: MemoryLayout,
        mut f: impl FnMut([usize; 3]) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        match layout {
            MemoryLayout::RowMajor => {
                for x in 0..dims[0] {
                    for y in 0..dims[1] {
                        for z in 0..dims[2] {
                            data.push(f([x, y, z]));
                        }
                    }
                }
            }
            MemoryLayout::ColumnMajor => {
                for z in 0..dims[2] {
                    for y in 0..dims[1] {
                        for x in 0..dims[0] {
                            data.push(f([x, y, z]));
                        }
                    }
                }
            }
        }
        Self { dims, layout, data }
    }

    /// Volume dimensions as `[x, y, z]` voxel counts.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The memory layout of the flat buffer.
    #[must_use]
    pub const fn layout(&self) -> MemoryLayout {
        self.layout
    }

    /// Total number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// The flat storage buffer.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the flat storage buffer.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The flat buffer index of a coordinate, or `None` out of bounds.
    #[must_use]
    pub fn index_of(&self, coord: [i64; 3]) -> Option<usize> {
        let x = usize::try_from(coord[0]).ok().filter(|&x| x < self.dims[0])?;
        let y = usize::try_from(coord[1]).ok().filter(|&y| y < self.dims[1])?;
        let z = usize::try_from(coord[2]).ok().filter(|&z| z < self.dims[2])?;
        Some(match self.layout {
            MemoryLayout::RowMajor => (x * self.dims[1] + y) * self.dims[2] + z,
            MemoryLayout::ColumnMajor => x + self.dims[0] * (y + self.dims[1] * z),
        })
    }

    /// The value at a coordinate, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, coord: [i64; 3]) -> Option<&T> {
        self.index_of(coord).map(|i| &self.data[i])
    }

    /// Sets the value at a coordinate. Returns `false` out of bounds.
    pub fn set(&mut self, coord: [i64; 3], value: T) -> bool {
        match self.index_of(coord) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Maps every voxel through `f`, preserving dims and layout.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> LabeledVolume<U> {
        LabeledVolume {
            dims: self.dims,
            layout: self.layout,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// A borrowed view of this volume.
    #[must_use]
    pub fn as_view(&self) -> VolumeView<'_, T> {
        VolumeView {
            dims: self.dims,
            layout: self.layout,
            data: &self.data,
        }
    }

    /// A transposed view of this volume, reusing the same flat buffer.
    ///
    /// Reversing the dimensions while flipping the layout reinterprets the
    /// buffer as the transposed volume without moving any data. A value at
    /// `[x, y, z]` in the original is at `[z, y, x]` in the view.
    ///
    /// # Example
    ///
    /// ```
    /// use skelmetry_types::{LabeledVolume, MemoryLayout};
    ///
    /// let volume = LabeledVolume::from_fn([2, 3, 4], MemoryLayout::ColumnMajor, |[x, y, z]| {
    ///     x * 100 + y * 10 + z
    /// });
    /// let view = volume.transposed_view();
    ///
    /// assert_eq!(view.dims(), [4, 3, 2]);
    /// assert_eq!(view.layout(), MemoryLayout::RowMajor);
    /// ```
    #[must_use]
    pub fn transposed_view(&self) -> VolumeView<'_, T> {
        VolumeView {
            dims: [self.dims[2], self.dims[1], self.dims[0]],
            layout: self.layout.flipped(),
            data: &self.data,
        }
    }

    /// Extracts a copy of the voxels inside `bbox`, clamped to the volume.
    ///
    /// The result is always row-major. Returns an empty volume when the box
    /// does not intersect the volume at all.
    #[must_use]
    pub fn crop(&self, bbox: &GridBox) -> Self
    where
        T: Clone,
    {
        self.crop_map(bbox, Clone::clone)
    }

    /// Crops to `bbox` while binarizing against `label`.
    ///
    /// Voxels equal to `label` become `true`; everything else `false`.
    #[must_use]
    pub fn crop_mask(&self, bbox: &GridBox, label: &T) -> BinaryMask
    where
        T: PartialEq,
    {
        self.crop_map(bbox, |v| v == label)
    }

    fn crop_map<U>(&self, bbox: &GridBox, f: impl Fn(&T) -> U) -> LabeledVolume<U> {
        let Some(clamped) = bbox.intersection(&GridBox::of_dims(self.dims)) else {
            return LabeledVolume {
                dims: [0, 0, 0],
                layout: MemoryLayout::RowMajor,
                data: Vec::new(),
            };
        };
        let size = clamped.size().map(|s| usize::try_from(s).unwrap_or(usize::MAX));
        let mut data = Vec::with_capacity(size[0] * size[1] * size[2]);
        for x in clamped.min[0]..=clamped.max[0] {
            for y in clamped.min[1]..=clamped.max[1] {
                for z in clamped.min[2]..=clamped.max[2] {
                    if let Some(i) = self.index_of([x, y, z]) {
                        data.push(f(&self.data[i]));
                    }
                }
            }
        }
        LabeledVolume {
            dims: size,
            layout: MemoryLayout::RowMajor,
            data,
        }
    }
}

/// A borrowed, possibly reinterpreted view of a [`LabeledVolume`] buffer.
#[derive(Debug, Clone, Copy)]
pub struct VolumeView<'a, T> {
    dims: [usize; 3],
    layout: MemoryLayout,
    data: &'a [T],
}

impl<'a, T> VolumeView<'a, T> {
    /// View dimensions as `[x, y, z]` voxel counts.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The memory layout of the viewed buffer.
    #[must_use]
    pub const fn layout(&self) -> MemoryLayout {
        self.layout
    }

    /// The viewed flat buffer.
    #[must_use]
    pub const fn data(&self) -> &'a [T] {
        self.data
    }
}
