//! Curve-skeleton representation.

use nalgebra::Point3;

use crate::paths::decompose_paths;

/// Attribute id of the per-vertex cross-sectional area field.
pub const CROSS_SECTIONAL_AREA_ATTRIBUTE: &str = "cross_sectional_area";

/// Element type of a per-vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeDataType {
    /// 32-bit IEEE float.
    Float32,
    /// Unsigned byte.
    Uint8,
}

/// Descriptor for a per-vertex attribute carried by a skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexAttribute {
    /// Attribute name, unique within a skeleton.
    pub id: String,
    /// Element type of the attribute array.
    pub data_type: AttributeDataType,
    /// Number of components per vertex.
    pub num_components: u32,
}

/// A curve-skeleton of one segmented object.
///
/// Vertices are physical-space coordinates; edges connect vertex indices
/// into one or more trees. The `id` matches a label in the volume the
/// skeleton was extracted from.
///
/// The two optional per-vertex arrays are written by the annotation
/// pipeline and are parallel to `vertices` once populated.
///
/// # Example
///
/// ```
/// use skelmetry_types::Skeleton;
/// use nalgebra::Point3;
///
/// let mut skel = Skeleton::new(4);
/// skel.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// skel.vertices.push(Point3::new(0.0, 0.0, 1.0));
/// skel.vertices.push(Point3::new(0.0, 0.0, 2.0));
/// skel.edges.push([0, 1]);
/// skel.edges.push([1, 2]);
///
/// assert_eq!(skel.vertex_count(), 3);
/// assert_eq!(skel.paths(), vec![vec![0, 1, 2]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skeleton {
    /// Label of the object this skeleton traces.
    pub id: i64,
    /// Vertex positions in physical space.
    pub vertices: Vec<Point3<f64>>,
    /// Undirected edges between vertex indices.
    pub edges: Vec<[u32; 2]>,
    /// Per-vertex cross-sectional area in physical squared units.
    pub cross_sectional_area: Option<Vec<f32>>,
    /// Per-vertex crop-face contact bitfield.
    ///
    /// The low six bits encode `xxyyzz` faces from the low bit: x-min,
    /// x-max, y-min, y-max, z-min, z-max. A nonzero byte means the area
    /// sample touched the crop boundary and may be an underestimate.
    pub cross_sectional_area_contacts: Option<Vec<u8>>,
    /// Descriptors of the per-vertex attributes present on this skeleton.
    pub extra_attributes: Vec<VertexAttribute>,
}

impl Skeleton {
    /// Creates an empty skeleton with the given object label.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            edges: Vec::new(),
            cross_sectional_area: None,
            cross_sectional_area_contacts: None,
            extra_attributes: Vec::new(),
        }
    }

    /// Creates a skeleton from vertices and edges.
    #[must_use]
    pub const fn from_parts(id: i64, vertices: Vec<Point3<f64>>, edges: Vec<[u32; 2]>) -> Self {
        Self {
            id,
            vertices,
            edges,
            cross_sectional_area: None,
            cross_sectional_area_contacts: None,
            extra_attributes: Vec::new(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the skeleton has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether an attribute descriptor with the given id is present.
    #[must_use]
    pub fn has_attribute(&self, id: &str) -> bool {
        self.extra_attributes.iter().any(|attr| attr.id == id)
    }

    /// Appends an attribute descriptor unless one with the same id exists.
    pub fn ensure_attribute(&mut self, attribute: VertexAttribute) {
        if !self.has_attribute(&attribute.id) {
            self.extra_attributes.push(attribute);
        }
    }

    /// Decomposes the edge graph into maximal simple paths.
    ///
    /// Each path is a walk of graph-adjacent vertex indices; every edge is
    /// covered by at least one path. The decomposition is deterministic:
    /// per connected component the walk starts at the smallest-index
    /// degree-1 vertex (smallest index overall when the component has no
    /// leaf) and explores neighbors in ascending index order, emitting one
    /// root-to-leaf path per dead end. Isolated vertices yield
    /// single-vertex paths.
    ///
    /// Paths are recomputed on every call, never cached.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<u32>> {
        decompose_paths(self.vertices.len(), &self.edges)
    }
}
