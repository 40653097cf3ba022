//! Plane sampling of binary masks.
//!
//! Computes the area of the section cut through a voxel mask by a plane,
//! together with a record of which crop faces the section touched.

use nalgebra::Vector3;
use skelmetry_types::{Anisotropy, BinaryMask};

use crate::error::{SectionError, SectionResult};

/// Contact bit for the x-min crop face.
pub const CONTACT_X_LOW: u8 = 1 << 0;
/// Contact bit for the x-max crop face.
pub const CONTACT_X_HIGH: u8 = 1 << 1;
/// Contact bit for the y-min crop face.
pub const CONTACT_Y_LOW: u8 = 1 << 2;
/// Contact bit for the y-max crop face.
pub const CONTACT_Y_HIGH: u8 = 1 << 3;
/// Contact bit for the z-min crop face.
pub const CONTACT_Z_LOW: u8 = 1 << 4;
/// Contact bit for the z-max crop face.
pub const CONTACT_Z_HIGH: u8 = 1 << 5;

/// One cross-section measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CrossSectionSample {
    /// Section area in physical squared units.
    pub area: f32,
    /// Crop-face contact bitfield (`xxyyzz` from the low bit, min face on
    /// the even bit and max face on the odd bit per axis). Nonzero means
    /// the section touched the crop boundary and the area may be an
    /// underestimate.
    pub contacts: u8,
}

/// Measures the cross-sectional area of a mask at a voxel position.
///
/// The sectioning plane passes through the physical-space center of the
/// voxel at `pos` with the given normal (interpreted in physical space and
/// normalized internally). Starting from that voxel, the in-plane region
/// of the mask is traversed via 26-connected flood fill over voxels whose
/// cells the plane intersects; each visited cell contributes the area of
/// its plane/cell intersection polygon.
///
/// A position outside the mask, or on a background voxel, measures zero
/// area with no contacts.
///
/// # Errors
///
/// Returns [`SectionError::DegenerateNormal`] if `normal` has zero or
/// non-finite length.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use skelmetry_section::cross_sectional_area;
/// use skelmetry_types::{Anisotropy, LabeledVolume, MemoryLayout};
///
/// let mask = LabeledVolume::filled([5, 5, 5], MemoryLayout::RowMajor, true);
/// let sample = cross_sectional_area(
///     &mask,
///     [2, 2, 2],
///     &Vector3::z(),
///     &Anisotropy::unit(),
/// ).unwrap();
///
/// // A full 5x5 slab of unit voxels.
/// assert!((sample.area - 25.0).abs() < 1e-4);
/// // The slab touches the four transverse crop faces, not the z faces.
/// assert_eq!(sample.contacts, 0b00_1111);
/// ```
pub fn cross_sectional_area(
    mask: &BinaryMask,
    pos: [i64; 3],
    normal: &Vector3<f64>,
    anisotropy: &Anisotropy,
) -> SectionResult<CrossSectionSample> {
    let length = normal.norm();
    if !length.is_finite() || length <= f64::EPSILON {
        return Err(SectionError::DegenerateNormal([normal.x, normal.y, normal.z]));
    }
    let unit = normal / length;

    if mask.get(pos) != Some(&true) {
        return Ok(CrossSectionSample::default());
    }

    let spacing = anisotropy.as_vector();
    let half = spacing / 2.0;
    // Largest |signed distance| from a cell center at which the plane can
    // still intersect the cell.
    let reach = half.x * unit.x.abs() + half.y * unit.y.abs() + half.z * unit.z.abs();
    let origin = physical_center(pos, spacing);

    // In-plane orthonormal basis for polygon projection.
    let u = if unit.x.abs() < 0.9 {
        Vector3::x().cross(&unit).normalize()
    } else {
        Vector3::y().cross(&unit).normalize()
    };
    let v = unit.cross(&u);

    let dims = mask.dims();
    #[allow(clippy::cast_possible_wrap)]
    let far = [dims[0] as i64 - 1, dims[1] as i64 - 1, dims[2] as i64 - 1];

    let mut visited = vec![false; mask.voxel_count()];
    let mut stack = vec![pos];
    if let Some(index) = mask.index_of(pos) {
        visited[index] = true;
    }

    let mut area = 0.0f64;
    let mut contacts = 0u8;

    while let Some(coord) = stack.pop() {
        area += cell_section_area(&physical_center(coord, spacing), &half, &origin, &unit, &u, &v);

        if coord[0] == 0 {
            contacts |= CONTACT_X_LOW;
        }
        if coord[0] == far[0] {
            contacts |= CONTACT_X_HIGH;
        }
        if coord[1] == 0 {
            contacts |= CONTACT_Y_LOW;
        }
        if coord[1] == far[1] {
            contacts |= CONTACT_Y_HIGH;
        }
        if coord[2] == 0 {
            contacts |= CONTACT_Z_LOW;
        }
        if coord[2] == far[2] {
            contacts |= CONTACT_Z_HIGH;
        }

        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                for dz in -1i64..=1 {
                    if (dx, dy, dz) == (0, 0, 0) {
                        continue;
                    }
                    let neighbor = [coord[0] + dx, coord[1] + dy, coord[2] + dz];
                    let Some(index) = mask.index_of(neighbor) else {
                        continue;
                    };
                    if visited[index] || !mask.data()[index] {
                        continue;
                    }
                    let center = physical_center(neighbor, spacing);
                    if (center - origin).dot(&unit).abs() > reach {
                        continue;
                    }
                    visited[index] = true;
                    stack.push(neighbor);
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    Ok(CrossSectionSample {
        area: area as f32,
        contacts,
    })
}

// ============================================================================
// Internal helper functions
// ============================================================================

#[allow(clippy::cast_precision_loss)]
fn physical_center(coord: [i64; 3], spacing: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        coord[0] as f64 * spacing.x,
        coord[1] as f64 * spacing.y,
        coord[2] as f64 * spacing.z,
    )
}

/// Corner pairs forming the 12 edges of an axis-aligned cell, with corners
/// bit-coded as `zyx`.
const CELL_EDGES: [(usize, usize); 12] = [
    (0b000, 0b001),
    (0b010, 0b011),
    (0b100, 0b101),
    (0b110, 0b111),
    (0b000, 0b010),
    (0b001, 0b011),
    (0b100, 0b110),
    (0b101, 0b111),
    (0b000, 0b100),
    (0b001, 0b101),
    (0b010, 0b110),
    (0b011, 0b111),
];

/// Area of the polygon cut by the plane through one cell.
fn cell_section_area(
    center: &Vector3<f64>,
    half: &Vector3<f64>,
    origin: &Vector3<f64>,
    normal: &Vector3<f64>,
    u: &Vector3<f64>,
    v: &Vector3<f64>,
) -> f64 {
    let mut corners = [Vector3::zeros(); 8];
    let mut distances = [0.0f64; 8];
    for (code, corner) in corners.iter_mut().enumerate() {
        let sign = |bit: usize| if (code >> bit) & 1 == 1 { 1.0 } else { -1.0 };
        *corner = center + Vector3::new(sign(0) * half.x, sign(1) * half.y, sign(2) * half.z);
        distances[code] = (*corner - origin).dot(normal);
    }

    let mut points: Vec<Vector3<f64>> = Vec::with_capacity(6);
    for (a, b) in CELL_EDGES {
        let (da, db) = (distances[a], distances[b]);
        if da * db > 0.0 {
            continue; // Same side of the plane.
        }
        if (da - db).abs() < 1e-12 {
            continue; // Edge lies in the plane; its endpoints come from
                      // the perpendicular edges.
        }
        let t = da / (da - db);
        let point = corners[a] + (corners[b] - corners[a]) * t;
        if !points.iter().any(|p| (p - point).norm() < 1e-9) {
            points.push(point);
        }
    }

    if points.len() < 3 {
        return 0.0;
    }

    // Project into the plane basis and sort around the centroid.
    let centroid: Vector3<f64> = points.iter().sum::<Vector3<f64>>() / points.len() as f64;
    let mut projected: Vec<(f64, f64)> = points
        .iter()
        .map(|p| ((p - centroid).dot(u), (p - centroid).dot(v)))
        .collect();
    projected.sort_by(|a, b| {
        a.1.atan2(a.0)
            .partial_cmp(&b.1.atan2(b.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Shoelace formula.
    let mut doubled = 0.0;
    for i in 0..projected.len() {
        let j = (i + 1) % projected.len();
        doubled += projected[i].0 * projected[j].1;
        doubled -= projected[j].0 * projected[i].1;
    }
    (doubled / 2.0).abs()
}
