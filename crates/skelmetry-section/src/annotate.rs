//! Skeleton annotation pipeline.

use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

use skelmetry_types::{
    Anisotropy, AttributeDataType, BinaryMask, GridBox, LabeledVolume, Skeleton, VertexAttribute,
    CROSS_SECTIONAL_AREA_ATTRIBUTE,
};
use skelmetry_volume::{fill_holes, find_bounding_boxes, renumber, Label};

use crate::error::{SectionError, SectionResult};
use crate::params::AnnotateParams;
use crate::sample::cross_sectional_area;
use crate::smooth::moving_average;

/// Annotates skeletons with per-vertex cross-sectional area.
///
/// For each skeleton whose label is present in `volume`, the object is
/// cropped out with a one-voxel margin, binarized, and sampled along every
/// skeleton path: each vertex gets the area of the plane section through
/// the object perpendicular to the (smoothed) path direction, plus a
/// crop-face contact bitfield flagging sections the volume boundary may
/// have truncated.
///
/// Results land in `Skeleton::cross_sectional_area` and
/// `Skeleton::cross_sectional_area_contacts`, and the
/// `cross_sectional_area` attribute descriptor is registered. Vertices
/// that already carry a nonzero area are left alone, so re-running over
/// adjacent volume cuts progressively completes a skeleton; with
/// [`AnnotateParams::repair_contacts`] set, only vertices with nonzero
/// contacts are recomputed instead, and skeletons never annotated before
/// are left untouched.
///
/// Skeletons whose label is absent from the volume, or whose object spans
/// at most one voxel in some corner-to-corner measure, are skipped
/// untouched.
///
/// # Errors
///
/// Returns [`SectionError::InvalidWindow`] if the smoothing window is
/// zero, and propagates label-cardinality errors from renumbering.
pub fn annotate<'a, T, I>(
    volume: &LabeledVolume<T>,
    skeletons: I,
    params: &AnnotateParams,
) -> SectionResult<()>
where
    T: Label,
    I: IntoIterator<Item = &'a mut Skeleton>,
{
    if params.smoothing_window == 0 {
        return Err(SectionError::InvalidWindow(0));
    }

    let (dense, table) = renumber(volume)?;
    let boxes = find_bounding_boxes(&dense);
    debug!(
        labels = table.foreground_count(),
        dims = ?dense.dims(),
        "renumbered volume"
    );

    let mut annotated = 0usize;
    for skeleton in skeletons {
        let label = if T::BINARY { 1 } else { skeleton.id };
        if label == 0 || skeleton.is_empty() {
            continue;
        }
        // Repair presupposes a previous annotation; there is nothing to
        // repair on a skeleton that was never measured.
        if params.repair_contacts && skeleton.cross_sectional_area_contacts.is_none() {
            continue;
        }
        let Some(dense_label) = table.dense(label) else {
            continue;
        };
        let Some(bbox) = boxes
            .get(dense_label as usize - 1)
            .copied()
            .flatten()
        else {
            continue;
        };
        if bbox.span_volume() <= 1 {
            debug!(label, "skipping degenerate object");
            continue;
        }

        let Some(roi) = bbox.grown(1).intersection(&GridBox::of_dims(dense.dims())) else {
            continue;
        };
        let mut mask = dense.crop_mask(&roi, &dense_label);
        if params.fill_holes {
            fill_holes(&mut mask);
        }

        annotate_one(skeleton, &mask, &roi, params);

        if params.progress {
            info!(label, vertices = skeleton.vertex_count(), "annotated skeleton");
        } else {
            debug!(label, vertices = skeleton.vertex_count(), "annotated skeleton");
        }
        annotated += 1;
    }

    info!(skeletons = annotated, "cross-section annotation finished");
    Ok(())
}

/// Samples one skeleton against its cropped object mask.
fn annotate_one(skeleton: &mut Skeleton, mask: &BinaryMask, roi: &GridBox, params: &AnnotateParams) {
    let vertex_count = skeleton.vertex_count();
    let dims = mask.dims();
    #[allow(clippy::cast_possible_wrap)]
    let limit = [dims[0] as i64, dims[1] as i64, dims[2] as i64];

    // Map each grid cell to the first vertex that rasterizes into it, so
    // coincident vertices share one measurement slot.
    let mut first_at: HashMap<[i64; 3], usize> = HashMap::with_capacity(vertex_count);
    for (i, vertex) in skeleton.vertices.iter().enumerate() {
        let coord = rasterize(vertex, &params.anisotropy, roi);
        first_at.entry(coord).or_insert(i);
    }

    // Reuse arrays from a previous run when they still line up, so already
    // measured vertices keep their values.
    let mut areas = match skeleton.cross_sectional_area.take() {
        Some(existing) if existing.len() == vertex_count => existing,
        _ => vec![0.0f32; vertex_count],
    };
    let mut contacts = match skeleton.cross_sectional_area_contacts.take() {
        Some(existing) if existing.len() == vertex_count => existing,
        _ => vec![0u8; vertex_count],
    };

    for path in skeleton.paths() {
        if path.len() < 2 {
            continue;
        }
        let coords: Vec<[i64; 3]> = path
            .iter()
            .map(|&i| rasterize(&skeleton.vertices[i as usize], &params.anisotropy, roi))
            .collect();

        // Forward differences, with the last direction duplicated so every
        // vertex has one.
        let mut normals: Vec<Vector3<f64>> = coords
            .windows(2)
            .map(|pair| {
                #[allow(clippy::cast_precision_loss)]
                Vector3::new(
                    (pair[1][0] - pair[0][0]) as f64,
                    (pair[1][1] - pair[0][1]) as f64,
                    (pair[1][2] - pair[0][2]) as f64,
                )
            })
            .collect();
        if let Some(&last) = normals.last() {
            normals.push(last);
        }
        let normals = match moving_average(&normals, params.smoothing_window) {
            Ok(smoothed) => smoothed,
            Err(_) => normals, // window was validated up front
        };

        // Stationary or cancelled-out directions inherit the previous
        // valid normal along the path.
        let mut previous = Vector3::x();
        for ((&vertex, coord), normal) in path.iter().zip(&coords).zip(&normals) {
            let unit = if normal.norm() > f64::EPSILON {
                previous = normal.normalize();
                previous
            } else {
                previous
            };

            if coord.iter().zip(&limit).any(|(&c, &d)| c < 0 || c >= d) {
                continue;
            }
            let Some(&index) = first_at.get(coord) else {
                continue;
            };
            let fresh = if params.repair_contacts {
                contacts[index] != 0
            } else {
                areas[index] == 0.0
            };
            if !fresh {
                continue;
            }

            match cross_sectional_area(mask, *coord, &unit, &params.anisotropy) {
                Ok(sample) => {
                    areas[index] = sample.area;
                    contacts[index] = sample.contacts;
                }
                Err(error) => {
                    debug!(vertex, %error, "skipping unsampleable vertex");
                }
            }
        }
    }

    skeleton.ensure_attribute(VertexAttribute {
        id: CROSS_SECTIONAL_AREA_ATTRIBUTE.to_string(),
        data_type: AttributeDataType::Float32,
        num_components: 1,
    });
    skeleton.cross_sectional_area = Some(areas);
    skeleton.cross_sectional_area_contacts = Some(contacts);
}

/// Converts a physical-space vertex to a grid coordinate inside the ROI.
fn rasterize(vertex: &Point3<f64>, anisotropy: &Anisotropy, roi: &GridBox) -> [i64; 3] {
    let scaled = [
        vertex.x / anisotropy.x(),
        vertex.y / anisotropy.y(),
        vertex.z / anisotropy.z(),
    ];
    [
        round_to_i64(scaled[0]) - roi.min[0],
        round_to_i64(scaled[1]) - roi.min[1],
        round_to_i64(scaled[2]) - roi.min[2],
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
