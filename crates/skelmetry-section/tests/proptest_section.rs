//! Property-based tests for normal smoothing and plane sampling.

use nalgebra::Vector3;
use proptest::prelude::*;
use skelmetry_section::{cross_sectional_area, moving_average};
use skelmetry_types::{Anisotropy, LabeledVolume, MemoryLayout};

fn arb_vectors() -> impl Strategy<Value = Vec<Vector3<f64>>> {
    prop::collection::vec(
        (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0)
            .prop_map(|(x, y, z)| Vector3::new(x, y, z)),
        0..32,
    )
}

proptest! {
    /// Smoothing never changes the number of vectors.
    #[test]
    fn smoothing_preserves_length(vectors in arb_vectors(), window in 1usize..12) {
        let smoothed = moving_average(&vectors, window).unwrap();
        prop_assert_eq!(smoothed.len(), vectors.len());
    }

    /// Smoothed components stay within the input component range.
    #[test]
    fn smoothing_stays_in_bounds(vectors in arb_vectors(), window in 1usize..12) {
        let smoothed = moving_average(&vectors, window).unwrap();
        for axis in 0..3 {
            let lo = vectors.iter().map(|v| v[axis]).fold(f64::INFINITY, f64::min);
            let hi = vectors.iter().map(|v| v[axis]).fold(f64::NEG_INFINITY, f64::max);
            for vector in &smoothed {
                prop_assert!(vector[axis] >= lo - 1e-9);
                prop_assert!(vector[axis] <= hi + 1e-9);
            }
        }
    }

    /// A constant sequence is a fixed point of smoothing.
    #[test]
    fn smoothing_fixes_constants(window in 1usize..12, n in 1usize..16) {
        let vectors = vec![Vector3::new(0.5, -1.5, 2.0); n];
        let smoothed = moving_average(&vectors, window).unwrap();
        for vector in &smoothed {
            prop_assert!((vector - vectors[0]).norm() < 1e-9);
        }
    }

    /// Sampling a solid cube along any axis direction gives a positive,
    /// bounded area and never panics.
    #[test]
    fn sampling_solid_cube_is_finite(
        x in 0i64..6, y in 0i64..6, z in 0i64..6,
        nx in -1.0f64..1.0, ny in -1.0f64..1.0, nz in -1.0f64..1.0,
    ) {
        let normal = Vector3::new(nx, ny, nz);
        prop_assume!(normal.norm() > 1e-3);
        let mask = LabeledVolume::filled([6, 6, 6], MemoryLayout::RowMajor, true);
        let sample =
            cross_sectional_area(&mask, [x, y, z], &normal, &Anisotropy::unit()).unwrap();
        prop_assert!(sample.area > 0.0);
        prop_assert!(f64::from(sample.area).is_finite());
        // No section of a 6-cube exceeds the central hexagonal cut.
        prop_assert!(f64::from(sample.area) < 6.0 * 6.0 * 2.0);
    }
}
