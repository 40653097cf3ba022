//! Rolling-average smoothing of path tangent vectors.

use nalgebra::Vector3;

use crate::error::{SectionError, SectionResult};

/// Centered rolling mean of a vector sequence with edge replication.
///
/// The output always has the same length as the input. Boundary windows
/// are completed by replicating the first and last elements rather than
/// truncating. When `window` is even the replication is asymmetric: one
/// extra copy of the first element is prepended, shifting the rolling
/// window one position toward the start of the sequence.
///
/// A window of 1 is the identity transform. Callers normalize the output
/// rows themselves; this function only averages.
///
/// # Errors
///
/// Returns [`SectionError::InvalidWindow`] when `window` is 0.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use skelmetry_section::moving_average;
///
/// let dirs: Vec<Vector3<f64>> =
///     (1..=4).map(|i| Vector3::new(f64::from(i), 0.0, 0.0)).collect();
///
/// // Even window: padded to [1, 1, 2, 3, 4], averaged pairwise.
/// let smoothed = moving_average(&dirs, 2).unwrap();
/// let xs: Vec<f64> = smoothed.iter().map(|v| v.x).collect();
/// assert_eq!(xs, vec![1.0, 1.5, 2.5, 3.5]);
/// ```
pub fn moving_average(
    vectors: &[Vector3<f64>],
    window: usize,
) -> SectionResult<Vec<Vector3<f64>>> {
    if window == 0 {
        return Err(SectionError::InvalidWindow(window));
    }
    if window == 1 || vectors.is_empty() {
        return Ok(vectors.to_vec());
    }

    let mirror = (window - 1) / 2;
    let extra = (window - 1) % 2;

    let first = vectors[0];
    let last = vectors[vectors.len() - 1];
    let mut padded = Vec::with_capacity(vectors.len() + 2 * mirror + extra);
    padded.extend(std::iter::repeat(first).take(mirror + extra));
    padded.extend_from_slice(vectors);
    padded.extend(std::iter::repeat(last).take(mirror));

    // Prefix-sum moving sum.
    let mut prefix = Vec::with_capacity(padded.len() + 1);
    let mut acc = Vector3::zeros();
    prefix.push(acc);
    for v in &padded {
        acc += v;
        prefix.push(acc);
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;
    Ok((0..vectors.len())
        .map(|i| (prefix[i + window] - prefix[i]) / divisor)
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<Vector3<f64>> {
        (0..n)
            .map(|i| Vector3::new(i as f64, 2.0 * i as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_zero_window_is_error() {
        assert!(moving_average(&ramp(3), 0).is_err());
    }

    #[test]
    fn test_window_one_is_identity() {
        let dirs = ramp(5);
        assert_eq!(moving_average(&dirs, 1).unwrap(), dirs);
    }

    #[test]
    fn test_length_preserved() {
        for n in 1..=8 {
            for window in 1..=n {
                let out = moving_average(&ramp(n), window).unwrap();
                assert_eq!(out.len(), n, "n={n} window={window}");
            }
        }
    }

    #[test]
    fn test_window_larger_than_input() {
        let out = moving_average(&ramp(3), 7).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_odd_window_values() {
        // Padded to [0, 0, 1, 2, 3, 3] (x components), window 3.
        let dirs: Vec<_> = (0..4).map(|i| Vector3::new(f64::from(i), 0.0, 0.0)).collect();
        let out = moving_average(&dirs, 3).unwrap();
        let xs: Vec<f64> = out.iter().map(|v| v.x).collect();
        assert_relative_eq!(xs[0], 1.0 / 3.0);
        assert_relative_eq!(xs[1], 1.0);
        assert_relative_eq!(xs[2], 2.0);
        assert_relative_eq!(xs[3], 8.0 / 3.0);
    }

    #[test]
    fn test_even_window_asymmetric_padding() {
        // Window 4 pads two leading and one trailing copy:
        // [1, 1, 1, 2, 3, 4, 4] averaged over windows of 4.
        let dirs: Vec<_> = (1..=4).map(|i| Vector3::new(f64::from(i), 0.0, 0.0)).collect();
        let out = moving_average(&dirs, 4).unwrap();
        let xs: Vec<f64> = out.iter().map(|v| v.x).collect();
        assert_relative_eq!(xs[0], 5.0 / 4.0);
        assert_relative_eq!(xs[1], 7.0 / 4.0);
        assert_relative_eq!(xs[2], 10.0 / 4.0);
        assert_relative_eq!(xs[3], 13.0 / 4.0);
    }

    #[test]
    fn test_constant_sequence_unchanged() {
        let dirs = vec![Vector3::new(0.0, 0.0, 1.0); 6];
        for window in 1..=6 {
            let out = moving_average(&dirs, window).unwrap();
            for v in out {
                assert_relative_eq!(v.z, 1.0);
            }
        }
    }
}
