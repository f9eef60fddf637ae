//! Correlation-to-distance transform.

use nalgebra::DMatrix;

use cohort_core::{CorrelationMatrix, DistanceMatrix};

use crate::error::ClusterResult;

/// Element-wise correlation distance: `d = sqrt(2 * (1 - corr))`.
///
/// A unit diagonal maps to an exactly zero diagonal; perfectly
/// anti-correlated pairs map to 2. Correlations above 1 (which only arise
/// from invalid input) produce NaN and are deliberately not guarded.
pub fn distance_values(corr: &DMatrix<f64>) -> DMatrix<f64> {
    corr.map(|c| (2.0 * (1.0 - c)).sqrt())
}

/// Converts a labelled correlation matrix into a labelled distance matrix.
///
/// # Example
///
/// ```rust
/// use cohort_cluster::prelude::*;
/// use nalgebra::DMatrix;
///
/// let corr = CorrelationMatrix::new(
///     vec!["a".into(), "b".into()],
///     DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 1.0]),
/// )?;
/// let distances = correlation_to_distance(&corr)?;
/// assert!((distances.distance("a", "b")? - 1.0).abs() < 1e-12);
/// # Ok::<(), cohort_cluster::ClusterError>(())
/// ```
pub fn correlation_to_distance(corr: &CorrelationMatrix) -> ClusterResult<DistanceMatrix> {
    let values = distance_values(corr.values());
    Ok(DistanceMatrix::new(corr.labels().to_vec(), values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn transforms_reference_matrix() {
        let corr = DMatrix::from_row_slice(
            3,
            3,
            &[1.0, 0.5, -0.6, 0.5, 1.0, 0.0, -0.6, 0.0, 1.0],
        );
        let distances = distance_values(&corr);

        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[
                0.0, 1.0, 1.78885438, //
                1.0, 0.0, 1.41421356, //
                1.78885438, 1.41421356, 0.0,
            ],
        );
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(distances[(i, j)], expected[(i, j)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn unit_diagonal_maps_to_zero() {
        let corr = DMatrix::from_row_slice(2, 2, &[1.0, 0.3, 0.3, 1.0]);
        let distances = distance_values(&corr);
        assert_eq!(distances[(0, 0)], 0.0);
        assert_eq!(distances[(1, 1)], 0.0);
    }

    #[test]
    fn anti_correlation_maps_to_two() {
        let corr = DMatrix::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let distances = distance_values(&corr);
        assert_relative_eq!(distances[(0, 1)], 2.0);
    }
}
