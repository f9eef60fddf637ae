//! Nearest-pair search over a distance matrix.

use nalgebra::DMatrix;

use cohort_core::DistanceMatrix;

use crate::error::{ClusterError, ClusterResult};

/// Finds the closest pair of distinct entities in a square distance matrix,
/// by positional index.
///
/// The diagonal is treated as infinite so self-pairs are never selected.
/// When several off-diagonal entries share the global minimum the tie-break
/// is deterministic but otherwise arbitrary: the first row in index order
/// with a matching entry wins, then the first matching column of that row.
/// For a symmetric matrix this means the returned pair always has
/// `row < column`.
///
/// # Errors
///
/// Returns [`ClusterError::InsufficientAssets`] for matrices smaller than
/// 2x2 and [`ClusterError::NoFinitePair`] when every off-diagonal entry is
/// NaN or infinite.
pub fn nearest_pair(distances: &DMatrix<f64>) -> ClusterResult<(usize, usize)> {
    debug_assert_eq!(distances.nrows(), distances.ncols());
    let n = distances.nrows();
    if n < 2 {
        return Err(ClusterError::InsufficientAssets {
            required: 2,
            actual: n,
        });
    }

    let mut min_distance = f64::INFINITY;
    for i in 0..n {
        for j in 0..n {
            if i != j && distances[(i, j)] < min_distance {
                min_distance = distances[(i, j)];
            }
        }
    }
    if !min_distance.is_finite() {
        return Err(ClusterError::NoFinitePair);
    }

    for i in 0..n {
        for j in 0..n {
            if i != j && distances[(i, j)] == min_distance {
                return Ok((i, j));
            }
        }
    }
    Err(ClusterError::NoFinitePair)
}

/// Finds the closest pair of distinct assets in a labelled distance matrix.
///
/// Same selection rule as [`nearest_pair`]; the pair is returned as
/// `(row_label, column_label)`. Callers merging groups keep the first label
/// and absorb the second.
pub fn find_nearest_pair(distances: &DistanceMatrix) -> ClusterResult<(String, String)> {
    let (i, j) = nearest_pair(distances.values())?;
    Ok((distances.labels()[i].clone(), distances.labels()[j].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_distances() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 0.3, 1.4, 0.1, //
                0.3, 0.0, 0.8, 0.7, //
                1.4, 0.8, 0.0, 1.7, //
                0.1, 0.7, 1.7, 0.0,
            ],
        )
    }

    #[test]
    fn ignores_diagonal_and_finds_global_minimum() {
        assert_eq!(nearest_pair(&reference_distances()).unwrap(), (0, 3));
    }

    #[test]
    fn two_entity_matrix() {
        let distances = DMatrix::from_row_slice(2, 2, &[0.0, 5.0, 5.0, 0.0]);
        assert_eq!(nearest_pair(&distances).unwrap(), (0, 1));
    }

    #[test]
    fn tie_break_prefers_first_row_major_pair() {
        // (0, 2) and (1, 3) both attain the minimum 0.2
        let distances = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 0.9, 0.2, 0.8, //
                0.9, 0.0, 0.5, 0.2, //
                0.2, 0.5, 0.0, 0.6, //
                0.8, 0.2, 0.6, 0.0,
            ],
        );
        assert_eq!(nearest_pair(&distances).unwrap(), (0, 2));
    }

    #[test]
    fn too_small_matrix_errors() {
        let distances = DMatrix::from_row_slice(1, 1, &[0.0]);
        assert_eq!(
            nearest_pair(&distances).unwrap_err(),
            ClusterError::InsufficientAssets {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn all_non_finite_errors() {
        let nan = f64::NAN;
        let distances = DMatrix::from_row_slice(2, 2, &[0.0, nan, nan, 0.0]);
        assert_eq!(
            nearest_pair(&distances).unwrap_err(),
            ClusterError::NoFinitePair
        );
    }

    #[test]
    fn labelled_wrapper_returns_labels() {
        let labels: Vec<String> = (0..4).map(|i| format!("asset_{i}")).collect();
        let distances = DistanceMatrix::new(labels, reference_distances()).unwrap();
        let (a, b) = find_nearest_pair(&distances).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("asset_0", "asset_3"));
    }
}
