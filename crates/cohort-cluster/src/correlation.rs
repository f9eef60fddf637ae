//! Sample Pearson correlation of return columns.

use nalgebra::{DMatrix, DVector};

use cohort_core::{CorrelationMatrix, ReturnSeries};

use crate::error::ClusterResult;

/// Computes the sample Pearson correlation of the columns of a
/// period-by-asset matrix.
///
/// Each column is mean-centered; `corr[i][j]` is the centered dot product of
/// columns `i` and `j` normalized by the product of their norms. The diagonal
/// is set to exactly 1.0. A constant column has zero norm and produces NaN
/// entries, which are propagated rather than checked.
///
/// # Arguments
///
/// * `values` - Matrix with one time series per column
///
/// # Returns
///
/// A square symmetric matrix of size `values.ncols()`.
pub fn pearson_correlation(values: &DMatrix<f64>) -> DMatrix<f64> {
    let n_assets = values.ncols();
    let n_periods = values.nrows() as f64;

    let centered: Vec<DVector<f64>> = (0..n_assets)
        .map(|j| {
            let column = values.column(j);
            let mean = column.sum() / n_periods;
            column.map(|v| v - mean)
        })
        .collect();
    let norms: Vec<f64> = centered.iter().map(|c| c.dot(c)).collect();

    let mut corr = DMatrix::zeros(n_assets, n_assets);
    for i in 0..n_assets {
        corr[(i, i)] = 1.0;
        for j in (i + 1)..n_assets {
            let value = centered[i].dot(&centered[j]) / (norms[i] * norms[j]).sqrt();
            corr[(i, j)] = value;
            corr[(j, i)] = value;
        }
    }

    corr
}

/// Computes the labelled correlation matrix of a return series.
pub fn correlation_matrix(returns: &ReturnSeries) -> ClusterResult<CorrelationMatrix> {
    let values = pearson_correlation(returns.values());
    Ok(CorrelationMatrix::new(returns.labels().to_vec(), values)?)
}
