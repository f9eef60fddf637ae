//! Labelled return series.

use std::collections::HashSet;

use nalgebra::{DMatrix, DVector};

use crate::error::{CoreError, CoreResult};

/// A column-oriented table of per-period asset returns.
///
/// Rows are time periods, columns are assets. Each column carries a unique
/// human-readable label (asset class, ticker, etc.). The table is immutable
/// once constructed; clustering builds its own working copy of the columns.
///
/// # Example
///
/// ```rust
/// use cohort_core::prelude::*;
/// use nalgebra::DMatrix;
///
/// let values = DMatrix::from_columns(&[
///     nalgebra::DVector::from_vec(vec![0.01, -0.02, 0.03]),
///     nalgebra::DVector::from_vec(vec![0.02, -0.01, 0.02]),
/// ]);
/// let returns = ReturnSeries::new(vec!["equities".into(), "credit".into()], values)?;
/// assert_eq!(returns.n_assets(), 2);
/// # Ok::<(), cohort_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    labels: Vec<String>,
    values: DMatrix<f64>,
}

impl ReturnSeries {
    /// Creates a return series from asset labels and a period-by-asset matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LabelCountMismatch`] if the label count does not
    /// equal the column count, and [`CoreError::DuplicateLabel`] if any label
    /// repeats.
    pub fn new(labels: Vec<String>, values: DMatrix<f64>) -> CoreResult<Self> {
        if labels.len() != values.ncols() {
            return Err(CoreError::LabelCountMismatch {
                labels: labels.len(),
                columns: values.ncols(),
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(CoreError::duplicate_label(label));
            }
        }

        Ok(Self { labels, values })
    }

    /// Number of assets (columns).
    pub fn n_assets(&self) -> usize {
        self.labels.len()
    }

    /// Number of time periods (rows).
    pub fn n_periods(&self) -> usize {
        self.values.nrows()
    }

    /// Asset labels in column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The underlying period-by-asset matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Owned copies of the return columns, in label order.
    pub fn columns(&self) -> Vec<DVector<f64>> {
        (0..self.values.ncols())
            .map(|j| self.values.column(j).clone_owned())
            .collect()
    }
}
