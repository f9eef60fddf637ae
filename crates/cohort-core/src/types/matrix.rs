//! Labelled square matrices for correlations and distances.

use std::collections::{HashMap, HashSet};

use nalgebra::DMatrix;

use crate::error::{CoreError, CoreResult};

fn validate_labels(labels: &[String], values: &DMatrix<f64>) -> CoreResult<()> {
    if values.nrows() != values.ncols() {
        return Err(CoreError::NonSquareMatrix {
            rows: values.nrows(),
            cols: values.ncols(),
        });
    }
    if labels.len() != values.ncols() {
        return Err(CoreError::LabelCountMismatch {
            labels: labels.len(),
            columns: values.ncols(),
        });
    }

    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(CoreError::duplicate_label(label));
        }
    }

    Ok(())
}

fn index_of(labels: &[String]) -> HashMap<String, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(position, label)| (label.clone(), position))
        .collect()
}

/// A labelled correlation matrix.
///
/// Square and symmetric with a unit diagonal; entries lie in `[-1, 1]` for
/// well-behaved inputs. Neither symmetry nor the value range is enforced
/// here — degenerate return data (e.g. a constant column) produces NaN
/// entries that flow through downstream arithmetic untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: DMatrix<f64>,
}

impl CorrelationMatrix {
    /// Creates a labelled correlation matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NonSquareMatrix`], [`CoreError::LabelCountMismatch`]
    /// or [`CoreError::DuplicateLabel`] on structural problems.
    pub fn new(labels: Vec<String>, values: DMatrix<f64>) -> CoreResult<Self> {
        validate_labels(&labels, &values)?;
        Ok(Self { labels, values })
    }

    /// Axis labels, identical for rows and columns.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The underlying square matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Number of assets on each axis.
    pub fn n_assets(&self) -> usize {
        self.labels.len()
    }
}

/// A labelled distance matrix derived from a correlation matrix.
///
/// Square and symmetric with a zero diagonal; entries are
/// `sqrt(2 * (1 - corr))`, at most 2 for perfectly anti-correlated pairs.
/// Carries a label-to-position index so costs can be evaluated against
/// groupings that refer to assets by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    values: DMatrix<f64>,
    index: HashMap<String, usize>,
}

impl DistanceMatrix {
    /// Creates a labelled distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NonSquareMatrix`], [`CoreError::LabelCountMismatch`]
    /// or [`CoreError::DuplicateLabel`] on structural problems.
    pub fn new(labels: Vec<String>, values: DMatrix<f64>) -> CoreResult<Self> {
        validate_labels(&labels, &values)?;
        let index = index_of(&labels);
        Ok(Self {
            labels,
            values,
            index,
        })
    }

    /// Axis labels, identical for rows and columns.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The underlying square matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Number of assets on each axis.
    pub fn n_assets(&self) -> usize {
        self.labels.len()
    }

    /// Axis position of a label.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] if the label is not on the axis.
    pub fn position(&self, label: &str) -> CoreResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| CoreError::unknown_label(label))
    }

    /// Distance between two labelled assets.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] if either label is not on the axis.
    pub fn distance(&self, a: &str, b: &str) -> CoreResult<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Ok(self.values[(i, j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("asset_{i}")).collect()
    }

    #[test]
    fn correlation_matrix_validates_shape() {
        let err = CorrelationMatrix::new(labels(2), DMatrix::zeros(2, 3)).unwrap_err();
        assert_eq!(err, CoreError::NonSquareMatrix { rows: 2, cols: 3 });

        let err = CorrelationMatrix::new(labels(2), DMatrix::identity(3, 3)).unwrap_err();
        assert_eq!(
            err,
            CoreError::LabelCountMismatch {
                labels: 2,
                columns: 3
            }
        );
    }

    #[test]
    fn distance_matrix_rejects_duplicate_labels() {
        let err = DistanceMatrix::new(
            vec!["a".into(), "a".into()],
            DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]),
        )
        .unwrap_err();
        assert_eq!(err, CoreError::duplicate_label("a"));
    }

    #[test]
    fn distance_lookup_by_label() {
        let distances = DistanceMatrix::new(
            labels(3),
            DMatrix::from_row_slice(3, 3, &[0.0, 0.5, 1.2, 0.5, 0.0, 0.8, 1.2, 0.8, 0.0]),
        )
        .unwrap();

        assert_eq!(distances.position("asset_2").unwrap(), 2);
        assert_relative_eq!(distances.distance("asset_0", "asset_2").unwrap(), 1.2);
        assert_relative_eq!(distances.distance("asset_1", "asset_1").unwrap(), 0.0);

        let err = distances.distance("asset_0", "missing").unwrap_err();
        assert_eq!(err, CoreError::unknown_label("missing"));
    }
}
