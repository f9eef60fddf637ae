//! Error types for core data structures.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while constructing or querying core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Two columns or matrix axes share the same label.
    #[error("Duplicate asset label: '{label}'")]
    DuplicateLabel {
        /// The offending label.
        label: String,
    },

    /// Label count does not match the matrix column count.
    #[error("Label count mismatch: {labels} labels for {columns} columns")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of matrix columns.
        columns: usize,
    },

    /// Matrix is not square.
    #[error("Matrix must be square: got {rows}x{cols}")]
    NonSquareMatrix {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// A label is not present in the matrix index.
    #[error("Unknown asset label: '{label}'")]
    UnknownLabel {
        /// The missing label.
        label: String,
    },

    /// A group id is not present in the grouping.
    #[error("Unknown group id: {id}")]
    UnknownGroup {
        /// The missing group id.
        id: usize,
    },

    /// A group cannot be merged into itself.
    #[error("Cannot merge group {id} into itself")]
    SelfMerge {
        /// The group id used on both sides of the merge.
        id: usize,
    },
}

impl CoreError {
    /// Create a duplicate label error.
    #[must_use]
    pub fn duplicate_label(label: impl Into<String>) -> Self {
        Self::DuplicateLabel {
            label: label.into(),
        }
    }

    /// Create an unknown label error.
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }
}
