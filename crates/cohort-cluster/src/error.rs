//! Error types for clustering operations.

use thiserror::Error;

/// A specialized Result type for clustering operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors that can occur during clustering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A core type reported a structural problem.
    #[error(transparent)]
    Core(#[from] cohort_core::CoreError),

    /// Too few assets for the requested operation.
    #[error("Insufficient assets: need at least {required}, got {actual}")]
    InsufficientAssets {
        /// Minimum required assets.
        required: usize,
        /// Actual number of assets.
        actual: usize,
    },

    /// Too few groups for the requested operation.
    #[error("Insufficient groups: need at least {required}, got {actual}")]
    InsufficientGroups {
        /// Minimum required groups.
        required: usize,
        /// Actual number of groups.
        actual: usize,
    },

    /// No finite off-diagonal entry to select a nearest pair from.
    #[error("No finite off-diagonal distance to merge on")]
    NoFinitePair,

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl ClusterError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
