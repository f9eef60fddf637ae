//! # Cohort Core
//!
//! Core types for the Cohort asset clustering library.
//!
//! This crate provides the foundational building blocks used throughout
//! Cohort:
//!
//! - **[`ReturnSeries`]**: a labelled, column-oriented table of per-period
//!   asset returns
//! - **[`CorrelationMatrix`] / [`DistanceMatrix`]**: labelled square matrices
//!   derived from return data
//! - **[`Grouping`]**: a partition of the asset set into integer-identified
//!   groups, the unit of work of agglomerative clustering
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: structural invariants (unique labels, square
//!   shapes) are checked once, at the boundary
//! - **Immutable Derivations**: correlation and distance matrices are derived
//!   fresh, never patched in place
//! - **Deterministic Iteration**: groupings iterate in ascending id order so
//!   clustering runs are reproducible
//!
//! [`ReturnSeries`]: types::ReturnSeries
//! [`CorrelationMatrix`]: types::CorrelationMatrix
//! [`DistanceMatrix`]: types::DistanceMatrix
//! [`Grouping`]: types::Grouping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CorrelationMatrix, DistanceMatrix, Grouping, ReturnSeries};
}

pub use error::{CoreError, CoreResult};
pub use types::{CorrelationMatrix, DistanceMatrix, Grouping, ReturnSeries};
