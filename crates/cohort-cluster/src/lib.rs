//! # Cohort Cluster
//!
//! Agglomerative correlation clustering for asset allocation.
//!
//! This crate implements the clustering pipeline of the Cohort library:
//!
//! - **Correlation**: sample Pearson correlation of return columns
//! - **Distance Transform**: correlation distance `sqrt(2 * (1 - corr))`
//! - **Nearest-Pair Search**: deterministic off-diagonal minimum selection
//! - **Silhouette Cost**: the default clustering quality measure
//! - **Agglomeration**: the merge loop, step trace, and best-grouping
//!   selection
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: all inputs explicit, no I/O, no shared state
//! - **Deterministic**: stable iteration orders and documented tie-breaks,
//!   so identical inputs always produce identical groupings
//! - **Pluggable Cost**: any `(distance matrix, grouping) -> cost` function
//!   can replace the silhouette default
//!
//! ## Example
//!
//! ```rust
//! use cohort_cluster::prelude::*;
//! use nalgebra::{DMatrix, DVector};
//!
//! let returns = ReturnSeries::new(
//!     vec!["equities".into(), "credit".into(), "gold".into()],
//!     DMatrix::from_columns(&[
//!         DVector::from_vec(vec![0.010, 0.020, -0.010, 0.030]),
//!         DVector::from_vec(vec![0.012, 0.018, -0.008, 0.027]),
//!         DVector::from_vec(vec![-0.020, 0.010, 0.040, -0.030]),
//!     ]),
//! )?;
//!
//! let best = cluster_with_silhouette(&returns)?;
//! assert!(best.is_partition_of(returns.labels()));
//! # Ok::<(), cohort_cluster::ClusterError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]

pub mod agglomerative;
pub mod correlation;
pub mod distance;
pub mod error;
pub mod nearest;
pub mod silhouette;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::agglomerative::{
        cluster, cluster_trace, cluster_with_silhouette, ClusterStep, ClusterTrace,
    };
    pub use crate::correlation::{correlation_matrix, pearson_correlation};
    pub use crate::distance::{correlation_to_distance, distance_values};
    pub use crate::error::{ClusterError, ClusterResult};
    pub use crate::nearest::{find_nearest_pair, nearest_pair};
    pub use crate::silhouette::{average_distance, silhouette_cost};

    pub use cohort_core::prelude::*;
}

pub use agglomerative::{cluster, cluster_trace, cluster_with_silhouette, ClusterStep, ClusterTrace};
pub use error::{ClusterError, ClusterResult};
