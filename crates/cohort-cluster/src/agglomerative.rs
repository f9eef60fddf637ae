//! Agglomerative clustering over return correlations.
//!
//! Starts with one singleton group per asset and repeatedly merges the two
//! nearest groups (by correlation distance of their averaged return series)
//! until only two remain, recording the cost of every intermediate grouping.
//! The grouping with the minimum cost across all steps is the result.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use cohort_core::{DistanceMatrix, Grouping, ReturnSeries};

use crate::correlation::{correlation_matrix, pearson_correlation};
use crate::distance::{correlation_to_distance, distance_values};
use crate::error::{ClusterError, ClusterResult};
use crate::nearest::nearest_pair;
use crate::silhouette::silhouette_cost;

/// One recorded iteration of the merge loop: the grouping at that point and
/// its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterStep {
    /// The grouping evaluated at this step.
    pub grouping: Grouping,
    /// Its cost under the run's cost function; lower is better.
    pub cost: f64,
}

/// The full sequence of recorded steps of one clustering run, from all
/// singletons down to two groups.
///
/// For N assets the trace holds exactly N-1 steps; step `k` has `N - k`
/// groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterTrace {
    /// Recorded steps in merge order.
    pub steps: Vec<ClusterStep>,
}

impl ClusterTrace {
    /// The minimum-cost step, scanning in recorded order with a strict `<`
    /// comparison: the earliest occurrence wins ties, and a NaN cost can
    /// never displace an earlier step.
    pub fn best(&self) -> Option<&ClusterStep> {
        let mut best: Option<&ClusterStep> = None;
        for step in &self.steps {
            match best {
                None => best = Some(step),
                Some(current) if step.cost < current.cost => best = Some(step),
                Some(_) => {}
            }
        }
        best
    }
}

/// Runs the full agglomerative merge loop and returns every recorded step.
///
/// The distance matrix used for cost evaluation is computed once, over the
/// original named assets, and reused at every step. The matrix used to pick
/// the next merge is recomputed each iteration from the working return
/// columns, where merged groups carry the unweighted average
/// `0.5 * (kept + dropped)` of their constituents' columns.
///
/// # Errors
///
/// Returns [`ClusterError::InsufficientAssets`] for fewer than 2 assets and
/// propagates failures from the cost function and the nearest-pair search.
pub fn cluster_trace<F>(returns: &ReturnSeries, cost_fn: F) -> ClusterResult<ClusterTrace>
where
    F: Fn(&DistanceMatrix, &Grouping) -> ClusterResult<f64>,
{
    let n_assets = returns.n_assets();
    if n_assets < 2 {
        return Err(ClusterError::InsufficientAssets {
            required: 2,
            actual: n_assets,
        });
    }

    debug!(assets = n_assets, "starting agglomerative clustering run");

    let all_distances = correlation_to_distance(&correlation_matrix(returns)?)?;
    let mut grouping = Grouping::singletons(returns.labels());
    let mut columns = returns.columns();
    let mut ids: Vec<usize> = (0..n_assets).collect();
    let mut steps = Vec::with_capacity(n_assets - 1);

    loop {
        let cost = cost_fn(&all_distances, &grouping)?;
        trace!(groups = grouping.len(), cost, "recorded grouping cost");
        steps.push(ClusterStep {
            grouping: grouping.clone(),
            cost,
        });

        if grouping.len() == 2 {
            break;
        }

        let working = DMatrix::from_columns(&columns);
        let merge_distances = distance_values(&pearson_correlation(&working));
        let (row, col) = nearest_pair(&merge_distances)?;
        let (keep, drop) = (ids[row], ids[col]);

        debug!(keep, drop, remaining = grouping.len() - 1, "merging nearest pair");

        grouping.merge(keep, drop)?;
        let merged = 0.5 * (&columns[row] + &columns[col]);
        columns[row] = merged;
        columns.remove(col);
        ids.remove(col);
    }

    Ok(ClusterTrace { steps })
}

/// Clusters a return series and returns the minimum-cost grouping.
///
/// `cost_fn` is any `(distance matrix, grouping) -> cost` function; lower
/// cost is better. Use [`cluster_with_silhouette`] for the default.
///
/// # Errors
///
/// Same failure modes as [`cluster_trace`].
pub fn cluster<F>(returns: &ReturnSeries, cost_fn: F) -> ClusterResult<Grouping>
where
    F: Fn(&DistanceMatrix, &Grouping) -> ClusterResult<f64>,
{
    let trace = cluster_trace(returns, cost_fn)?;
    trace
        .best()
        .map(|step| step.grouping.clone())
        .ok_or_else(|| ClusterError::invalid_input("clustering run recorded no steps"))
}

/// Clusters a return series with the default silhouette cost.
///
/// # Example
///
/// ```rust
/// use cohort_cluster::prelude::*;
/// use nalgebra::{DMatrix, DVector};
///
/// let returns = ReturnSeries::new(
///     vec!["equities".into(), "credit".into(), "gold".into()],
///     DMatrix::from_columns(&[
///         DVector::from_vec(vec![0.010, 0.020, -0.010, 0.030]),
///         DVector::from_vec(vec![0.012, 0.018, -0.008, 0.027]),
///         DVector::from_vec(vec![-0.020, 0.010, 0.040, -0.030]),
///     ]),
/// )?;
///
/// let best = cluster_with_silhouette(&returns)?;
/// assert!(best.is_partition_of(returns.labels()));
/// # Ok::<(), cohort_cluster::ClusterError>(())
/// ```
pub fn cluster_with_silhouette(returns: &ReturnSeries) -> ClusterResult<Grouping> {
    cluster(returns, silhouette_cost)
}
