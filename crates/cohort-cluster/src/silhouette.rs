//! Silhouette-based clustering cost.
//!
//! The default cost function for agglomerative clustering. Each asset of a
//! multi-member group is scored by comparing its average distance to its own
//! group against its best average distance to any other group; the cost is
//! the negative mean of those scores, so a lower cost means better-separated
//! groups.

use cohort_core::{DistanceMatrix, Grouping};

use crate::error::{ClusterError, ClusterResult};

/// Average distance from `asset` to every member of a group.
///
/// If `asset` is itself a member, the mean excludes it: the self-distance
/// contributes 0 to the sum, and the average is rescaled by
/// `size / (size - 1)`.
///
/// # Errors
///
/// Returns [`ClusterError::InvalidInput`] for an empty member list or when
/// `asset` is the sole member (nothing left to average over), and
/// [`cohort_core::CoreError::UnknownLabel`] for labels missing from the
/// matrix.
pub fn average_distance(
    distances: &DistanceMatrix,
    asset: &str,
    members: &[String],
) -> ClusterResult<f64> {
    if members.is_empty() {
        return Err(ClusterError::invalid_input("group has no members"));
    }

    let row = distances.position(asset)?;
    let mut sum = 0.0;
    for member in members {
        sum += distances.values()[(row, distances.position(member)?)];
    }

    let size = members.len() as f64;
    let mut avg = sum / size;
    if members.iter().any(|m| m == asset) {
        if members.len() == 1 {
            return Err(ClusterError::invalid_input(
                "cannot average over a group whose only member is the asset itself",
            ));
        }
        avg *= size / (size - 1.0);
    }

    Ok(avg)
}

/// Silhouette cost of a grouping over a distance matrix.
///
/// For every asset of a group with more than one member, the silhouette value
/// is `(min_out - in_group) / max(min_out, in_group)`, where `in_group` is
/// the asset's average distance to its own group (self excluded) and
/// `min_out` the minimum average distance to any other group. Singleton
/// groups contribute exactly 0 for their sole member. The cost is the
/// negative mean of all contributions.
///
/// # Errors
///
/// Returns [`ClusterError::InsufficientGroups`] for groupings with fewer
/// than 2 groups (the out-group minimum would be undefined), and propagates
/// label-resolution failures.
pub fn silhouette_cost(distances: &DistanceMatrix, grouping: &Grouping) -> ClusterResult<f64> {
    if grouping.len() < 2 {
        return Err(ClusterError::InsufficientGroups {
            required: 2,
            actual: grouping.len(),
        });
    }

    let mut silhouettes = Vec::with_capacity(distances.n_assets());
    for (id, members) in grouping.iter() {
        if members.len() == 1 {
            silhouettes.push(0.0);
            continue;
        }

        for asset in members {
            let mut in_group = f64::INFINITY;
            let mut min_out_group = f64::INFINITY;
            for (other_id, other_members) in grouping.iter() {
                let avg = average_distance(distances, asset, other_members)?;
                if other_id == id {
                    in_group = avg;
                } else {
                    min_out_group = min_out_group.min(avg);
                }
            }

            silhouettes.push((min_out_group - in_group) / min_out_group.max(in_group));
        }
    }

    Ok(-silhouettes.iter().sum::<f64>() / silhouettes.len() as f64)
}
