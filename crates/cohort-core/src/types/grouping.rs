//! Partitions of assets into named groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A partition of the original asset set into integer-identified groups.
///
/// Group ids are assigned positionally when a grouping is initialized (one
/// singleton group per asset) and are only ever removed as groups merge,
/// never reassigned. Iteration order is ascending by id, which keeps merge
/// and cost evaluation fully deterministic.
///
/// Invariant: across one clustering run, the union of all member lists is
/// always exactly the original asset set, each asset in exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    groups: BTreeMap<usize, Vec<String>>,
}

impl Grouping {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Creates one singleton group per asset, with group id equal to the
    /// asset's position.
    #[must_use]
    pub fn singletons(labels: &[String]) -> Self {
        let groups = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (id, vec![label.clone()]))
            .collect();
        Self { groups }
    }

    /// Inserts a group, replacing any previous group with the same id.
    pub fn insert(&mut self, id: usize, members: Vec<String>) {
        self.groups.insert(id, members);
    }

    /// Merges group `drop` into group `keep`: `drop`'s members are appended
    /// to `keep`'s member list in order, and `drop` is removed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownGroup`] if either id is absent, and
    /// [`CoreError::SelfMerge`] if both ids are the same group (which would
    /// otherwise drop its members and break the partition invariant).
    pub fn merge(&mut self, keep: usize, drop: usize) -> CoreResult<()> {
        if keep == drop {
            return Err(CoreError::SelfMerge { id: keep });
        }
        if !self.groups.contains_key(&keep) {
            return Err(CoreError::UnknownGroup { id: keep });
        }
        let absorbed = self
            .groups
            .remove(&drop)
            .ok_or(CoreError::UnknownGroup { id: drop })?;

        // contains_key above guarantees the entry exists
        if let Some(members) = self.groups.get_mut(&keep) {
            members.extend(absorbed);
        }
        Ok(())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the grouping has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of assets across all groups.
    pub fn asset_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Members of a group, if present.
    pub fn members(&self, id: usize) -> Option<&[String]> {
        self.groups.get(&id).map(Vec::as_slice)
    }

    /// Iterates groups in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups.iter().map(|(id, members)| (*id, members.as_slice()))
    }

    /// Group ids in ascending order.
    pub fn ids(&self) -> Vec<usize> {
        self.groups.keys().copied().collect()
    }

    /// Checks that this grouping is an exact partition of `labels`: every
    /// label in exactly one group, no extras.
    pub fn is_partition_of(&self, labels: &[String]) -> bool {
        let mut seen: Vec<&str> = self
            .groups
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        seen.sort_unstable();
        if seen.windows(2).any(|w| w[0] == w[1]) {
            return false;
        }

        let mut expected: Vec<&str> = labels.iter().map(String::as_str).collect();
        expected.sort_unstable();
        seen == expected
    }
}

impl Default for Grouping {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["gold".into(), "bonds".into(), "equities".into()]
    }

    #[test]
    fn singletons_use_positional_ids() {
        let grouping = Grouping::singletons(&labels());
        assert_eq!(grouping.len(), 3);
        assert_eq!(grouping.members(0).unwrap(), &["gold"]);
        assert_eq!(grouping.members(2).unwrap(), &["equities"]);
        assert!(grouping.is_partition_of(&labels()));
    }

    #[test]
    fn merge_appends_and_removes() {
        let mut grouping = Grouping::singletons(&labels());
        grouping.merge(0, 2).unwrap();

        assert_eq!(grouping.len(), 2);
        assert_eq!(grouping.members(0).unwrap(), &["gold", "equities"]);
        assert!(grouping.members(2).is_none());
        assert_eq!(grouping.ids(), vec![0, 1]);
        assert!(grouping.is_partition_of(&labels()));
    }

    #[test]
    fn merge_unknown_group_errors() {
        let mut grouping = Grouping::singletons(&labels());
        assert_eq!(
            grouping.merge(0, 7).unwrap_err(),
            CoreError::UnknownGroup { id: 7 }
        );
        assert_eq!(
            grouping.merge(7, 1).unwrap_err(),
            CoreError::UnknownGroup { id: 7 }
        );
        // failed merges leave the grouping untouched
        assert_eq!(grouping.len(), 3);
    }

    #[test]
    fn self_merge_is_rejected_and_preserves_partition() {
        let mut grouping = Grouping::singletons(&labels());
        assert_eq!(
            grouping.merge(1, 1).unwrap_err(),
            CoreError::SelfMerge { id: 1 }
        );
        assert_eq!(grouping.len(), 3);
        assert_eq!(grouping.members(1).unwrap(), &["bonds"]);
        assert!(grouping.is_partition_of(&labels()));
    }

    #[test]
    fn partition_check_catches_duplicates_and_omissions() {
        let mut grouping = Grouping::new();
        grouping.insert(0, vec!["gold".into(), "bonds".into()]);
        assert!(!grouping.is_partition_of(&labels()));

        grouping.insert(1, vec!["equities".into(), "gold".into()]);
        assert!(!grouping.is_partition_of(&labels()));

        grouping.insert(1, vec!["equities".into()]);
        assert!(grouping.is_partition_of(&labels()));
    }

    #[test]
    fn serializes_round_trip() {
        let grouping = Grouping::singletons(&labels());
        let json = serde_json::to_string(&grouping).unwrap();
        let back: Grouping = serde_json::from_str(&json).unwrap();
        assert_eq!(grouping, back);
    }
}
