//! Key partitioning for snapshot comparison.
//!
//! The key sets of the two snapshots are split exactly once into three
//! disjoint categories. Every downstream output of the diff is derived
//! from this partition, so no key can land in more than one category.

use std::collections::HashSet;

use tsdiff_types::{RowKey, Table};

/// The three disjoint key categories produced by comparing two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPartition {
    /// Keys present only in the current snapshot, in current row order.
    pub added: Vec<RowKey>,
    /// Keys present only in the previous snapshot, in previous row order.
    pub removed: Vec<RowKey>,
    /// Keys present in both snapshots, in current row order.
    pub common: Vec<RowKey>,
}

impl KeyPartition {
    /// Returns `true` if neither snapshot contained any keys.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.common.is_empty()
    }

    /// Total number of distinct keys across both snapshots.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.common.len()
    }
}

/// Partitions the key sets of two snapshots into added, removed, and
/// common keys.
///
/// Membership is decided by set containment. Ordering follows the owning
/// table's row order: `added` and `common` walk the current snapshot,
/// `removed` walks the previous one, so the partition is deterministic
/// for deterministic input.
pub fn partition_keys(current: &Table, previous: &Table) -> KeyPartition {
    let current_keys: HashSet<&RowKey> = current.keys().collect();
    let previous_keys: HashSet<&RowKey> = previous.keys().collect();

    let mut partition = KeyPartition::default();
    for key in current.keys() {
        if previous_keys.contains(key) {
            partition.common.push(key.clone());
        } else {
            partition.added.push(key.clone());
        }
    }
    for key in previous.keys() {
        if !current_keys.contains(key) {
            partition.removed.push(key.clone());
        }
    }
    partition
}
