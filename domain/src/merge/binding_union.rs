//! Union of bindings within an identity bucket

use super::identity::IdentityBucket;
use crate::trapi::{MergedResult, NodeBinding};
use std::collections::HashSet;

/// Builds one merged result per identity bucket
///
/// Bindings are concatenated across the bucket's members in arrival order.
/// Node bindings are then deduplicated by identifier, keeping the first
/// occurrence and discarding the attributes of later copies. Edge bindings
/// are never deduplicated; repeated edges record independent support.
pub struct BindingUnionMerger;

impl BindingUnionMerger {
    pub fn merge(buckets: Vec<IdentityBucket>) -> Vec<MergedResult> {
        buckets
            .into_iter()
            .map(|bucket| {
                let mut merged = Self::union(bucket);
                Self::dedup_node_bindings(&mut merged);
                merged
            })
            .collect()
    }

    /// Concatenate every member's bindings, duplicates included
    pub fn union(bucket: IdentityBucket) -> MergedResult {
        let mut merged = MergedResult::default();

        for member in bucket.members {
            for (qnode_key, bindings) in member.node_bindings {
                merged
                    .node_bindings
                    .entry(qnode_key)
                    .or_default()
                    .extend(bindings);
            }
            for (qedge_key, bindings) in member.edge_bindings {
                merged
                    .edge_bindings
                    .entry(qedge_key)
                    .or_default()
                    .extend(bindings);
            }
        }

        merged
    }

    /// Drop repeated node identifiers per qnode, keeping the first
    pub fn dedup_node_bindings(merged: &mut MergedResult) {
        for bindings in merged.node_bindings.values_mut() {
            let mut seen = HashSet::new();
            bindings.retain(|binding: &NodeBinding| seen.insert(binding.id.clone()));
        }
    }
}
