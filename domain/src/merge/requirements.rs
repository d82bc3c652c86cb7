//! Required qnodes and essence candidates

use crate::trapi::QueryGraph;

/// Which query nodes identify a result, and which may label it
///
/// Both lists are sorted. Every essence candidate is also required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequirements {
    required_keys: Vec<String>,
    essence_candidates: Vec<String>,
}

impl QueryRequirements {
    /// Derive requirements from a query graph
    ///
    /// Required qnodes are those without `is_set`. Essence candidates are the
    /// required qnodes that are not pinned to `ids`.
    pub fn analyze(query_graph: &QueryGraph) -> Self {
        let required: Vec<_> = query_graph
            .nodes
            .iter()
            .filter(|(_, qnode)| !qnode.is_set())
            .collect();

        let essence_candidates = required
            .iter()
            .filter(|(_, qnode)| !qnode.is_pinned())
            .map(|(key, _)| key.to_string())
            .collect();
        let required_keys = required.into_iter().map(|(key, _)| key.clone()).collect();

        Self {
            required_keys,
            essence_candidates,
        }
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    pub fn essence_candidates(&self) -> &[String] {
        &self.essence_candidates
    }

    pub fn is_required(&self, qnode_key: &str) -> bool {
        self.required_keys
            .binary_search_by(|key| key.as_str().cmp(qnode_key))
            .is_ok()
    }

    pub fn is_essence_candidate(&self, qnode_key: &str) -> bool {
        self.essence_candidates
            .binary_search_by(|key| key.as_str().cmp(qnode_key))
            .is_ok()
    }
}
