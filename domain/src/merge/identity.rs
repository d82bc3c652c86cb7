//! Result identity keys and grouping
//!
//! Two results describe the same answer when they bind the same identifier
//! to every required qnode. The identity key encodes exactly that: one
//! representative identifier per required qnode, in sorted qnode order.
//! Keys compare by those identifiers; the delimiter only affects how a key
//! is rendered.

use super::requirements::QueryRequirements;
use super::warning::MergeWarning;
use crate::core::agent::AgentName;
use crate::trapi::AgentResult;
use std::collections::{BTreeSet, HashMap};

/// Composite grouping key of a result
///
/// Equality, ordering and hashing use the identifier parts, so an identifier
/// that happens to contain the delimiter cannot collide with another key.
#[derive(Debug, Clone)]
pub struct IdentityKey {
    parts: Vec<String>,
    rendered: String,
}

impl IdentityKey {
    pub fn new(parts: Vec<String>, delimiter: &str) -> Self {
        let rendered = parts.join(delimiter);
        Self { parts, rendered }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Parts joined by the delimiter, for display only
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl PartialEq for IdentityKey {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for IdentityKey {}

impl std::hash::Hash for IdentityKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl PartialOrd for IdentityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IdentityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.parts.cmp(&other.parts)
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

/// A required qnode bound to more than one distinct identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousBinding {
    pub qnode_key: String,
    /// Distinct identifiers, sorted
    pub ids: Vec<String>,
    /// The smallest identifier, used in the key
    pub chosen: String,
}

/// Outcome of computing one result's identity key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDerivation {
    Keyed {
        key: IdentityKey,
        ambiguous: Vec<AmbiguousBinding>,
    },
    /// Required qnodes with no binding (absent or empty list)
    Incomplete { missing: Vec<String> },
}

impl KeyDerivation {
    /// Compute the identity key of `result`
    ///
    /// When a required qnode carries several distinct identifiers, the
    /// lexicographically smallest one represents it, so the key never depends
    /// on binding order.
    pub fn derive(result: &AgentResult, requirements: &QueryRequirements, delimiter: &str) -> Self {
        let mut parts = Vec::with_capacity(requirements.required_keys().len());
        let mut ambiguous = Vec::new();
        let mut missing = Vec::new();

        for qnode_key in requirements.required_keys() {
            let ids: BTreeSet<&str> = result
                .nodes_for(qnode_key)
                .iter()
                .map(|binding| binding.id.as_str())
                .collect();

            match ids.first() {
                None => missing.push(qnode_key.clone()),
                Some(&chosen) => {
                    if ids.len() > 1 {
                        ambiguous.push(AmbiguousBinding {
                            qnode_key: qnode_key.clone(),
                            ids: ids.iter().map(|id| id.to_string()).collect(),
                            chosen: chosen.to_string(),
                        });
                    }
                    parts.push(chosen.to_string());
                }
            }
        }

        if !missing.is_empty() {
            return KeyDerivation::Incomplete { missing };
        }

        KeyDerivation::Keyed {
            key: IdentityKey::new(parts, delimiter),
            ambiguous,
        }
    }
}

/// Results sharing one identity key, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityBucket {
    pub key: IdentityKey,
    pub members: Vec<AgentResult>,
}

/// Buckets agent results by identity key
///
/// Buckets are kept in order of first arrival; members within a bucket keep
/// their arrival order across agents.
#[derive(Debug, Clone)]
pub struct ResultGrouper {
    delimiter: String,
    buckets: Vec<IdentityBucket>,
    index: HashMap<IdentityKey, usize>,
    pre_merge_results: usize,
}

impl ResultGrouper {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            buckets: Vec::new(),
            index: HashMap::new(),
            pre_merge_results: 0,
        }
    }

    /// Bucket one agent's results, returning the warnings they raised
    pub fn group(
        &mut self,
        agent: &AgentName,
        results: Vec<AgentResult>,
        requirements: &QueryRequirements,
    ) -> Vec<MergeWarning> {
        let mut warnings = Vec::new();

        for (result_index, result) in results.into_iter().enumerate() {
            self.pre_merge_results += 1;

            match KeyDerivation::derive(&result, requirements, &self.delimiter) {
                KeyDerivation::Incomplete { missing } => {
                    warnings.push(MergeWarning::IncompleteBinding {
                        agent: agent.clone(),
                        result_index,
                        missing,
                    });
                }
                KeyDerivation::Keyed { key, ambiguous } => {
                    warnings.extend(ambiguous.into_iter().map(|a| {
                        MergeWarning::AmbiguousBinding {
                            agent: agent.clone(),
                            result_index,
                            qnode_key: a.qnode_key,
                            ids: a.ids,
                            chosen: a.chosen,
                        }
                    }));
                    self.insert(key, result);
                }
            }
        }

        warnings
    }

    fn insert(&mut self, key: IdentityKey, result: AgentResult) {
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].members.push(result),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push(IdentityBucket {
                    key,
                    members: vec![result],
                });
            }
        }
    }

    pub fn buckets(&self) -> &[IdentityBucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<IdentityBucket> {
        self.buckets
    }

    /// Results seen across all agents, skipped ones included
    pub fn pre_merge_result_count(&self) -> usize {
        self.pre_merge_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trapi::{QNode, QueryGraph};

    fn requirements() -> QueryRequirements {
        QueryRequirements::analyze(
            &QueryGraph::new()
                .with_node("n0", QNode::pinned(["X1"]))
                .with_node("n1", QNode::free())
                .with_node("n2", QNode::set()),
        )
    }

    fn keyed(derivation: KeyDerivation) -> (IdentityKey, Vec<AmbiguousBinding>) {
        match derivation {
            KeyDerivation::Keyed { key, ambiguous } => (key, ambiguous),
            other => panic!("expected a key, got {:?}", other),
        }
    }

    #[test]
    fn test_key_joins_required_ids_in_sorted_qnode_order() {
        let result = AgentResult::new()
            .bind_node("n1", "Y1")
            .bind_node("n0", "X1")
            .bind_node("n2", "S1")
            .bind_node("n2", "S2");

        let (key, ambiguous) = keyed(KeyDerivation::derive(&result, &requirements(), "--"));
        assert_eq!(key.as_str(), "X1--Y1");
        assert!(ambiguous.is_empty());
    }

    #[test]
    fn test_set_bindings_do_not_affect_identity() {
        let a = AgentResult::new()
            .bind_node("n0", "X1")
            .bind_node("n1", "Y1")
            .bind_node("n2", "S1");
        let b = AgentResult::new()
            .bind_node("n0", "X1")
            .bind_node("n1", "Y1")
            .bind_node("n2", "S9");

        let (key_a, _) = keyed(KeyDerivation::derive(&a, &requirements(), "--"));
        let (key_b, _) = keyed(KeyDerivation::derive(&b, &requirements(), "--"));
        assert_eq!(key_a, key_b);
    }

    #[test]
    fn test_different_required_ids_give_different_keys() {
        let a = AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1");
        let b = AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y2");

        let (key_a, _) = keyed(KeyDerivation::derive(&a, &requirements(), "--"));
        let (key_b, _) = keyed(KeyDerivation::derive(&b, &requirements(), "--"));
        assert_ne!(key_a, key_b);
    }

    #[test]
    fn test_ambiguous_binding_picks_smallest_id() {
        let result = AgentResult::new()
            .bind_node("n0", "X1")
            .bind_node("n1", "Y9")
            .bind_node("n1", "Y2")
            .bind_node("n1", "Y9");

        let (key, ambiguous) = keyed(KeyDerivation::derive(&result, &requirements(), "--"));
        assert_eq!(key.as_str(), "X1--Y2");
        assert_eq!(ambiguous.len(), 1);
        assert_eq!(ambiguous[0].qnode_key, "n1");
        assert_eq!(ambiguous[0].ids, ["Y2", "Y9"]);
        assert_eq!(ambiguous[0].chosen, "Y2");
    }

    #[test]
    fn test_repeated_identical_id_is_not_ambiguous() {
        let result = AgentResult::new()
            .bind_node("n0", "X1")
            .bind_node("n1", "Y1")
            .bind_node("n1", "Y1");

        let (_, ambiguous) = keyed(KeyDerivation::derive(&result, &requirements(), "--"));
        assert!(ambiguous.is_empty());
    }

    #[test]
    fn test_missing_and_empty_bindings_are_incomplete() {
        let mut result = AgentResult::new().bind_node("n0", "X1");
        result.node_bindings.insert("n1".to_string(), vec![]);

        assert_eq!(
            KeyDerivation::derive(&result, &requirements(), "--"),
            KeyDerivation::Incomplete {
                missing: vec!["n1".to_string()]
            }
        );

        let unbound = AgentResult::new();
        assert_eq!(
            KeyDerivation::derive(&unbound, &requirements(), "--"),
            KeyDerivation::Incomplete {
                missing: vec!["n0".to_string(), "n1".to_string()]
            }
        );
    }

    #[test]
    fn test_delimiter_inside_identifier_does_not_collide() {
        let a = AgentResult::new().bind_node("n0", "A--B").bind_node("n1", "C");
        let b = AgentResult::new().bind_node("n0", "A").bind_node("n1", "B--C");

        let (key_a, _) = keyed(KeyDerivation::derive(&a, &requirements(), "--"));
        let (key_b, _) = keyed(KeyDerivation::derive(&b, &requirements(), "--"));
        assert_eq!(key_a.as_str(), key_b.as_str());
        assert_ne!(key_a, key_b);
        assert_eq!(key_a.parts(), ["A--B", "C"]);

        let mut grouper = ResultGrouper::new("--");
        grouper.group(&"arax".into(), vec![a], &requirements());
        grouper.group(&"bte".into(), vec![b], &requirements());
        assert_eq!(grouper.into_buckets().len(), 2);
    }

    #[test]
    fn test_custom_delimiter() {
        let result = AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1");
        let (key, _) = keyed(KeyDerivation::derive(&result, &requirements(), "|"));
        assert_eq!(key.as_str(), "X1|Y1");
    }

    #[test]
    fn test_grouper_buckets_in_first_arrival_order() {
        let reqs = requirements();
        let mut grouper = ResultGrouper::new("--");

        let warnings = grouper.group(
            &"aragorn".into(),
            vec![
                AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y2"),
                AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1"),
            ],
            &reqs,
        );
        assert!(warnings.is_empty());

        let warnings = grouper.group(
            &"bte".into(),
            vec![
                AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1"),
                AgentResult::new().bind_node("n0", "X1"),
            ],
            &reqs,
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].skipped_result());

        let keys: Vec<_> = grouper.buckets().iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["X1--Y2", "X1--Y1"]);
        assert_eq!(grouper.buckets()[1].members.len(), 2);
        assert_eq!(grouper.pre_merge_result_count(), 4);
    }

    #[test]
    fn test_grouper_reports_ambiguity_with_agent_and_index() {
        let mut grouper = ResultGrouper::new("--");
        let warnings = grouper.group(
            &"arax".into(),
            vec![
                AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1"),
                AgentResult::new()
                    .bind_node("n0", "X1")
                    .bind_node("n1", "Y3")
                    .bind_node("n1", "Y1"),
            ],
            &requirements(),
        );

        assert_eq!(
            warnings,
            vec![MergeWarning::AmbiguousBinding {
                agent: "arax".into(),
                result_index: 1,
                qnode_key: "n1".to_string(),
                ids: vec!["Y1".to_string(), "Y3".to_string()],
                chosen: "Y1".to_string(),
            }]
        );
        assert_eq!(grouper.into_buckets().len(), 1);
    }
}
