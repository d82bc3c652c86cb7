//! Human-readable labels for merged results

use super::requirements::QueryRequirements;
use crate::core::error::MergeError;
use crate::trapi::{KnowledgeGraph, MergedResult};

/// Labels each merged result with the entity bound to one chosen qnode
///
/// The qnode is either the one the caller asks for, which must be an essence
/// candidate, or the lexicographically smallest candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssenceSelector {
    qnode_key: String,
}

impl EssenceSelector {
    pub fn choose(
        requirements: &QueryRequirements,
        preferred: Option<&str>,
    ) -> Result<Self, MergeError> {
        let candidates = requirements.essence_candidates();

        if let Some(qnode) = preferred {
            if requirements.is_essence_candidate(qnode) {
                return Ok(Self {
                    qnode_key: qnode.to_string(),
                });
            }
            return Err(MergeError::InvalidEssenceQNode {
                qnode: qnode.to_string(),
                candidates: candidates.to_vec(),
            });
        }

        candidates
            .first()
            .map(|qnode_key| Self {
                qnode_key: qnode_key.clone(),
            })
            .ok_or(MergeError::NoEssenceCandidate)
    }

    pub fn qnode_key(&self) -> &str {
        &self.qnode_key
    }

    /// Name of the first entity bound to the essence qnode, or its identifier
    pub fn label(&self, result: &MergedResult, kg: &KnowledgeGraph) -> Option<String> {
        let id = &result.nodes_for(&self.qnode_key).first()?.id;
        Some(kg.node_name(id).unwrap_or(id.as_str()).to_string())
    }

    pub fn apply(&self, results: &mut [MergedResult], kg: &KnowledgeGraph) {
        for result in results {
            result.essence = self.label(result, kg).unwrap_or_default();
        }
    }
}
