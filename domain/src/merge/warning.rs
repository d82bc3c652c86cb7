//! Recoverable conditions found while merging

use crate::core::agent::AgentName;
use serde::{Deserialize, Serialize};

/// A data-quality problem in one agent result that did not stop the merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MergeWarning {
    /// The result left required qnodes unbound and was skipped
    IncompleteBinding {
        agent: AgentName,
        result_index: usize,
        missing: Vec<String>,
    },
    /// A required (non-set) qnode was bound to several distinct identifiers
    AmbiguousBinding {
        agent: AgentName,
        result_index: usize,
        qnode_key: String,
        ids: Vec<String>,
        chosen: String,
    },
}

impl MergeWarning {
    pub fn agent(&self) -> &AgentName {
        match self {
            MergeWarning::IncompleteBinding { agent, .. }
            | MergeWarning::AmbiguousBinding { agent, .. } => agent,
        }
    }

    /// Whether the offending result was left out of the merge
    pub fn skipped_result(&self) -> bool {
        matches!(self, MergeWarning::IncompleteBinding { .. })
    }
}

impl std::fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeWarning::IncompleteBinding {
                agent,
                result_index,
                missing,
            } => write!(
                f,
                "{} result #{} does not bind required qnode(s) {}; skipping",
                agent,
                result_index,
                missing.join(", ")
            ),
            MergeWarning::AmbiguousBinding {
                agent,
                result_index,
                qnode_key,
                ids,
                chosen,
            } => write!(
                f,
                "{} result #{} binds {} identifiers to non-set qnode {} ({}); using {}",
                agent,
                result_index,
                ids.len(),
                qnode_key,
                ids.join(", "),
                chosen
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_display() {
        let warning = MergeWarning::IncompleteBinding {
            agent: "arax".into(),
            result_index: 3,
            missing: vec!["n1".to_string()],
        };
        assert_eq!(
            warning.to_string(),
            "arax result #3 does not bind required qnode(s) n1; skipping"
        );
        assert!(warning.skipped_result());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let warning = MergeWarning::AmbiguousBinding {
            agent: "bte".into(),
            result_index: 0,
            qnode_key: "n1".to_string(),
            ids: vec!["A".to_string(), "B".to_string()],
            chosen: "A".to_string(),
        };
        let value = serde_json::to_value(&warning).unwrap();
        assert_eq!(value["kind"], "ambiguous_binding");
        assert_eq!(value["agent"], "bte");
        assert_eq!(value["chosen"], "A");
        assert!(!warning.skipped_result());
        assert_eq!(warning.agent().as_str(), "bte");
    }
}
