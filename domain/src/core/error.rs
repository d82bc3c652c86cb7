//! Domain error types

use thiserror::Error;

/// Fatal errors for a single query's merge.
///
/// Recoverable conditions (incomplete or ambiguous bindings) are not errors;
/// they are reported as [`MergeWarning`](crate::merge::MergeWarning)s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("Query graph has no unpinned required qnode to use as the result essence")]
    NoEssenceCandidate,

    #[error("Essence qnode '{qnode}' is not an unpinned required qnode (candidates: {candidates:?})")]
    InvalidEssenceQNode {
        qnode: String,
        candidates: Vec<String>,
    },

    #[error("Agent '{agent}' folded out of order (previous agent was '{previous}')")]
    AgentOutOfOrder { agent: String, previous: String },
}

impl MergeError {
    /// Check if this error describes malformed input rather than a misuse of the session
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            MergeError::NoEssenceCandidate | MergeError::InvalidEssenceQNode { .. }
        )
    }
}
