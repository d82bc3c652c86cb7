//! Agent name value object

use serde::{Deserialize, Serialize};

/// Name of an autonomous reasoning agent (ARA) (Value Object)
///
/// Agents are folded into a merge session in ascending name order, so the
/// ordering of this type is part of the merge contract.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentName {
    fn from(s: &str) -> Self {
        AgentName::new(s)
    }
}

impl From<String> for AgentName {
    fn from(s: String) -> Self {
        AgentName::new(s)
    }
}
