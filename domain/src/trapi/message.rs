//! Message envelopes read from agents and written after merging

use super::{AgentResult, KnowledgeGraph, MergedResult, QueryGraph};
use crate::core::agent::AgentName;
use serde::{Deserialize, Serialize};

/// Top-level document an agent returns: `{"message": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub message: ResponseMessage,
}

/// The `message` body of an agent response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub results: Vec<AgentResult>,
    pub knowledge_graph: KnowledgeGraph,
}

/// One agent's answer set, tagged with the agent that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct AgentResponse {
    pub agent: AgentName,
    pub results: Vec<AgentResult>,
    pub knowledge_graph: KnowledgeGraph,
}

impl AgentResponse {
    pub fn new(
        agent: impl Into<AgentName>,
        results: Vec<AgentResult>,
        knowledge_graph: KnowledgeGraph,
    ) -> Self {
        Self {
            agent: agent.into(),
            results,
            knowledge_graph,
        }
    }

    pub fn from_envelope(agent: impl Into<AgentName>, envelope: ResponseEnvelope) -> Self {
        Self::new(
            agent,
            envelope.message.results,
            envelope.message.knowledge_graph,
        )
    }
}

/// Top-level merged document: `{"message": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedResponse {
    pub message: MergedMessage,
}

/// The `message` body of the merged response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedMessage {
    pub results: Vec<MergedResult>,
    pub query_graph: QueryGraph,
    pub knowledge_graph: KnowledgeGraph,
}
