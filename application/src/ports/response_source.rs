//! Response source port
//!
//! Loads a query's graph and the responses of the agents that answered it.

use aramerge_domain::{AgentName, AgentResponse, QueryGraph};
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a query's inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Query graph not found: {0}")]
    MissingQueryGraph(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid document {path}: {message}")]
    Invalid { path: String, message: String },
}

impl SourceError {
    /// Whether the input exists but does not match the expected schema
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            SourceError::MissingQueryGraph(_) | SourceError::Invalid { .. }
        )
    }
}

/// Source of one query's query graph and agent responses
///
/// Implementations must be shareable across tasks: responses of different
/// agents are loaded concurrently.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// Load the query graph of a query
    async fn load_query_graph(&self, query: &Path) -> Result<QueryGraph, SourceError>;

    /// Names of the agents that answered the query, in any order
    async fn list_agents(&self, query: &Path) -> Result<Vec<AgentName>, SourceError>;

    /// Load one agent's response
    async fn load_agent_response(
        &self,
        query: &Path,
        agent: &AgentName,
    ) -> Result<AgentResponse, SourceError>;
}
