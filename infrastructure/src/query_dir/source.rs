//! File system response source
//!
//! Reads a query graph and per-agent response documents from a query
//! directory laid out as described by [`QueryLayout`].

use super::layout::QueryLayout;
use aramerge_application::{ResponseSource, SourceError};
use aramerge_domain::{AgentName, AgentResponse, QueryGraph, ResponseEnvelope};
use async_trait::async_trait;
use glob::{Pattern, glob};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// [`ResponseSource`] backed by JSON files in a query directory
#[derive(Debug, Clone, Default)]
pub struct FsResponseSource {
    layout: QueryLayout,
}

impl FsResponseSource {
    pub fn new(layout: QueryLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &QueryLayout {
        &self.layout
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| SourceError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_document(path, &bytes)
    }

    /// Agent name of a response file: its file name without the `.json` suffix
    ///
    /// Inverse of [`QueryLayout::response_path`], so `.json` maps to the empty name.
    fn agent_name(path: &Path) -> Option<AgentName> {
        let file_name = path.file_name()?.to_str()?;
        file_name.strip_suffix(".json").map(AgentName::from)
    }

    fn parse_document<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, SourceError> {
        serde_json::from_slice(bytes).map_err(|e| SourceError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ResponseSource for FsResponseSource {
    async fn load_query_graph(&self, query: &Path) -> Result<QueryGraph, SourceError> {
        let path = self.layout.query_graph_path(query);
        debug!("Reading query graph {}", path.display());

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::MissingQueryGraph(path.display().to_string()),
            _ => SourceError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        Self::parse_document(&path, &bytes)
    }

    async fn list_agents(&self, query: &Path) -> Result<Vec<AgentName>, SourceError> {
        let responses = self.layout.responses_path(query);
        let pattern = format!(
            "{}/*.json",
            Pattern::escape(&responses.display().to_string())
        );

        let entries = glob(&pattern).map_err(|e| SourceError::Read {
            path: responses.display().to_string(),
            message: format!("Invalid glob pattern: {}", e),
        })?;

        let mut agents = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => {
                    if let Some(agent) = Self::agent_name(&path) {
                        agents.push(agent);
                    }
                }
                Err(e) => warn!("Could not access {}: {}", e.path().display(), e.error()),
            }
        }
        agents.sort();

        if agents.is_empty() {
            warn!("No agent responses found in {}", responses.display());
        }
        Ok(agents)
    }

    async fn load_agent_response(
        &self,
        query: &Path,
        agent: &AgentName,
    ) -> Result<AgentResponse, SourceError> {
        let path = self.layout.response_path(query, agent.as_str());
        debug!("Starting to process {} result set...", agent);

        let envelope: ResponseEnvelope = Self::read_document(&path).await?;
        Ok(AgentResponse::from_envelope(agent.clone(), envelope))
    }
}
