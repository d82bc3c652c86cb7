//! Merge Query use case
//!
//! Loads one query's agent responses, folds them into a merge session and
//! writes the merged response and report.

use crate::config::MergeParams;
use crate::ports::merge_event_logger::{MergeEvent, MergeEventLogger, NoMergeEventLogger};
use crate::ports::merge_sink::{MergeSink, SinkError};
use crate::ports::progress::{MergeProgressNotifier, NoProgress};
use crate::ports::response_source::{ResponseSource, SourceError};
use aramerge_domain::{
    AgentName, AgentResponse, MergeError, MergeReport, MergeSession, MergeWarning,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that abort the merge of a single query
#[derive(Error, Debug)]
pub enum MergeQueryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("Response loading task failed: {0}")]
    LoadTask(String),
}

impl MergeQueryError {
    /// Whether the query's input documents are malformed
    pub fn is_schema_violation(&self) -> bool {
        match self {
            MergeQueryError::Source(e) => e.is_schema_violation(),
            MergeQueryError::Merge(e) => e.is_schema_violation(),
            _ => false,
        }
    }
}

/// Input for the MergeQuery use case
#[derive(Debug, Clone)]
pub struct MergeQueryInput {
    /// Location of the query (query graph plus agent responses)
    pub query_dir: PathBuf,
    pub params: MergeParams,
}

impl MergeQueryInput {
    pub fn new(query_dir: impl Into<PathBuf>) -> Self {
        Self {
            query_dir: query_dir.into(),
            params: MergeParams::default(),
        }
    }

    pub fn with_params(mut self, params: MergeParams) -> Self {
        self.params = params;
        self
    }

    /// Display name of the query: the last path component
    pub fn query_name(&self) -> String {
        self.query_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.query_dir.display().to_string())
    }
}

/// Summary of a successfully merged query
#[derive(Debug, Clone, PartialEq)]
pub struct MergeQueryOutput {
    pub query: String,
    pub report: MergeReport,
    pub warnings: Vec<MergeWarning>,
    pub agents: Vec<AgentName>,
    pub essence_qnode: String,
}

/// Use case for merging the agent responses of one query
pub struct MergeQueryUseCase<S: ResponseSource + 'static, W: MergeSink + 'static> {
    source: Arc<S>,
    sink: Arc<W>,
    logger: Arc<dyn MergeEventLogger>,
}

impl<S: ResponseSource + 'static, W: MergeSink + 'static> MergeQueryUseCase<S, W> {
    pub fn new(source: Arc<S>, sink: Arc<W>) -> Self {
        Self {
            source,
            sink,
            logger: Arc::new(NoMergeEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn MergeEventLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: MergeQueryInput,
    ) -> Result<MergeQueryOutput, MergeQueryError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: MergeQueryInput,
        progress: &dyn MergeProgressNotifier,
    ) -> Result<MergeQueryOutput, MergeQueryError> {
        let query = input.query_name();

        match self.run(&query, &input, progress).await {
            Ok(output) => Ok(output),
            Err(e) => {
                warn!("Merge of query '{}' failed: {}", query, e);
                let message = e.to_string();
                progress.on_query_failed(&query, &message);
                self.logger.log(MergeEvent::query_failed(&query, &message));
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        query: &str,
        input: &MergeQueryInput,
        progress: &dyn MergeProgressNotifier,
    ) -> Result<MergeQueryOutput, MergeQueryError> {
        info!("Merging responses for query '{}'", query);

        let query_graph = self.source.load_query_graph(&input.query_dir).await?;
        let mut session = MergeSession::new(query_graph, &input.params.options)?;
        debug!(
            "Required qnodes: {:?}; essence qnode: {}",
            session.requirements().required_keys(),
            session.essence_qnode()
        );

        let responses = self.load_responses(input).await?;
        progress.on_query_start(query, responses.len());

        for response in responses {
            info!(
                "{} response contains {} results, {} KG nodes, {} KG edges",
                response.agent,
                response.results.len(),
                response.knowledge_graph.nodes.len(),
                response.knowledge_graph.edges.len()
            );

            let summary = session.fold(response)?;
            for warning in &summary.warnings {
                warn!("{}", warning);
                self.logger.log(MergeEvent::binding_warning(query, warning));
            }
            if summary.absorbed.collisions() > 0 {
                debug!(
                    "{} supplied {} KG entries already present; kept earlier payloads",
                    summary.agent,
                    summary.absorbed.collisions()
                );
            }

            self.logger.log(MergeEvent::agent_folded(query, &summary));
            progress.on_agent_folded(query, &summary);
        }

        let outcome = session.finalize();
        let kg = &outcome.response.message.knowledge_graph;
        info!(
            "Done merging results for {}! There are {} results after merging. \
             Merged KG contains {} nodes and {} edges.",
            query,
            outcome.response.message.results.len(),
            kg.nodes.len(),
            kg.edges.len()
        );

        self.sink
            .write_merged_response(&input.query_dir, &outcome.response)
            .await?;
        self.sink
            .write_report(&input.query_dir, &outcome.report)
            .await?;

        progress.on_query_complete(query, &outcome.report);
        self.logger
            .log(MergeEvent::query_merged(query, &outcome.report));

        Ok(MergeQueryOutput {
            query: query.to_string(),
            report: outcome.report,
            warnings: outcome.warnings,
            agents: outcome.agents,
            essence_qnode: outcome.essence_qnode,
        })
    }

    /// Load every agent response, sorted by agent name
    async fn load_responses(
        &self,
        input: &MergeQueryInput,
    ) -> Result<Vec<AgentResponse>, MergeQueryError> {
        let agents = self.source.list_agents(&input.query_dir).await?;
        debug!("Found {} agent responses", agents.len());

        let mut responses = Vec::with_capacity(agents.len());

        if input.params.parallel_loads {
            let mut join_set = JoinSet::new();

            for agent in agents {
                let source = Arc::clone(&self.source);
                let query_dir = input.query_dir.clone();

                join_set.spawn(async move { source.load_agent_response(&query_dir, &agent).await });
            }

            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok(Ok(response)) => responses.push(response),
                    Ok(Err(e)) => return Err(e.into()),
                    Err(e) => return Err(MergeQueryError::LoadTask(e.to_string())),
                }
            }
        } else {
            for agent in &agents {
                responses.push(
                    self.source
                        .load_agent_response(&input.query_dir, agent)
                        .await?,
                );
            }
        }

        responses.sort_by(|a, b| a.agent.cmp(&b.agent));
        Ok(responses)
    }
}
