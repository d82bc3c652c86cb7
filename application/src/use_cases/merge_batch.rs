//! Merge Batch use case
//!
//! Runs [`MergeQueryUseCase`] over several query locations. A fatal error in
//! one query is recorded and the batch moves on to the next.

use super::merge_query::{MergeQueryError, MergeQueryInput, MergeQueryOutput, MergeQueryUseCase};
use crate::config::MergeParams;
use crate::ports::merge_sink::MergeSink;
use crate::ports::progress::{MergeProgressNotifier, NoProgress};
use crate::ports::response_source::ResponseSource;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of one query in a batch
#[derive(Debug)]
pub struct QueryOutcome {
    pub query_dir: PathBuf,
    pub result: Result<MergeQueryOutput, MergeQueryError>,
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct MergeBatchOutput {
    pub outcomes: Vec<QueryOutcome>,
}

impl MergeBatchOutput {
    pub fn succeeded(&self) -> impl Iterator<Item = &MergeQueryOutput> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&PathBuf, &MergeQueryError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.query_dir, e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }
}

/// Use case for merging many queries, one fresh session each
pub struct MergeBatchUseCase<S: ResponseSource + 'static, W: MergeSink + 'static> {
    query: MergeQueryUseCase<S, W>,
}

impl<S: ResponseSource + 'static, W: MergeSink + 'static> MergeBatchUseCase<S, W> {
    pub fn new(query: MergeQueryUseCase<S, W>) -> Self {
        Self { query }
    }

    pub async fn execute(&self, query_dirs: Vec<PathBuf>, params: MergeParams) -> MergeBatchOutput {
        self.execute_with_progress(query_dirs, params, &NoProgress)
            .await
    }

    pub async fn execute_with_progress(
        &self,
        query_dirs: Vec<PathBuf>,
        params: MergeParams,
        progress: &dyn MergeProgressNotifier,
    ) -> MergeBatchOutput {
        info!("Merging {} queries", query_dirs.len());

        let mut output = MergeBatchOutput::default();
        for query_dir in query_dirs {
            let input = MergeQueryInput::new(query_dir.clone()).with_params(params.clone());
            let result = self.query.execute_with_progress(input, progress).await;
            output.outcomes.push(QueryOutcome { query_dir, result });
        }

        let failures = output.failure_count();
        if failures > 0 {
            warn!(
                "{} of {} queries failed to merge",
                failures,
                output.outcomes.len()
            );
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::merge_query::tests::{
        InMemorySource, RecordingSink, treats_query_graph, treats_responses,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failed_query_does_not_stop_batch() {
        let source = Arc::new(
            InMemorySource::default()
                .with_query("runs/q1", treats_query_graph(), treats_responses())
                .with_query("runs/q3", treats_query_graph(), treats_responses()),
        );
        let sink = Arc::new(RecordingSink::default());
        let batch = MergeBatchUseCase::new(MergeQueryUseCase::new(source, Arc::clone(&sink)));

        let output = batch
            .execute(
                vec![
                    PathBuf::from("runs/q1"),
                    PathBuf::from("runs/q2"),
                    PathBuf::from("runs/q3"),
                ],
                MergeParams::default(),
            )
            .await;

        assert_eq!(output.outcomes.len(), 3);
        assert!(output.has_failures());
        assert_eq!(output.failure_count(), 1);
        let (failed_dir, err) = output.failed().next().unwrap();
        assert_eq!(failed_dir, &PathBuf::from("runs/q2"));
        assert!(err.is_schema_violation());

        let names: Vec<_> = output.succeeded().map(|o| o.query.as_str()).collect();
        assert_eq!(names, vec!["q1", "q3"]);
        assert_eq!(sink.responses.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let source = Arc::new(InMemorySource::default());
        let sink = Arc::new(RecordingSink::default());
        let batch = MergeBatchUseCase::new(MergeQueryUseCase::new(source, sink));

        let output = batch.execute(Vec::new(), MergeParams::default()).await;
        assert!(output.outcomes.is_empty());
        assert!(!output.has_failures());
    }
}
