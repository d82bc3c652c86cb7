//! Merge output port

use aramerge_domain::{MergeReport, MergedResponse};
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: String, message: String },
}

/// Destination for a query's merged response and report
#[async_trait]
pub trait MergeSink: Send + Sync {
    async fn write_merged_response(
        &self,
        query: &Path,
        response: &MergedResponse,
    ) -> Result<(), SinkError>;

    async fn write_report(&self, query: &Path, report: &MergeReport) -> Result<(), SinkError>;
}
