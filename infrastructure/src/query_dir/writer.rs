//! File system merge writer

use super::layout::QueryLayout;
use aramerge_application::{MergeSink, SinkError};
use aramerge_domain::{MergeReport, MergedResponse};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// [`MergeSink`] that writes JSON documents into the query directory
#[derive(Debug, Clone)]
pub struct FsMergeWriter {
    layout: QueryLayout,
    pretty: bool,
}

impl Default for FsMergeWriter {
    fn default() -> Self {
        Self::new(QueryLayout::default())
    }
}

impl FsMergeWriter {
    pub fn new(layout: QueryLayout) -> Self {
        Self {
            layout,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    async fn write_document<T: Serialize>(
        &self,
        path: &Path,
        what: &str,
        document: &T,
    ) -> Result<(), SinkError> {
        let serialized = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        };
        let bytes = serialized.map_err(|e| SinkError::Serialize {
            what: what.to_string(),
            message: e.to_string(),
        })?;

        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| SinkError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!("Wrote {} to {}", what, path.display());
        Ok(())
    }
}

#[async_trait]
impl MergeSink for FsMergeWriter {
    async fn write_merged_response(
        &self,
        query: &Path,
        response: &MergedResponse,
    ) -> Result<(), SinkError> {
        let path = self.layout.merged_response_path(query);
        self.write_document(&path, "merged response", response)
            .await
    }

    async fn write_report(&self, query: &Path, report: &MergeReport) -> Result<(), SinkError> {
        let path = self.layout.report_path(query);
        self.write_document(&path, "merge report", report).await
    }
}
