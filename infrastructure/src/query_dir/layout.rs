//! File names inside a query directory

use crate::config::FileConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLayout {
    pub query_graph_file: String,
    pub responses_dir: String,
    pub merged_response_file: String,
    pub report_file: String,
}

impl Default for QueryLayout {
    fn default() -> Self {
        Self::from_config(&FileConfig::default())
    }
}

impl QueryLayout {
    pub fn from_config(config: &FileConfig) -> Self {
        Self {
            query_graph_file: config.input.query_graph_file.clone(),
            responses_dir: config.input.responses_dir.clone(),
            merged_response_file: config.output.merged_response_file.clone(),
            report_file: config.output.report_file.clone(),
        }
    }

    pub fn query_graph_path(&self, query_dir: &Path) -> PathBuf {
        query_dir.join(&self.query_graph_file)
    }

    pub fn responses_path(&self, query_dir: &Path) -> PathBuf {
        query_dir.join(&self.responses_dir)
    }

    pub fn response_path(&self, query_dir: &Path, agent: &str) -> PathBuf {
        self.responses_path(query_dir).join(format!("{}.json", agent))
    }

    pub fn merged_response_path(&self, query_dir: &Path) -> PathBuf {
        query_dir.join(&self.merged_response_file)
    }

    pub fn report_path(&self, query_dir: &Path) -> PathBuf {
        query_dir.join(&self.report_file)
    }
}
