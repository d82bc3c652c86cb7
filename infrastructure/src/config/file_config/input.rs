//! Input layout configuration from TOML (`[input]` section)

use serde::{Deserialize, Serialize};

/// Where a query directory keeps its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Query graph document, relative to the query directory
    pub query_graph_file: String,
    /// Directory of per-agent response documents, relative to the query directory
    pub responses_dir: String,
}

impl Default for FileInputConfig {
    fn default() -> Self {
        Self {
            query_graph_file: "qg.json".to_string(),
            responses_dir: "ara_responses".to_string(),
        }
    }
}
