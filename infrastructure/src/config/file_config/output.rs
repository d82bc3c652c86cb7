//! Output configuration from TOML (`[output]` section)

use aramerge_domain::OutputFormat;
use serde::{Deserialize, Serialize};

// Re-export OutputFormat from domain for convenience
pub use aramerge_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Merged response document, written into the query directory
    pub merged_response_file: String,
    /// Merge report document, written into the query directory
    pub report_file: String,
    /// Pretty-print written JSON documents
    pub pretty: bool,
    /// Enable colored terminal output
    pub color: bool,
    /// Console report format
    pub format: OutputFormat,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            merged_response_file: "merged_response.json".to_string(),
            report_file: "report.json".to_string(),
            pretty: true,
            color: true,
            format: OutputFormat::Summary,
        }
    }
}
