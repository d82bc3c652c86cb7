//! Output format value object

use serde::{Deserialize, Serialize};

/// How a merge report is printed to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored per-query summary table (default)
    Summary,
    /// The report document as JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Summary
    }
}
