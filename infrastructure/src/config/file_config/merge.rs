//! Merge configuration from TOML (`[merge]` section)

use aramerge_application::MergeParams;
use aramerge_domain::MergeOptions;
use aramerge_domain::config::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};

/// Raw merge configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMergeConfig {
    /// Separator between identifiers in a result identity key
    pub delimiter: String,
    /// Qnode used to label merged results
    pub essence_qnode: Option<String>,
    /// Parse agent response files concurrently
    pub parallel_loads: bool,
}

impl Default for FileMergeConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            essence_qnode: None,
            parallel_loads: true,
        }
    }
}

impl FileMergeConfig {
    pub fn to_options(&self) -> MergeOptions {
        MergeOptions {
            delimiter: self.delimiter.clone(),
            essence_qnode: self.essence_qnode.clone(),
        }
    }

    pub fn to_params(&self) -> MergeParams {
        let params = MergeParams::default().with_options(self.to_options());
        if self.parallel_loads {
            params
        } else {
            params.sequential()
        }
    }
}
