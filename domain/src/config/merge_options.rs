//! Merge policy options

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Separator placed between representative identifiers in an identity key
pub const DEFAULT_DELIMITER: &str = "--";

/// Policy knobs for one merge pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Separator used when joining identity-key parts
    pub delimiter: String,
    /// Qnode whose bound entity labels each merged result.
    ///
    /// When unset, the lexicographically smallest unpinned required qnode is used.
    pub essence_qnode: Option<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            essence_qnode: None,
        }
    }
}

impl MergeOptions {
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_essence_qnode(mut self, qnode_key: impl Into<String>) -> Self {
        self.essence_qnode = Some(qnode_key.into());
        self
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.delimiter.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "merge.delimiter".to_string(),
                },
                message: "merge.delimiter must not be empty; identity keys would collide"
                    .to_string(),
            });
        }

        if let Some(qnode) = &self.essence_qnode
            && qnode.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyValue {
                    field: "merge.essence_qnode".to_string(),
                },
                message: "merge.essence_qnode is blank; the default essence policy applies"
                    .to_string(),
            });
        }

        issues
    }

    /// Configured essence qnode, ignoring blank values
    pub fn essence_qnode(&self) -> Option<&str> {
        self.essence_qnode
            .as_deref()
            .filter(|qnode| !qnode.trim().is_empty())
    }
}
