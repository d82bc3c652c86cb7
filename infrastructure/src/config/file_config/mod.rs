//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod input;
mod merge;
mod output;

pub use input::FileInputConfig;
pub use merge::FileMergeConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use aramerge_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Merge policy
    pub merge: FileMergeConfig,
    /// Query directory input layout
    pub input: FileInputConfig,
    /// Output files and console settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.merge.to_options().validate();

        let file_names = [
            ("input.query_graph_file", &self.input.query_graph_file),
            ("input.responses_dir", &self.input.responses_dir),
            ("output.merged_response_file", &self.output.merged_response_file),
            ("output.report_file", &self.output.report_file),
        ];
        for (field, value) in file_names {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!("{} must not be empty", field),
                });
            }
        }

        let outputs = [
            ("output.merged_response_file", &self.output.merged_response_file),
            ("output.report_file", &self.output.report_file),
        ];
        for (field, value) in outputs {
            if !value.trim().is_empty() && *value == self.input.query_graph_file {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::Conflict {
                        first: "input.query_graph_file".to_string(),
                        second: field.to_string(),
                    },
                    message: format!("{} would overwrite the query graph '{}'", field, value),
                });
            }
        }

        if !self.output.report_file.trim().is_empty()
            && self.output.report_file == self.output.merged_response_file
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::Conflict {
                    first: "output.merged_response_file".to_string(),
                    second: "output.report_file".to_string(),
                },
                message: format!(
                    "output.report_file and output.merged_response_file are both '{}'",
                    self.output.report_file
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aramerge_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[merge]
delimiter = "::"
essence_qnode = "n1"

[input]
query_graph_file = "query_graph.json"
responses_dir = "responses"

[output]
merged_response_file = "merged.json"
report_file = "stats.json"
color = false
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.merge.delimiter, "::");
        assert_eq!(config.merge.essence_qnode.as_deref(), Some("n1"));
        assert!(config.merge.parallel_loads);
        assert_eq!(config.input.query_graph_file, "query_graph.json");
        assert_eq!(config.input.responses_dir, "responses");
        assert_eq!(config.output.merged_response_file, "merged.json");
        assert_eq!(config.output.report_file, "stats.json");
        assert!(!config.output.color);
        assert!(config.output.pretty);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[input]\nresponses_dir = \"aras\"\n").unwrap();
        assert_eq!(config.input.responses_dir, "aras");
        assert_eq!(config.input.query_graph_file, "qg.json");
        assert_eq!(config.merge, FileMergeConfig::default());
        assert_eq!(config.output, FileOutputConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_empty_values() {
        let mut config = FileConfig::default();
        config.merge.delimiter = String::new();
        config.output.report_file = " ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(ConfigIssue::has_errors(&issues));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyValue { field } if field == "output.report_file"
        )));
    }

    #[test]
    fn test_validate_conflicting_file_names() {
        let mut config = FileConfig::default();
        config.output.report_file = "merged_response.json".to_string();
        config.output.merged_response_file = "merged_response.json".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::Conflict { .. }));

        let mut config = FileConfig::default();
        config.output.merged_response_file = "qg.json".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("query graph"));
    }
}
