//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Console format for merge reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored per-query summary
    Summary,
    /// One JSON document per query
    Json,
}

impl From<OutputFormat> for aramerge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => aramerge_domain::OutputFormat::Summary,
            OutputFormat::Json => aramerge_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ara-merge
#[derive(Parser, Debug)]
#[command(name = "ara-merge")]
#[command(author, version, about = "Merge the result sets of several reasoning agents (ARAs)")]
#[command(long_about = r#"
ara-merge consolidates the answers that several autonomous reasoning agents
(ARAs) returned for the same query graph.

Each query directory holds:
  qg.json                 the query graph
  ara_responses/*.json    one response per agent (agent name = file stem)

For every query the merged response (merged_response.json) and a merge
report (report.json) are written back into the query directory.

Configuration files are loaded from (in priority order):
1. ARA_MERGE_<SECTION>__<KEY>              Environment
2. --config <path>                         Explicit config file
3. ./ara-merge.toml                        Project-level config
4. ~/.config/ara-merge/config.toml         Global config

Example:
  ara-merge example_result_sets/treats_query
  ara-merge --root example_result_sets -o json
  ara-merge --root runs --event-log merge-events.jsonl -v
"#)]
pub struct Cli {
    /// Query directories to merge
    #[arg(value_name = "QUERY_DIR")]
    pub query_dirs: Vec<PathBuf>,

    /// Merge every sub-directory of DIR that contains a query graph
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report format (overrides output.format from config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append merge events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,
}
