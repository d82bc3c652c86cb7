//! Output formatter trait

use aramerge_application::{MergeBatchOutput, MergeQueryOutput};

/// Trait for formatting merge outcomes
pub trait ReportFormatter {
    /// Format one query's report for reading in a terminal
    fn format_summary(&self, output: &MergeQueryOutput) -> String;

    /// Format one query's report as JSON
    fn format_json(&self, output: &MergeQueryOutput) -> String;

    /// Closing line for a whole batch
    fn format_batch_footer(&self, batch: &MergeBatchOutput) -> String;
}
