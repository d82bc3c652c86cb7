//! Console output formatter for merge reports

use crate::output::formatter::ReportFormatter;
use aramerge_application::{MergeBatchOutput, MergeQueryOutput};
use aramerge_domain::merge::Retained;
use colored::Colorize;
use serde_json::json;

/// Formats merge reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one query's report as a short table
    pub fn format_summary(output: &MergeQueryOutput) -> String {
        let mut text = String::new();
        let report = &output.report;

        text.push_str(&Self::header(&output.query));
        text.push('\n');

        let agents = output
            .agents
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!("{} {}\n", "Agents: ".cyan().bold(), agents));
        text.push_str(&format!(
            "{} {}\n\n",
            "Essence:".cyan().bold(),
            output.essence_qnode
        ));

        text.push_str(&format!(
            "{:<10} {:>8} {:>8} {:>6}\n",
            "", "before", "after", "kept"
        ));
        text.push_str(&Self::row(
            "Results",
            report.pre_merging.results,
            report.post_merging.results,
        ));
        text.push_str(&Self::row(
            "KG nodes",
            report.pre_merging.nodes,
            report.post_merging.nodes,
        ));
        text.push_str(&Self::row(
            "KG edges",
            report.pre_merging.edges,
            report.post_merging.edges,
        ));

        if !output.warnings.is_empty() {
            let skipped = output.warnings.iter().filter(|w| w.skipped_result()).count();
            text.push_str(&format!(
                "\n{} {} ({} results skipped, {} ambiguous bindings)\n",
                "Warnings:".yellow().bold(),
                output.warnings.len(),
                skipped,
                output.warnings.len() - skipped
            ));
        }

        text
    }

    /// Format one query's report as pretty JSON
    pub fn format_json(output: &MergeQueryOutput) -> String {
        let document = json!({
            "query": output.query,
            "agents": output.agents,
            "essence_qnode": output.essence_qnode,
            "report": output.report,
            "warnings": output.warnings,
        });
        serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
    }

    /// Closing line listing failed queries
    pub fn format_batch_footer(batch: &MergeBatchOutput) -> String {
        let total = batch.outcomes.len();
        let failed = batch.failure_count();

        if failed == 0 {
            return format!(
                "\n{} Merged {} {}\n",
                "v".green(),
                total,
                Self::plural(total, "query", "queries")
            );
        }

        let mut text = format!(
            "\n{} {} of {} {} failed\n",
            "x".red(),
            failed,
            total,
            Self::plural(total, "query", "queries")
        );
        for (query_dir, error) in batch.failed() {
            text.push_str(&format!(
                "  {} {}\n",
                format!("{}:", query_dir.display()).red(),
                error
            ));
        }
        text
    }

    fn row(label: &str, pre: usize, post: Retained) -> String {
        format!(
            "{:<10} {:>8} {:>8} {:>5}%\n",
            label, pre, post.count, post.pct
        )
    }

    fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
        if count == 1 { one } else { many }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_summary(&self, output: &MergeQueryOutput) -> String {
        Self::format_summary(output)
    }

    fn format_json(&self, output: &MergeQueryOutput) -> String {
        Self::format_json(output)
    }

    fn format_batch_footer(&self, batch: &MergeBatchOutput) -> String {
        Self::format_batch_footer(batch)
    }
}
