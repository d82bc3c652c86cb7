//! Progress reporting while queries are merged

use aramerge_application::MergeProgressNotifier;
use aramerge_domain::{FoldSummary, MergeReport};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with one bar per query, advancing per folded agent
pub struct ProgressReporter {
    multi: MultiProgress,
    query_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            query_bar: Mutex::new(None),
        }
    }

    fn query_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn agent_status(summary: &FoldSummary) -> String {
        if summary.skipped() > 0 {
            format!(
                "{} {} ({} skipped)",
                "!".yellow(),
                summary.agent,
                summary.skipped()
            )
        } else {
            format!("{} {}", "v".green(), summary.agent)
        }
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.query_bar.lock().ok().and_then(|mut bar| bar.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeProgressNotifier for ProgressReporter {
    fn on_query_start(&self, query: &str, total_agents: usize) {
        let pb = self.multi.add(ProgressBar::new(total_agents as u64));
        pb.set_style(Self::query_style());
        pb.set_prefix(query.to_string());
        pb.set_message("Folding agents...");

        if let Ok(mut bar) = self.query_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_agent_folded(&self, _query: &str, summary: &FoldSummary) {
        if let Ok(bar) = self.query_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::agent_status(summary));
            pb.inc(1);
        }
    }

    fn on_query_complete(&self, _query: &str, report: &MergeReport) {
        if let Some(pb) = self.take_bar() {
            pb.finish_with_message(format!(
                "{} {} -> {} results",
                "done".green(),
                report.pre_merging.results,
                report.post_merging.results.count
            ));
        }
    }

    fn on_query_failed(&self, _query: &str, error: &str) {
        if let Some(pb) = self.take_bar() {
            pb.abandon_with_message(format!("{} {}", "failed".red(), error));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl MergeProgressNotifier for SimpleProgress {
    fn on_query_start(&self, query: &str, total_agents: usize) {
        println!(
            "{} {} ({} agents)",
            "->".cyan(),
            query.bold(),
            total_agents
        );
    }

    fn on_agent_folded(&self, _query: &str, summary: &FoldSummary) {
        println!(
            "  {} {} results, {} KG nodes, {} KG edges",
            ProgressReporter::agent_status(summary),
            summary.results,
            summary.absorbed.nodes_seen,
            summary.absorbed.edges_seen
        );
    }

    fn on_query_complete(&self, _query: &str, _report: &MergeReport) {
        println!();
    }

    fn on_query_failed(&self, query: &str, error: &str) {
        println!("  {} {}: {}", "x".red(), query, error);
    }
}
