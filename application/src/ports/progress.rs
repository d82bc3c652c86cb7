//! Progress notification port
//!
//! Defines the interface for reporting progress while queries are merged.

use aramerge_domain::{FoldSummary, MergeReport};

/// Callback for progress updates during a merge
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, etc.)
pub trait MergeProgressNotifier: Send + Sync {
    /// Called once the agent responses of a query are loaded
    fn on_query_start(&self, query: &str, total_agents: usize);

    /// Called after each agent response is folded into the merge
    fn on_agent_folded(&self, query: &str, summary: &FoldSummary);

    /// Called when the merged outputs of a query have been written
    fn on_query_complete(&self, query: &str, report: &MergeReport);

    /// Called when a query is abandoned because of a fatal error
    fn on_query_failed(&self, _query: &str, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl MergeProgressNotifier for NoProgress {
    fn on_query_start(&self, _query: &str, _total_agents: usize) {}
    fn on_agent_folded(&self, _query: &str, _summary: &FoldSummary) {}
    fn on_query_complete(&self, _query: &str, _report: &MergeReport) {}
}
