//! Port for structured merge event logging.
//!
//! Defines the [`MergeEventLogger`] trait for recording merge events
//! (agent folds, skipped results, ambiguous bindings, query outcomes) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record of data-quality findings (JSONL).

use aramerge_domain::{FoldSummary, MergeReport, MergeWarning};
use serde_json::{Value, json};

/// A structured merge event for logging.
pub struct MergeEvent {
    /// Event type identifier (e.g., "agent_folded", "binding_warning").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl MergeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn agent_folded(query: &str, summary: &FoldSummary) -> Self {
        Self::new(
            "agent_folded",
            json!({
                "query": query,
                "agent": summary.agent,
                "results": summary.results,
                "grouped": summary.grouped,
                "kg_nodes": summary.absorbed.nodes_seen,
                "kg_edges": summary.absorbed.edges_seen,
                "kg_collisions": summary.absorbed.collisions(),
            }),
        )
    }

    pub fn binding_warning(query: &str, warning: &MergeWarning) -> Self {
        let mut payload = serde_json::to_value(warning).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut payload {
            map.insert("query".to_string(), Value::String(query.to_string()));
        }
        Self::new("binding_warning", payload)
    }

    pub fn query_merged(query: &str, report: &MergeReport) -> Self {
        Self::new("query_merged", json!({"query": query, "report": report}))
    }

    pub fn query_failed(query: &str, error: &str) -> Self {
        Self::new("query_failed", json!({"query": query, "error": error}))
    }
}

/// Port for logging merge events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures
/// never abort a merge.
pub trait MergeEventLogger: Send + Sync {
    fn log(&self, event: MergeEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoMergeEventLogger;

impl MergeEventLogger for NoMergeEventLogger {
    fn log(&self, _event: MergeEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_warning_payload_carries_query_and_kind() {
        let warning = MergeWarning::IncompleteBinding {
            agent: "arax".into(),
            result_index: 4,
            missing: vec!["n1".to_string()],
        };
        let event = MergeEvent::binding_warning("treats_query", &warning);

        assert_eq!(event.event_type, "binding_warning");
        assert_eq!(event.payload["query"], "treats_query");
        assert_eq!(event.payload["kind"], "incomplete_binding");
        assert_eq!(event.payload["result_index"], 4);
    }

    #[test]
    fn test_query_merged_embeds_report() {
        let event = MergeEvent::query_merged("q", &MergeReport::default());
        assert_eq!(event.payload["report"]["pre_merging"]["results"], 0);
    }
}
