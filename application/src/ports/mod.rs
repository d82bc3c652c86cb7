//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod merge_event_logger;
pub mod merge_sink;
pub mod progress;
pub mod response_source;
