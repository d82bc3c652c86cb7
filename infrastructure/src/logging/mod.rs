//! Structured merge event logging.
//!
//! Provides [`JsonlMergeEventLogger`], a JSONL file writer that implements
//! the [`MergeEventLogger`](aramerge_application::MergeEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlMergeEventLogger;
