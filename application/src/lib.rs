//! Application layer for ara-merge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::MergeParams;
pub use ports::{
    merge_event_logger::{MergeEvent, MergeEventLogger, NoMergeEventLogger},
    merge_sink::{MergeSink, SinkError},
    progress::{MergeProgressNotifier, NoProgress},
    response_source::{ResponseSource, SourceError},
};
pub use use_cases::merge_batch::{MergeBatchOutput, MergeBatchUseCase, QueryOutcome};
pub use use_cases::merge_query::{
    MergeQueryError, MergeQueryInput, MergeQueryOutput, MergeQueryUseCase,
};
