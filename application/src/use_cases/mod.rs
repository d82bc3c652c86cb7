//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod merge_batch;
pub mod merge_query;
