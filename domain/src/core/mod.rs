//! Core domain concepts shared across all subdomains.
//!
//! - [`agent::AgentName`]: identifies the reasoning agent that produced a response
//! - [`error::MergeError`]: fatal, per-query merge errors

pub mod agent;
pub mod error;
