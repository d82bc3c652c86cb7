//! Domain layer for ara-merge
//!
//! This crate contains the TRAPI data model and the result merge algorithm.
//! It has no dependencies on file I/O, logging or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Result identity
//!
//! Several reasoning agents (ARAs) answer the same query graph. Two of their
//! results are the same answer when they bind identical identifiers to every
//! required (non-set) query node. Such results are grouped and their bindings
//! unioned into one [`MergedResult`].
//!
//! ## Knowledge graph union
//!
//! Agents' knowledge graphs are unioned by identifier. The first agent, in
//! ascending agent-name order, to supply an identifier keeps its payload.

pub mod config;
pub mod core;
pub mod merge;
pub mod trapi;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, MergeOptions, OutputFormat, Severity};
pub use crate::core::{agent::AgentName, error::MergeError};
pub use merge::{
    FoldSummary, MergeOutcome, MergeReport, MergeSession, MergeTotals, MergeWarning,
    QueryRequirements,
};
pub use trapi::{
    AgentResponse, AgentResult, EdgeBinding, KgEdge, KgNode, KnowledgeGraph, MergedResponse,
    MergedResult, NodeBinding, QEdge, QNode, QueryGraph, ResponseEnvelope,
};
