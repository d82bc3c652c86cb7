//! Result merge domain
//!
//! Consolidates the answer sets of several agents into one.
//!
//! # Pipeline
//!
//! ```text
//! QueryGraph ──► QueryRequirements ──┬──► ResultGrouper ──► BindingUnionMerger ──► EssenceSelector
//!                                     │          ▲                                        ▲
//! AgentResponse (sorted by agent) ────┴──────────┘                                        │
//!        └──────────────────────────► KnowledgeGraphUnion ───────────────────────────────┘
//!                                                 all of the above ──► MergeReport
//! ```
//!
//! [`MergeSession`] owns every accumulator for one query: create it from the
//! query graph, [`fold`](MergeSession::fold) each agent response in ascending
//! agent-name order, then [`finalize`](MergeSession::finalize).

pub mod binding_union;
pub mod essence;
pub mod identity;
pub mod kg_union;
pub mod requirements;
pub mod session;
pub mod stats;
pub mod warning;

pub use binding_union::BindingUnionMerger;
pub use essence::EssenceSelector;
pub use identity::{AmbiguousBinding, IdentityBucket, IdentityKey, KeyDerivation, ResultGrouper};
pub use kg_union::{Absorbed, KnowledgeGraphUnion};
pub use requirements::QueryRequirements;
pub use session::{FoldSummary, MergeOutcome, MergeSession};
pub use stats::{MergeReport, MergeTotals, PostMergeTotals, Retained, retained_pct};
pub use warning::MergeWarning;
