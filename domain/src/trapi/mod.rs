//! TRAPI message data model
//!
//! Only the parts of a TRAPI message that the merge reads are typed. Every
//! other field on a query node, knowledge-graph entry or binding is kept as an
//! opaque attribute map and written back unchanged.
//!
//! - [`QueryGraph`] / [`QNode`] / [`QEdge`]: the pattern the query asks for
//! - [`KnowledgeGraph`] / [`KgNode`] / [`KgEdge`]: an agent's supporting graph
//! - [`AgentResult`] / [`MergedResult`]: bindings of qnodes/qedges to KG ids
//! - [`AgentResponse`] / [`MergedResponse`]: whole messages in and out

pub mod knowledge_graph;
pub mod message;
pub mod query_graph;
pub mod result;

pub use knowledge_graph::{KgEdge, KgNode, KnowledgeGraph};
pub use message::{AgentResponse, MergedMessage, MergedResponse, ResponseEnvelope, ResponseMessage};
pub use query_graph::{QEdge, QNode, QueryGraph};
pub use result::{AgentResult, EdgeBinding, MergedResult, NodeBinding};

/// Free-form attributes carried through a merge untouched
pub type Attributes = serde_json::Map<String, serde_json::Value>;
