//! Knowledge graph types

use super::Attributes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An agent's knowledge graph, keyed by node/edge identifier
///
/// Both `nodes` and `edges` are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub nodes: BTreeMap<String, KgNode>,
    pub edges: BTreeMap<String, KgEdge>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node (builder style)
    pub fn with_node(mut self, id: impl Into<String>, node: KgNode) -> Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Add an edge (builder style)
    pub fn with_edge(mut self, id: impl Into<String>, edge: KgEdge) -> Self {
        self.edges.insert(id.into(), edge);
        self
    }

    /// Display name of a node, if the node exists and carries one
    pub fn node_name(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|node| node.name.as_deref())
    }
}

/// A knowledge graph node; only `name` is interpreted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KgNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl KgNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: Attributes::new(),
        }
    }
}

/// A knowledge graph edge; fully opaque
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KgEdge {
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl KgEdge {
    /// Edge with `subject`, `predicate` and `object` fields
    pub fn triple(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert("subject".to_string(), Value::String(subject.into()));
        attributes.insert("predicate".to_string(), Value::String(predicate.into()));
        attributes.insert("object".to_string(), Value::String(object.into()));
        Self { attributes }
    }
}
