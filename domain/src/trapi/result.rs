//! Result and binding types

use super::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Binding of a query node to a knowledge graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBinding {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl NodeBinding {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }
}

/// Binding of a query edge to a knowledge graph edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeBinding {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl EdgeBinding {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }
}

/// One candidate answer returned by an agent
///
/// Fields other than the bindings (scores, analyses) are not carried into
/// the merged output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    pub node_bindings: BTreeMap<String, Vec<NodeBinding>>,
    #[serde(default)]
    pub edge_bindings: BTreeMap<String, Vec<EdgeBinding>>,
}

impl AgentResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a qnode to one more KG node (builder style)
    pub fn bind_node(mut self, qnode_key: impl Into<String>, id: impl Into<String>) -> Self {
        self.node_bindings
            .entry(qnode_key.into())
            .or_default()
            .push(NodeBinding::new(id));
        self
    }

    /// Bind a qedge to one more KG edge (builder style)
    pub fn bind_edge(mut self, qedge_key: impl Into<String>, id: impl Into<String>) -> Self {
        self.edge_bindings
            .entry(qedge_key.into())
            .or_default()
            .push(EdgeBinding::new(id));
        self
    }

    /// Node bindings for a qnode; empty when the qnode is unbound
    pub fn nodes_for(&self, qnode_key: &str) -> &[NodeBinding] {
        self.node_bindings
            .get(qnode_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A consolidated answer built from every agent result sharing one identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedResult {
    pub node_bindings: BTreeMap<String, Vec<NodeBinding>>,
    pub edge_bindings: BTreeMap<String, Vec<EdgeBinding>>,
    /// Human-readable label of the result's primary free variable
    pub essence: String,
}

impl MergedResult {
    /// Node bindings for a qnode; empty when the qnode is unbound
    pub fn nodes_for(&self, qnode_key: &str) -> &[NodeBinding] {
        self.node_bindings
            .get(qnode_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edge bindings for a qedge; empty when the qedge is unbound
    pub fn edges_for(&self, qedge_key: &str) -> &[EdgeBinding] {
        self.edge_bindings
            .get(qedge_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
