//! Query graph types

use super::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The query graph shared by every agent answering one query
///
/// `nodes` is mandatory; a document without it is rejected during
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryGraph {
    pub nodes: BTreeMap<String, QNode>,
    #[serde(default)]
    pub edges: BTreeMap<String, QEdge>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl QueryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query node (builder style)
    pub fn with_node(mut self, key: impl Into<String>, node: QNode) -> Self {
        self.nodes.insert(key.into(), node);
        self
    }

    /// Add a query edge (builder style)
    pub fn with_edge(mut self, key: impl Into<String>, edge: QEdge) -> Self {
        self.edges.insert(key.into(), edge);
        self
    }
}

/// A named node slot in the query graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QNode {
    /// Whether several entities may jointly satisfy this slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_set: Option<bool>,
    /// Identifiers this slot is pinned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl QNode {
    /// An unpinned, single-entity slot
    pub fn free() -> Self {
        Self::default()
    }

    /// A single-entity slot pinned to the given identifiers
    pub fn pinned<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A set slot, excluded from result identity
    pub fn set() -> Self {
        Self {
            is_set: Some(true),
            ..Self::default()
        }
    }

    pub fn is_set(&self) -> bool {
        self.is_set.unwrap_or(false)
    }

    pub fn is_pinned(&self) -> bool {
        self.ids.is_some()
    }
}

/// A named edge slot in the query graph; opaque to the merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QEdge {
    #[serde(flatten)]
    pub fields: Attributes,
}
