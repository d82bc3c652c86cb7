//! First-writer-wins knowledge graph union

use crate::trapi::KnowledgeGraph;
use std::collections::btree_map::Entry;

/// What absorbing one agent's knowledge graph changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absorbed {
    pub nodes_seen: usize,
    pub nodes_added: usize,
    pub edges_seen: usize,
    pub edges_added: usize,
}

impl Absorbed {
    /// Entries whose identifier was already present; their payload was discarded
    pub fn collisions(&self) -> usize {
        (self.nodes_seen - self.nodes_added) + (self.edges_seen - self.edges_added)
    }
}

/// Accumulates agents' knowledge graphs into one
///
/// Entries are merged by identifier only. The first agent to supply an
/// identifier keeps it; later payloads for the same identifier are dropped
/// without comparing attributes.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraphUnion {
    merged: KnowledgeGraph,
    pre_merge_nodes: usize,
    pre_merge_edges: usize,
}

impl KnowledgeGraphUnion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, kg: KnowledgeGraph) -> Absorbed {
        let mut absorbed = Absorbed {
            nodes_seen: kg.nodes.len(),
            edges_seen: kg.edges.len(),
            ..Absorbed::default()
        };

        for (id, node) in kg.nodes {
            if let Entry::Vacant(slot) = self.merged.nodes.entry(id) {
                slot.insert(node);
                absorbed.nodes_added += 1;
            }
        }
        for (id, edge) in kg.edges {
            if let Entry::Vacant(slot) = self.merged.edges.entry(id) {
                slot.insert(edge);
                absorbed.edges_added += 1;
            }
        }

        self.pre_merge_nodes += absorbed.nodes_seen;
        self.pre_merge_edges += absorbed.edges_seen;
        absorbed
    }

    pub fn merged(&self) -> &KnowledgeGraph {
        &self.merged
    }

    pub fn into_merged(self) -> KnowledgeGraph {
        self.merged
    }

    /// Nodes seen across all agents, duplicates included
    pub fn pre_merge_node_count(&self) -> usize {
        self.pre_merge_nodes
    }

    /// Edges seen across all agents, duplicates included
    pub fn pre_merge_edge_count(&self) -> usize {
        self.pre_merge_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trapi::{KgEdge, KgNode};

    #[test]
    fn test_first_writer_wins() {
        let mut union = KnowledgeGraphUnion::new();
        union.absorb(
            KnowledgeGraph::new()
                .with_node("X1", KgNode::named("Foo"))
                .with_node("Y1", KgNode::named("Bar")),
        );
        let absorbed = union.absorb(
            KnowledgeGraph::new()
                .with_node("X1", KgNode::named("FooDup"))
                .with_node("Z1", KgNode::named("Baz")),
        );

        assert_eq!(absorbed.nodes_added, 1);
        assert_eq!(absorbed.collisions(), 1);
        assert_eq!(union.merged().node_name("X1"), Some("Foo"));
        assert_eq!(union.merged().nodes.len(), 3);
        assert_eq!(union.pre_merge_node_count(), 4);
    }

    #[test]
    fn test_edges_are_unioned_by_id() {
        let mut union = KnowledgeGraphUnion::new();
        union.absorb(
            KnowledgeGraph::new().with_edge("e1", KgEdge::triple("X1", "biolink:treats", "Y1")),
        );
        union.absorb(
            KnowledgeGraph::new()
                .with_edge("e1", KgEdge::triple("X1", "biolink:related_to", "Y1"))
                .with_edge("e2", KgEdge::triple("X2", "biolink:treats", "Y1")),
        );

        let merged = union.into_merged();
        assert_eq!(merged.edges.len(), 2);
        assert_eq!(
            merged.edges["e1"].attributes["predicate"],
            serde_json::json!("biolink:treats")
        );
    }

    #[test]
    fn test_pre_merge_totals_count_every_agent() {
        let mut union = KnowledgeGraphUnion::new();
        let kg = KnowledgeGraph::new()
            .with_node("X1", KgNode::named("Foo"))
            .with_edge("e1", KgEdge::default());
        union.absorb(kg.clone());
        union.absorb(kg);

        assert_eq!(union.pre_merge_node_count(), 2);
        assert_eq!(union.pre_merge_edge_count(), 2);
        assert_eq!(union.merged().nodes.len(), 1);
        assert_eq!(union.merged().edges.len(), 1);
    }
}
