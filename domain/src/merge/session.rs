//! Merge session: the accumulators of one query's merge

use super::binding_union::BindingUnionMerger;
use super::essence::EssenceSelector;
use super::identity::ResultGrouper;
use super::kg_union::{Absorbed, KnowledgeGraphUnion};
use super::requirements::QueryRequirements;
use super::stats::{MergeReport, MergeTotals};
use super::warning::MergeWarning;
use crate::config::MergeOptions;
use crate::core::agent::AgentName;
use crate::core::error::MergeError;
use crate::trapi::{AgentResponse, MergedMessage, MergedResponse, QueryGraph};

/// What folding one agent response did
#[derive(Debug, Clone, PartialEq)]
pub struct FoldSummary {
    pub agent: AgentName,
    /// Results the agent returned
    pub results: usize,
    /// Results that entered an identity bucket
    pub grouped: usize,
    pub absorbed: Absorbed,
    pub warnings: Vec<MergeWarning>,
}

impl FoldSummary {
    pub fn skipped(&self) -> usize {
        self.results - self.grouped
    }
}

/// Everything a finished merge produced
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub response: MergedResponse,
    pub report: MergeReport,
    pub warnings: Vec<MergeWarning>,
    /// Agents in the order they were folded
    pub agents: Vec<AgentName>,
    pub essence_qnode: String,
}

/// Owns the merged knowledge graph and identity buckets for one query
///
/// Agents must be folded in strictly ascending name order so that
/// first-writer-wins and bucket arrival order are reproducible.
///
/// ```
/// use aramerge_domain::config::MergeOptions;
/// use aramerge_domain::merge::MergeSession;
/// use aramerge_domain::trapi::{AgentResponse, AgentResult, KgNode, KnowledgeGraph, QNode, QueryGraph};
///
/// let qg = QueryGraph::new()
///     .with_node("n0", QNode::pinned(["X1"]))
///     .with_node("n1", QNode::free());
/// let mut session = MergeSession::new(qg, &MergeOptions::default()).unwrap();
///
/// let kg = KnowledgeGraph::new().with_node("Y1", KgNode::named("Bar"));
/// let result = AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1");
/// session.fold(AgentResponse::new("arax", vec![result], kg)).unwrap();
///
/// let outcome = session.finalize();
/// assert_eq!(outcome.response.message.results[0].essence, "Bar");
/// ```
#[derive(Debug, Clone)]
pub struct MergeSession {
    query_graph: QueryGraph,
    requirements: QueryRequirements,
    essence: EssenceSelector,
    kg: KnowledgeGraphUnion,
    grouper: ResultGrouper,
    warnings: Vec<MergeWarning>,
    agents: Vec<AgentName>,
}

impl MergeSession {
    /// Start a merge for one query
    ///
    /// Fails when the query graph offers no usable essence qnode.
    pub fn new(query_graph: QueryGraph, options: &MergeOptions) -> Result<Self, MergeError> {
        let requirements = QueryRequirements::analyze(&query_graph);
        let essence = EssenceSelector::choose(&requirements, options.essence_qnode())?;

        Ok(Self {
            query_graph,
            requirements,
            essence,
            kg: KnowledgeGraphUnion::new(),
            grouper: ResultGrouper::new(options.delimiter.clone()),
            warnings: Vec::new(),
            agents: Vec::new(),
        })
    }

    /// Merge every response, folding them in agent-name order
    pub fn merge_all(
        query_graph: QueryGraph,
        mut responses: Vec<AgentResponse>,
        options: &MergeOptions,
    ) -> Result<MergeOutcome, MergeError> {
        let mut session = Self::new(query_graph, options)?;
        responses.sort_by(|a, b| a.agent.cmp(&b.agent));
        for response in responses {
            session.fold(response)?;
        }
        Ok(session.finalize())
    }

    pub fn requirements(&self) -> &QueryRequirements {
        &self.requirements
    }

    pub fn essence_qnode(&self) -> &str {
        self.essence.qnode_key()
    }

    pub fn agents(&self) -> &[AgentName] {
        &self.agents
    }

    pub fn warnings(&self) -> &[MergeWarning] {
        &self.warnings
    }

    /// Fold one agent's response into the session
    pub fn fold(&mut self, response: AgentResponse) -> Result<FoldSummary, MergeError> {
        if let Some(previous) = self.agents.last()
            && response.agent <= *previous
        {
            return Err(MergeError::AgentOutOfOrder {
                agent: response.agent.to_string(),
                previous: previous.to_string(),
            });
        }

        let AgentResponse {
            agent,
            results,
            knowledge_graph,
        } = response;

        let result_count = results.len();
        let warnings = self.grouper.group(&agent, results, &self.requirements);
        let skipped = warnings.iter().filter(|w| w.skipped_result()).count();
        let absorbed = self.kg.absorb(knowledge_graph);

        self.warnings.extend(warnings.iter().cloned());
        self.agents.push(agent.clone());

        Ok(FoldSummary {
            agent,
            results: result_count,
            grouped: result_count - skipped,
            absorbed,
            warnings,
        })
    }

    /// Build merged results, label them and compute the report
    pub fn finalize(self) -> MergeOutcome {
        let pre = MergeTotals {
            results: self.grouper.pre_merge_result_count(),
            nodes: self.kg.pre_merge_node_count(),
            edges: self.kg.pre_merge_edge_count(),
        };

        let mut results = BindingUnionMerger::merge(self.grouper.into_buckets());
        let knowledge_graph = self.kg.into_merged();
        self.essence.apply(&mut results, &knowledge_graph);

        let post = MergeTotals {
            results: results.len(),
            nodes: knowledge_graph.nodes.len(),
            edges: knowledge_graph.edges.len(),
        };

        MergeOutcome {
            response: MergedResponse {
                message: MergedMessage {
                    results,
                    query_graph: self.query_graph,
                    knowledge_graph,
                },
            },
            report: MergeReport::new(pre, post),
            warnings: self.warnings,
            agents: self.agents,
            essence_qnode: self.essence.qnode_key().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trapi::{AgentResult, KgEdge, KgNode, KnowledgeGraph, QNode};
    use std::collections::HashSet;

    fn query_graph() -> QueryGraph {
        QueryGraph::new()
            .with_node("n0", QNode::pinned(["X1"]))
            .with_node("n1", QNode::free())
    }

    fn agent_a() -> AgentResponse {
        AgentResponse::new(
            "agent_a",
            vec![
                AgentResult::new()
                    .bind_node("n0", "X1")
                    .bind_node("n1", "Y1")
                    .bind_edge("e0", "a-e1"),
            ],
            KnowledgeGraph::new()
                .with_node("X1", KgNode::named("Foo"))
                .with_node("Y1", KgNode::named("Bar"))
                .with_edge("a-e1", KgEdge::triple("Y1", "biolink:treats", "X1")),
        )
    }

    fn agent_b() -> AgentResponse {
        AgentResponse::new(
            "agent_b",
            vec![
                AgentResult::new()
                    .bind_node("n0", "X1")
                    .bind_node("n1", "Y1")
                    .bind_edge("e0", "b-e1"),
            ],
            KnowledgeGraph::new()
                .with_node("X1", KgNode::named("FooDup"))
                .with_node("Y1", KgNode::named("Bar"))
                .with_edge("b-e1", KgEdge::triple("Y1", "biolink:treats", "X1")),
        )
    }

    #[test]
    fn test_two_agents_same_answer_merge_into_one() {
        let outcome =
            MergeSession::merge_all(query_graph(), vec![agent_b(), agent_a()], &MergeOptions::default())
                .unwrap();

        let results = &outcome.response.message.results;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nodes_for("n0").len(), 1);
        assert_eq!(results[0].nodes_for("n0")[0].id, "X1");
        assert_eq!(results[0].nodes_for("n1")[0].id, "Y1");
        assert_eq!(results[0].edges_for("e0").len(), 2);
        assert_eq!(results[0].essence, "Bar");

        let kg = &outcome.response.message.knowledge_graph;
        assert_eq!(kg.node_name("X1"), Some("Foo"));

        assert_eq!(outcome.report.pre_merging.results, 2);
        assert_eq!(outcome.report.post_merging.results.count, 1);
        assert_eq!(outcome.report.post_merging.results.pct, 50);
        assert_eq!(outcome.report.pre_merging.nodes, 4);
        assert_eq!(outcome.report.post_merging.nodes.count, 2);
        assert_eq!(outcome.essence_qnode, "n1");
        assert_eq!(outcome.agents, vec![AgentName::from("agent_a"), AgentName::from("agent_b")]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_identifiers_containing_delimiter_stay_separate() {
        let qg = QueryGraph::new()
            .with_node("n0", QNode::free())
            .with_node("n1", QNode::free());
        let responses = vec![
            AgentResponse::new(
                "a",
                vec![AgentResult::new().bind_node("n0", "A--B").bind_node("n1", "C")],
                KnowledgeGraph::new(),
            ),
            AgentResponse::new(
                "b",
                vec![AgentResult::new().bind_node("n0", "A").bind_node("n1", "B--C")],
                KnowledgeGraph::new(),
            ),
        ];

        let outcome = MergeSession::merge_all(qg, responses, &MergeOptions::default()).unwrap();
        let results = &outcome.response.message.results;
        assert_eq!(results.len(), 2);
        for result in results {
            assert_eq!(result.nodes_for("n0").len(), 1);
            assert_eq!(result.nodes_for("n1").len(), 1);
        }
    }

    #[test]
    fn test_fold_rejects_out_of_order_agents() {
        let mut session = MergeSession::new(query_graph(), &MergeOptions::default()).unwrap();
        session.fold(agent_b()).unwrap();

        let err = session.fold(agent_a()).unwrap_err();
        assert_eq!(
            err,
            MergeError::AgentOutOfOrder {
                agent: "agent_a".to_string(),
                previous: "agent_b".to_string(),
            }
        );
        assert!(session.fold(agent_b()).is_err());
    }

    #[test]
    fn test_new_fails_without_essence_candidate() {
        let qg = QueryGraph::new()
            .with_node("n0", QNode::pinned(["X1"]))
            .with_node("n1", QNode::set());
        let err = MergeSession::new(qg, &MergeOptions::default()).unwrap_err();
        assert_eq!(err, MergeError::NoEssenceCandidate);
    }

    #[test]
    fn test_fold_summary_counts_skipped_results() {
        let mut session = MergeSession::new(query_graph(), &MergeOptions::default()).unwrap();
        let summary = session
            .fold(AgentResponse::new(
                "arax",
                vec![
                    AgentResult::new().bind_node("n0", "X1").bind_node("n1", "Y1"),
                    AgentResult::new().bind_node("n0", "X1"),
                ],
                KnowledgeGraph::new().with_node("Y1", KgNode::named("Bar")),
            ))
            .unwrap();

        assert_eq!(summary.results, 2);
        assert_eq!(summary.grouped, 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.absorbed.nodes_added, 1);
        assert_eq!(session.warnings().len(), 1);

        let outcome = session.finalize();
        assert_eq!(outcome.report.pre_merging.results, 2);
        assert_eq!(outcome.report.post_merging.results.count, 1);
    }

    #[test]
    fn test_self_merge_is_idempotent_in_size() {
        let original = AgentResponse::new(
            "arax",
            vec![
                AgentResult::new()
                    .bind_node("n0", "X1")
                    .bind_node("n1", "Y1")
                    .bind_edge("e0", "e1"),
                AgentResult::new()
                    .bind_node("n0", "X1")
                    .bind_node("n1", "Y2")
                    .bind_edge("e0", "e2"),
            ],
            KnowledgeGraph::new()
                .with_node("X1", KgNode::named("Foo"))
                .with_node("Y1", KgNode::named("Bar"))
                .with_node("Y2", KgNode::named("Baz")),
        );
        let mut duplicate = original.clone();
        duplicate.agent = AgentName::from("arax_copy");

        let outcome = MergeSession::merge_all(
            query_graph(),
            vec![original, duplicate],
            &MergeOptions::default(),
        )
        .unwrap();

        let results = &outcome.response.message.results;
        assert_eq!(results.len(), 2);
        for result in results {
            assert_eq!(result.nodes_for("n0").len(), 1);
            assert_eq!(result.nodes_for("n1").len(), 1);
            assert_eq!(result.edges_for("e0").len(), 2);
        }
        let essences: Vec<_> = results.iter().map(|r| r.essence.as_str()).collect();
        assert_eq!(essences, ["Bar", "Baz"]);
    }

    #[test]
    fn test_merge_properties_hold() {
        let qg = QueryGraph::new()
            .with_node("n0", QNode::free())
            .with_node("n1", QNode::free())
            .with_node("n2", QNode::set());
        let responses = vec![
            AgentResponse::new(
                "aragorn",
                vec![
                    AgentResult::new()
                        .bind_node("n0", "A1")
                        .bind_node("n1", "B1")
                        .bind_node("n2", "S1")
                        .bind_node("n2", "S2"),
                    AgentResult::new()
                        .bind_node("n0", "A2")
                        .bind_node("n1", "B1")
                        .bind_node("n1", "B3"),
                    AgentResult::new().bind_node("n1", "B1"),
                ],
                KnowledgeGraph::new()
                    .with_node("A1", KgNode::named("alpha"))
                    .with_node("B1", KgNode::named("beta")),
            ),
            AgentResponse::new(
                "bte",
                vec![
                    AgentResult::new()
                        .bind_node("n0", "A1")
                        .bind_node("n1", "B1")
                        .bind_node("n2", "S2")
                        .bind_node("n2", "S3"),
                    AgentResult::new().bind_node("n0", "A3").bind_node("n1", "B2"),
                ],
                KnowledgeGraph::new()
                    .with_node("A1", KgNode::named("alpha-bte"))
                    .with_node("A3", KgNode::default()),
            ),
        ];
        let total_results: usize = responses.iter().map(|r| r.results.len()).sum();

        let outcome = MergeSession::merge_all(qg, responses, &MergeOptions::default()).unwrap();
        let results = &outcome.response.message.results;
        let kg = &outcome.response.message.knowledge_graph;

        assert!(results.len() <= total_results);
        assert_eq!(results.len(), 3);

        for result in results {
            for bindings in result.node_bindings.values() {
                let distinct: HashSet<_> = bindings.iter().map(|b| b.id.as_str()).collect();
                assert_eq!(distinct.len(), bindings.len());
            }
            let is_name = kg.nodes.values().any(|n| n.name.as_deref() == Some(result.essence.as_str()));
            let is_bound_id = result
                .node_bindings
                .values()
                .flatten()
                .any(|b| b.id == result.essence);
            assert!(is_name || is_bound_id);
        }

        assert_eq!(results[0].nodes_for("n2").len(), 3);
        assert_eq!(results[0].essence, "alpha");
        assert_eq!(results[2].essence, "A3");
        assert_eq!(outcome.warnings.len(), 2);
    }
}
