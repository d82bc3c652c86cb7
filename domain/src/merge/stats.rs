//! Before/after merge statistics

use serde::{Deserialize, Serialize};

/// Counts of results, KG nodes and KG edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeTotals {
    pub results: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// A post-merge count with its share of the pre-merge count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retained {
    pub count: usize,
    /// Rounded percentage of the pre-merge count; 0 when that count is 0
    pub pct: u64,
}

impl Retained {
    pub fn new(post: usize, pre: usize) -> Self {
        Self {
            count: post,
            pct: retained_pct(post, pre),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMergeTotals {
    pub results: Retained,
    pub nodes: Retained,
    pub edges: Retained,
}

/// Merge fidelity report, written as `report.json`
///
/// ```
/// use aramerge_domain::merge::{MergeReport, MergeTotals};
///
/// let pre = MergeTotals { results: 2, nodes: 4, edges: 0 };
/// let post = MergeTotals { results: 1, nodes: 2, edges: 0 };
/// let report = MergeReport::new(pre, post);
/// assert_eq!(report.post_merging.results.pct, 50);
/// assert_eq!(report.post_merging.edges.pct, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub pre_merging: MergeTotals,
    pub post_merging: PostMergeTotals,
}

impl MergeReport {
    pub fn new(pre: MergeTotals, post: MergeTotals) -> Self {
        Self {
            pre_merging: pre,
            post_merging: PostMergeTotals {
                results: Retained::new(post.results, pre.results),
                nodes: Retained::new(post.nodes, pre.nodes),
                edges: Retained::new(post.edges, pre.edges),
            },
        }
    }
}

/// `round(post / pre * 100)`, defined as 0 when `pre` is 0
///
/// Halves round away from zero.
pub fn retained_pct(post: usize, pre: usize) -> u64 {
    if pre == 0 {
        return 0;
    }
    (post as f64 / pre as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_retained_pct() {
        assert_eq!(retained_pct(1, 2), 50);
        assert_eq!(retained_pct(2, 3), 67);
        assert_eq!(retained_pct(1, 3), 33);
        assert_eq!(retained_pct(1, 8), 13);
        assert_eq!(retained_pct(5, 5), 100);
    }

    #[test]
    fn test_zero_pre_merge_total_is_zero_pct() {
        assert_eq!(retained_pct(0, 0), 0);
        assert_eq!(retained_pct(3, 0), 0);
    }

    #[test]
    fn test_report_document_shape() {
        let report = MergeReport::new(
            MergeTotals {
                results: 2,
                nodes: 4,
                edges: 2,
            },
            MergeTotals {
                results: 1,
                nodes: 2,
                edges: 1,
            },
        );

        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({
                "pre_merging": {"results": 2, "nodes": 4, "edges": 2},
                "post_merging": {
                    "results": {"count": 1, "pct": 50},
                    "nodes": {"count": 2, "pct": 50},
                    "edges": {"count": 1, "pct": 50}
                }
            })
        );
    }
}
