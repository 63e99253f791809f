//! Sequential Kruskal engine.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::graph::Graph;

use super::{KruskalReport, MstAlgorithm, MstReport, record_run, union_find::DisjointSet};

/// Counters reported by [`kruskal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KruskalCounters {
    /// Estimated sort comparisons plus one per examined edge.
    pub comparisons: u64,
    /// Successful set merges, one per accepted edge.
    pub unions: u64,
    /// Structural touches recorded by the union-find.
    pub set_operations: u64,
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are stably sorted by weight alone, so equal-weight edges are tried in
/// insertion order. The sort is charged `E * floor(log2 E)` comparisons as an
/// estimate rather than counted per swap. Each examined edge then costs one
/// comparison, and the scan stops as soon as `vertex_count - 1` edges are
/// accepted.
///
/// An empty graph short-circuits to an empty report with zeroed counters and
/// duration.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, kruskal};
///
/// let graph = Graph::from_edges(4, [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)])?;
/// let report = kruskal(&graph);
/// assert_eq!(report.total_cost(), 19);
/// assert_eq!(report.edges().len(), 3);
/// assert_eq!(report.counters().unions, 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> KruskalReport {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return KruskalReport::default();
    }

    let started = Instant::now();
    let target = vertex_count - 1;

    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|edge| edge.weight());
    let mut comparisons = estimated_sort_comparisons(sorted.len());

    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    let mut unions = 0_u64;

    for edge in sorted {
        comparisons += 1;
        if sets.union(edge.source(), edge.destination()) {
            accepted.push(edge);
            unions += 1;
        }
        if accepted.len() == target {
            break;
        }
    }

    let elapsed = started.elapsed();
    record_run(MstAlgorithm::Kruskal, elapsed);
    let report = MstReport::new(
        accepted,
        elapsed,
        KruskalCounters {
            comparisons,
            unions,
            set_operations: sets.operations(),
        },
    );
    debug!(
        cost = report.total_cost(),
        comparisons,
        unions,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "kruskal finished"
    );
    report
}

/// Returns `E * floor(log2 E)`, or `0` for an empty edge list.
pub(super) fn estimated_sort_comparisons(edge_count: usize) -> u64 {
    let Some(log) = edge_count.checked_ilog2() else {
        return 0;
    };
    (edge_count as u64).saturating_mul(u64::from(log))
}
