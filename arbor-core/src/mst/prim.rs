//! Sequential Prim engine with lazy deletion.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::graph::Graph;

use super::{MstAlgorithm, MstReport, PrimReport, queue::CountingMinHeap, record_run};

/// Counters reported by [`prim`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimCounters {
    /// Heap comparisons plus one per stale entry skipped.
    pub comparisons: u64,
    /// Primitive work units: initialisation, pops, key updates and loop
    /// iterations.
    pub operations: u64,
}

/// Computes a minimum spanning tree with Prim's algorithm, seeded at vertex
/// `0`.
///
/// Keys are never decreased in place. An improved key pushes a fresh heap
/// entry and the outdated one is skipped when it surfaces. Each vertex
/// remembers the exact edge that produced its current key, so among parallel
/// edges the lightest one is the edge reported.
///
/// On a disconnected graph only vertex `0`'s component is spanned.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, prim};
///
/// let graph = Graph::from_edges(4, [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)])?;
/// let report = prim(&graph);
/// assert_eq!(report.total_cost(), 19);
/// assert_eq!(report.edges().len(), 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> PrimReport {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return PrimReport::default();
    }

    let started = Instant::now();
    let mut keys: Vec<Option<u32>> = vec![None; vertex_count];
    let mut parent_edge: Vec<Option<usize>> = vec![None; vertex_count];
    let mut in_tree = vec![false; vertex_count];
    let mut operations = (vertex_count as u64).saturating_mul(2);
    let mut stale = 0_u64;

    let mut heap = CountingMinHeap::new();
    if let Some(seed) = keys.first_mut() {
        *seed = Some(0);
    }
    heap.push(0_u32, 0_usize);
    operations += 1;

    let mut selected = Vec::with_capacity(vertex_count - 1);
    while let Some((_, vertex)) = heap.pop() {
        operations += 1;
        let Some(done) = in_tree.get_mut(vertex) else {
            continue;
        };
        if *done {
            stale += 1;
            continue;
        }
        *done = true;

        if let Some(edge) = parent_edge
            .get(vertex)
            .copied()
            .flatten()
            .and_then(|index| graph.edge(index))
        {
            selected.push(*edge);
        }

        for &index in graph.incident_edge_indices(vertex) {
            let Some(edge) = graph.edge(index) else {
                continue;
            };
            let neighbour = edge.opposite(vertex);
            if in_tree.get(neighbour).copied().unwrap_or(true) {
                continue;
            }
            let weight = edge.weight();
            let Some(key) = keys.get_mut(neighbour) else {
                continue;
            };
            if key.is_some_and(|current| weight >= current) {
                continue;
            }
            *key = Some(weight);
            if let Some(slot) = parent_edge.get_mut(neighbour) {
                *slot = Some(index);
            }
            heap.push(weight, neighbour);
            operations += 2;
        }

        operations += 1;
    }

    let elapsed = started.elapsed();
    record_run(MstAlgorithm::Prim, elapsed);
    let comparisons = heap.comparisons() + stale;
    let report = MstReport::new(
        selected,
        elapsed,
        PrimCounters {
            comparisons,
            operations,
        },
    );
    debug!(
        cost = report.total_cost(),
        comparisons,
        operations,
        stale,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "prim finished"
    );
    report
}
