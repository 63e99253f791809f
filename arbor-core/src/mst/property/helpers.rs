//! Shared helpers for MST property tests.

use crate::graph::{Edge, Graph};

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `edges` contain no cycle over `vertex_count` vertices.
pub(super) fn is_forest(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    edges.iter().all(|edge| {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.destination());
        if left == right {
            return false;
        }
        parent[right] = left;
        true
    })
}

/// Returns the number of vertices reachable from vertex `0`.
pub(super) fn component_size_of_seed(graph: &Graph) -> usize {
    if graph.vertex_count() == 0 {
        return 0;
    }
    let mut seen = vec![false; graph.vertex_count()];
    let mut stack = vec![0_usize];
    let mut size = 0;
    while let Some(vertex) = stack.pop() {
        if std::mem::replace(&mut seen[vertex], true) {
            continue;
        }
        size += 1;
        stack.extend(graph.incident_edges(vertex).map(|edge| edge.opposite(vertex)));
    }
    size
}
