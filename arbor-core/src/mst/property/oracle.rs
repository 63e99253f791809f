//! Dense-matrix Prim oracle for MST property verification.
//!
//! Collapses parallel edges to their minimum weight, drops self-loops, and
//! runs the textbook `O(V^2)` Prim from every unreached vertex without a
//! heap or a union-find.

/// Result of the oracle computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of forest edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest of the given edge list.
pub(super) fn minimum_spanning_forest(
    vertex_count: usize,
    edges: &[(usize, usize, u32)],
) -> OracleForest {
    let mut matrix: Vec<Vec<Option<u32>>> = vec![vec![None; vertex_count]; vertex_count];
    for &(source, destination, weight) in edges {
        if source == destination || source >= vertex_count || destination >= vertex_count {
            continue;
        }
        for (row, column) in [(source, destination), (destination, source)] {
            let cell = &mut matrix[row][column];
            *cell = Some(cell.map_or(weight, |current| current.min(weight)));
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<u32>> = vec![None; vertex_count];
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        forest.component_count += 1;
        best[root] = Some(0);
        let mut is_root = true;

        loop {
            let next = (0..vertex_count)
                .filter(|&v| !in_tree[v])
                .filter_map(|v| best[v].map(|key| (key, v)))
                .min();
            let Some((key, vertex)) = next else {
                break;
            };
            in_tree[vertex] = true;
            if is_root {
                is_root = false;
            } else {
                forest.total_weight += u64::from(key);
                forest.edge_count += 1;
            }
            for (neighbour, weight) in matrix[vertex].iter().enumerate() {
                let Some(weight) = *weight else {
                    continue;
                };
                if !in_tree[neighbour] && best[neighbour].is_none_or(|key| weight < key) {
                    best[neighbour] = Some(weight);
                }
            }
        }
    }

    forest
}
