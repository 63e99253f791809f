//! Reproducible synthetic graphs for benchmarking.
//!
//! Every generator seeds a [`SmallRng`] with the vertex count, so the same
//! size always yields the same graph.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{datasource::NamedGraph, graph::Graph};

const MAX_WEIGHT: u32 = 100;
const MAX_TREE_WEIGHT: u32 = 50;

const SMALL_DENSITY: f64 = 0.6;
const MEDIUM_SIZES: [usize; 10] = [10, 15, 20, 25, 30, 50, 75, 100, 150, 200];
const MEDIUM_DENSITIES: [f64; 3] = [0.3, 0.45, 0.6];
const LARGE_SIZES: [usize; 2] = [250, 300];
const LARGE_DENSITY: f64 = 0.4;

fn seeded(vertex_count: usize) -> SmallRng {
    SmallRng::seed_from_u64(vertex_count as u64)
}

/// Builds a graph from endpoints already known to be in range.
fn assemble(vertex_count: usize, edges: Vec<(usize, usize, u32)>) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for (source, destination, weight) in edges {
        if let Err(err) = graph.add_edge(source, destination, weight) {
            debug!(%err, "dropping generated edge");
        }
    }
    graph
}

/// Generates the complete graph on `vertex_count` vertices with weights in
/// `1..=100`.
///
/// # Examples
/// ```
/// use arbor_core::generator::complete_graph;
///
/// let graph = complete_graph(6);
/// assert_eq!(graph.edge_count(), 15);
/// assert!(graph.is_connected());
/// assert_eq!(graph, complete_graph(6));
/// ```
#[must_use]
pub fn complete_graph(vertex_count: usize) -> Graph {
    let mut rng = seeded(vertex_count);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for destination in (source + 1)..vertex_count {
            edges.push((source, destination, rng.gen_range(1..=MAX_WEIGHT)));
        }
    }
    assemble(vertex_count, edges)
}

/// Generates a connected sparse graph: a random spanning tree (weights
/// `1..=50`) plus up to `vertex_count / 2` random extra edges (weights
/// `1..=100`). Extra draws that land on a self-loop are dropped.
///
/// # Examples
/// ```
/// use arbor_core::generator::sparse_graph;
///
/// let graph = sparse_graph(40);
/// assert!(graph.is_connected());
/// assert!(graph.edge_count() >= 39);
/// assert!(graph.edge_count() <= 39 + 20);
/// ```
#[must_use]
pub fn sparse_graph(vertex_count: usize) -> Graph {
    let mut rng = seeded(vertex_count);
    let mut edges = Vec::new();
    for vertex in 1..vertex_count {
        let weight = rng.gen_range(1..=MAX_TREE_WEIGHT);
        let parent = rng.gen_range(0..vertex);
        edges.push((parent, vertex, weight));
    }
    if vertex_count > 0 {
        for _ in 0..vertex_count / 2 {
            let source = rng.gen_range(0..vertex_count);
            let destination = rng.gen_range(0..vertex_count);
            if source != destination {
                edges.push((source, destination, rng.gen_range(1..=MAX_WEIGHT)));
            }
        }
    }
    assemble(vertex_count, edges)
}

/// Generates `floor(n (n - 1) / 2 * density)` distinct random vertex pairs
/// with weights in `1..=100`.
///
/// `density` is clamped to `[0, 1]`; a NaN density yields no edges. The
/// result is not guaranteed to be connected.
///
/// # Examples
/// ```
/// use arbor_core::generator::dense_graph;
///
/// let graph = dense_graph(10, 0.5);
/// assert_eq!(graph.edge_count(), 22);
/// assert_eq!(dense_graph(10, 3.0).edge_count(), 45);
/// ```
#[must_use]
pub fn dense_graph(vertex_count: usize, density: f64) -> Graph {
    let mut rng = seeded(vertex_count);
    let mut pairs: Vec<(usize, usize)> = (0..vertex_count)
        .flat_map(|source| ((source + 1)..vertex_count).map(move |destination| (source, destination)))
        .collect();
    let target = target_edge_count(pairs.len(), density);
    let (chosen, _) = pairs.partial_shuffle(&mut rng, target);
    let edges = chosen
        .iter()
        .map(|&(source, destination)| (source, destination, rng.gen_range(1..=MAX_WEIGHT)))
        .collect();
    assemble(vertex_count, edges)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "density is clamped to [0, 1] before scaling the pair count"
)]
fn target_edge_count(max_edges: usize, density: f64) -> usize {
    if density.is_nan() {
        return 0;
    }
    let scaled = (max_edges as f64 * density.clamp(0.0, 1.0)).floor() as usize;
    scaled.min(max_edges)
}

/// Generates the standard 17-graph benchmark suite.
///
/// - `small_graph_1..=5`: 4 to 8 vertices at density 0.6.
/// - `medium_graph_1..=10`: 10 to 200 vertices, density cycling through
///   0.3, 0.45 and 0.6.
/// - `large_graph_1..=2`: 250 and 300 vertices at density 0.4.
///
/// Dense sampling can leave the smallest graphs disconnected; the benchmark
/// skips those.
#[must_use]
#[instrument(name = "generator.standard_suite", level = "debug")]
pub fn standard_suite() -> Vec<NamedGraph> {
    let small = (0..5_usize).map(|index| {
        NamedGraph::new(
            format!("small_graph_{}", index + 1),
            dense_graph(4 + index, SMALL_DENSITY),
        )
    });
    let medium = MEDIUM_SIZES
        .iter()
        .zip(MEDIUM_DENSITIES.iter().cycle())
        .enumerate()
        .map(|(index, (&size, &density))| {
            NamedGraph::new(format!("medium_graph_{}", index + 1), dense_graph(size, density))
        });
    let large = LARGE_SIZES.iter().enumerate().map(|(index, &size)| {
        NamedGraph::new(format!("large_graph_{}", index + 1), dense_graph(size, LARGE_DENSITY))
    });
    small.chain(medium).chain(large).collect()
}
