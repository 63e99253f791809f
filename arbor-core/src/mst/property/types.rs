//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::graph::Graph;

/// Topology and weight pattern of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Random pairs with weights drawn from a wide range.
    #[weight(2)]
    WideWeights,
    /// Edges share a pool of one to three weights, stressing tie handling.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning tree plus roughly `n / 2` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    #[weight(2)]
    Dense,
    /// Two to five components with no cross-component edges.
    #[weight(2)]
    Disconnected,
    /// Parallel edges and self-loops over a connected backbone.
    #[weight(2)]
    Multigraph,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// `(source, destination, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, u32)>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl MstFixture {
    /// Builds the graph described by this fixture.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
            .expect("generated endpoints stay in range")
    }

    /// Short context string appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, vertices={}, edges={}",
            self.shape,
            self.vertex_count,
            self.edges.len()
        )
    }
}
