//! Minimum spanning tree (MST) engines.
//!
//! Two sequential, instrumented engines share one report shape so they can
//! be benchmarked side by side on the same [`Graph`]:
//!
//! - [`kruskal`] sorts the edges and filters cycles with a [`DisjointSet`].
//! - [`prim`] grows a tree from vertex `0` with a [`CountingMinHeap`] and lazy
//!   deletion of stale entries.
//!
//! Neither engine checks connectivity. On a disconnected graph Kruskal returns
//! a minimum spanning forest and Prim returns the tree of vertex `0`'s
//! component, both with fewer than `vertex_count - 1` edges.

mod kruskal;
mod prim;
mod queue;
mod union_find;

use std::{fmt, time::Duration};

use crate::graph::{Edge, Graph};

pub use self::{
    kruskal::{KruskalCounters, kruskal},
    prim::{PrimCounters, prim},
    queue::CountingMinHeap,
    union_find::DisjointSet,
};

/// Identifies one of the two MST engines.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Prim's vertex-growth algorithm.
    Prim,
    /// Kruskal's edge-sorting algorithm.
    Kruskal,
}

impl MstAlgorithm {
    /// Returns the stable lowercase label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a single MST engine run.
///
/// `C` carries the engine-specific counters ([`PrimCounters`] or
/// [`KruskalCounters`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MstReport<C> {
    edges: Vec<Edge>,
    total_cost: u64,
    elapsed: Duration,
    counters: C,
}

impl<C> MstReport<C> {
    pub(crate) fn new(edges: Vec<Edge>, elapsed: Duration, counters: C) -> Self {
        let total_cost = edges.iter().map(|edge| u64::from(edge.weight())).sum();
        Self {
            edges,
            total_cost,
            elapsed,
            counters,
        }
    }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> u64 { self.total_cost }

    /// Returns the wall-clock time spent computing the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the engine-specific counters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn counters(&self) -> &C { &self.counters }

    /// Returns `true` when the edges span every vertex of `graph`.
    #[must_use]
    pub fn spans(&self, graph: &Graph) -> bool {
        self.edges.len() == graph.vertex_count().saturating_sub(1)
    }
}

/// Report produced by [`prim`].
pub type PrimReport = MstReport<PrimCounters>;

/// Report produced by [`kruskal`].
pub type KruskalReport = MstReport<KruskalCounters>;

#[cfg(feature = "metrics")]
fn record_run(algorithm: MstAlgorithm, elapsed: Duration) {
    metrics::counter!("mst_runs_total", "algorithm" => algorithm.as_str()).increment(1);
    metrics::histogram!("mst_run_duration_seconds", "algorithm" => algorithm.as_str())
        .record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
const fn record_run(_algorithm: MstAlgorithm, _elapsed: Duration) {}


#[cfg(test)]
mod property;
