//! Graph fixtures for the benchmarks.

use arbor_core::{Graph, generator};

use crate::{
    error::BenchSetupError,
    params::{GraphBenchParams, GraphFamily},
};

/// Builds the connected graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty graph and
/// [`BenchSetupError::Disconnected`] when the generator produced a graph
/// without a spanning tree.
///
/// # Examples
/// ```
/// use arbor_benches::{params::{GraphBenchParams, GraphFamily}, source::connected_graph};
///
/// let graph = connected_graph(&GraphBenchParams { family: GraphFamily::Sparse, vertex_count: 64 })?;
/// assert_eq!(graph.vertex_count(), 64);
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn connected_graph(params: &GraphBenchParams) -> Result<Graph, BenchSetupError> {
    if params.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    let graph = match params.family {
        GraphFamily::Complete => generator::complete_graph(params.vertex_count),
        GraphFamily::Sparse => generator::sparse_graph(params.vertex_count),
        GraphFamily::Dense { density } => generator::dense_graph(params.vertex_count, density),
    };
    if graph.is_connected() {
        Ok(graph)
    } else {
        Err(BenchSetupError::Disconnected {
            params: params.clone(),
        })
    }
}
