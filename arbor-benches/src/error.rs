//! Benchmark setup error type.

use crate::params::GraphBenchParams;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
    /// The generated graph has no spanning tree.
    #[error("generated graph `{params}` is disconnected")]
    Disconnected {
        /// Parameters that produced the graph.
        params: GraphBenchParams,
    },
}
