//! Benchmark parameter types.

use std::fmt;

/// Generator used to build a benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphFamily {
    /// Every vertex pair is joined.
    Complete,
    /// A spanning tree plus a few extra edges.
    Sparse,
    /// A fixed fraction of all vertex pairs.
    Dense {
        /// Fraction of pairs kept, in `[0, 1]`.
        density: f64,
    },
}

impl fmt::Display for GraphFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => f.write_str("complete"),
            Self::Sparse => f.write_str("sparse"),
            Self::Dense { density } => write!(f, "dense{density}"),
        }
    }
}

/// Parameters for one benchmark graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphBenchParams {
    /// Graph generator.
    pub family: GraphFamily,
    /// Number of vertices.
    pub vertex_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.family, self.vertex_count)
    }
}
