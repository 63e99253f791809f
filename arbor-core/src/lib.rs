//! Arbor core library: minimum spanning trees with Prim and Kruskal, and the
//! benchmark that compares them.
//!
//! Build a [`Graph`], run [`prim`] or [`kruskal`] directly, or hand a
//! [`GraphSource`] to a [`Benchmark`] to compare both engines over a whole
//! dataset.
//!
//! ```
//! use arbor_core::{BenchmarkBuilder, GraphCollection, NamedGraph, generator};
//!
//! let source: GraphCollection = [
//!     NamedGraph::new("complete", generator::complete_graph(12)),
//!     NamedGraph::new("sparse", generator::sparse_graph(30)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = BenchmarkBuilder::new().build().run(&source);
//! let summary = report.summary().expect("both graphs are connected");
//! assert_eq!(summary.graphs_analysed, 2);
//! assert_eq!(summary.costs_agreeing, 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod benchmark;
mod datasource;
mod error;
pub mod generator;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    benchmark::{
        Benchmark, BenchmarkBuilder, BenchmarkReport, BenchmarkSummary, GraphComparison,
        GraphOutcome, SkipReason, SkippedGraph, TimeUnit, Winner,
    },
    datasource::{GraphCollection, GraphSource, NamedGraph},
    error::{GraphError, GraphErrorCode, GraphSourceError, GraphSourceErrorCode},
    graph::{Edge, Graph},
    mst::{
        CountingMinHeap, DisjointSet, KruskalCounters, KruskalReport, MstAlgorithm, MstReport,
        PrimCounters, PrimReport, kruskal, prim,
    },
};
