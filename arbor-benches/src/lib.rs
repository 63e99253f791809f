//! Benchmark support crate for arbor.
//!
//! Provides graph fixtures and parameter types used by the Criterion
//! benchmarks for Prim, Kruskal and the full comparison run.

pub mod error;
pub mod params;
pub mod source;
