//! Structural invariants of engine output.
//!
//! - Every selected edge exists in the input graph.
//! - No selected edge is a self-loop.
//! - Selected edges are acyclic.
//! - Kruskal selects `V - C` edges for `C` components and counts one union
//!   per edge.
//! - Prim selects one edge per vertex of vertex `0`'s component except the
//!   seed.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, Graph};
use crate::mst::{kruskal, prim};

use super::helpers::{component_size_of_seed, is_forest};
use super::oracle::minimum_spanning_forest;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();

    let kruskal_report = kruskal(&graph);
    validate_edges("kruskal", fixture, &graph, kruskal_report.edges())?;
    let components = minimum_spanning_forest(fixture.vertex_count, &fixture.edges).component_count;
    let expected = fixture.vertex_count - components;
    if kruskal_report.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "kruskal selected {} edges, expected V - C = {expected} ({})",
            kruskal_report.edges().len(),
            fixture.describe(),
        )));
    }
    if kruskal_report.counters().unions != expected as u64 {
        return Err(TestCaseError::fail(format!(
            "kruskal counted {} unions for {expected} edges ({})",
            kruskal_report.counters().unions,
            fixture.describe(),
        )));
    }

    let prim_report = prim(&graph);
    validate_edges("prim", fixture, &graph, prim_report.edges())?;
    let expected = component_size_of_seed(&graph).saturating_sub(1);
    if prim_report.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "prim selected {} edges, expected {expected} ({})",
            prim_report.edges().len(),
            fixture.describe(),
        )));
    }

    Ok(())
}

fn validate_edges(
    engine: &str,
    fixture: &MstFixture,
    graph: &Graph,
    edges: &[Edge],
) -> TestCaseResult {
    for (position, edge) in edges.iter().enumerate() {
        if edge.source() == edge.destination() {
            return Err(TestCaseError::fail(format!(
                "{engine} edge {position} {edge} is a self-loop ({})",
                fixture.describe(),
            )));
        }
        if !graph.edges().contains(edge) {
            return Err(TestCaseError::fail(format!(
                "{engine} edge {position} {edge} is not in the input ({})",
                fixture.describe(),
            )));
        }
    }
    if !is_forest(fixture.vertex_count, edges) {
        return Err(TestCaseError::fail(format!(
            "{engine} output contains a cycle ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
