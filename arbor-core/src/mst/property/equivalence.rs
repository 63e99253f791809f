//! Engines agree with the oracle on total weight and edge count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim};

use super::oracle::minimum_spanning_forest;
use super::types::MstFixture;

/// Compares both engines against the dense-matrix oracle.
///
/// Kruskal returns a minimum spanning forest, so it must match the oracle on
/// every input. Prim only spans vertex `0`'s component, so it is compared on
/// connected inputs.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = minimum_spanning_forest(fixture.vertex_count, &fixture.edges);

    let kruskal_report = kruskal(&graph);
    if kruskal_report.total_cost() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal cost {} != oracle {} ({})",
            kruskal_report.total_cost(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }
    if kruskal_report.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal edge count {} != oracle {} ({})",
            kruskal_report.edges().len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    if oracle.component_count <= 1 {
        let prim_report = prim(&graph);
        if prim_report.total_cost() != oracle.total_weight {
            return Err(TestCaseError::fail(format!(
                "prim cost {} != oracle {} ({})",
                prim_report.total_cost(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }
        if !prim_report.spans(&graph) {
            return Err(TestCaseError::fail(format!(
                "prim returned {} edges on a connected graph ({})",
                prim_report.edges().len(),
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
