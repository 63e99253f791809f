//! Repeated runs over one graph produce identical trees and counters.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim};

use super::types::MstFixture;

/// Runs each engine twice and compares everything except elapsed time.
pub(super) fn run_idempotence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();

    let (first, second) = (prim(&graph), prim(&graph));
    if first.edges() != second.edges() || first.counters() != second.counters() {
        return Err(TestCaseError::fail(format!(
            "prim diverged between runs ({})",
            fixture.describe()
        )));
    }

    let (first, second) = (kruskal(&graph), kruskal(&graph));
    if first.edges() != second.edges() || first.counters() != second.counters() {
        return Err(TestCaseError::fail(format!(
            "kruskal diverged between runs ({})",
            fixture.describe()
        )));
    }

    Ok(())
}
