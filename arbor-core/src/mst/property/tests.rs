//! Property runners and seeded regression cases for the MST engines.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;

use super::equivalence::run_oracle_equivalence_property;
use super::idempotence::run_idempotence_property;
use super::oracle::{OracleForest, minimum_spanning_forest};
use super::strategies::{generate_fixture, mst_fixture_strategy};
use super::structural::run_structural_invariants_property;
use super::types::GraphShape;

macro_rules! seeded_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::wide_42(GraphShape::WideWeights, 42)]
        #[case::wide_999(GraphShape::WideWeights, 999)]
        #[case::identical_42(GraphShape::ManyIdentical, 42)]
        #[case::identical_7777(GraphShape::ManyIdentical, 7777)]
        #[case::sparse_42(GraphShape::Sparse, 42)]
        #[case::dense_999(GraphShape::Dense, 999)]
        #[case::disconnected_42(GraphShape::Disconnected, 42)]
        #[case::disconnected_999(GraphShape::Disconnected, 999)]
        #[case::multigraph_42(GraphShape::Multigraph, 42)]
        fn $test_name(#[case] shape: GraphShape, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(shape, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn mst_oracle_equivalence(fixture in mst_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn mst_structural_invariants(fixture in mst_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }

    #[test]
    fn mst_idempotence(fixture in mst_fixture_strategy()) {
        run_idempotence_property(&fixture)?;
    }
}

seeded_property_test!(
    oracle_equivalence_seeded,
    run_oracle_equivalence_property,
    "oracle equivalence must hold"
);

seeded_property_test!(
    structural_invariants_seeded,
    run_structural_invariants_property,
    "structural invariants must hold"
);

seeded_property_test!(
    idempotence_seeded,
    run_idempotence_property,
    "repeated runs must agree"
);

#[rstest::rstest]
#[case::empty(0, vec![], 0, 0, 0)]
#[case::single_vertex(1, vec![], 0, 0, 1)]
#[case::triangle(3, vec![(0, 1, 1), (1, 2, 2), (0, 2, 3)], 3, 2, 1)]
#[case::parallel_minimum(2, vec![(0, 1, 9), (1, 0, 4)], 4, 1, 1)]
#[case::self_loop_ignored(2, vec![(0, 0, 1), (0, 1, 2)], 2, 1, 1)]
#[case::isolated_vertex(5, vec![(0, 1, 1), (2, 3, 2)], 3, 2, 3)]
fn oracle_reference_cases(
    #[case] vertex_count: usize,
    #[case] edges: Vec<(usize, usize, u32)>,
    #[case] total_weight: u64,
    #[case] edge_count: usize,
    #[case] component_count: usize,
) {
    assert_eq!(
        minimum_spanning_forest(vertex_count, &edges),
        OracleForest {
            total_weight,
            edge_count,
            component_count,
        }
    );
}

#[test]
fn disconnected_fixtures_have_several_components() {
    for seed in [1_u64, 2, 3, 4, 5] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = generate_fixture(GraphShape::Disconnected, &mut rng);
        let forest = minimum_spanning_forest(fixture.vertex_count, &fixture.edges);
        assert!(forest.component_count >= 2, "{}", fixture.describe());
    }
}
