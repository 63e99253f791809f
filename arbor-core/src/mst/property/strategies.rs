//! Graph generation strategies for MST property tests.
//!
//! Each strategy draws a shape and a seed from proptest, then builds the edge
//! list with a seeded `SmallRng` so shrinking stays cheap and failures replay
//! from the seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphShape, MstFixture};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every [`GraphShape`], biased towards shapes
/// with many equal weights.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match shape {
        GraphShape::WideWeights => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.6);
            let edges = random_pairs(0, vertex_count, probability, rng, |r| r.gen_range(1..=1_000));
            (vertex_count, edges)
        }
        GraphShape::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3_usize))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.3..=0.7);
            let edges = random_pairs(0, vertex_count, probability, rng, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (vertex_count, edges)
        }
        GraphShape::Sparse => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let mut edges = random_tree(vertex_count, rng);
            for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
                let source = rng.gen_range(0..vertex_count);
                let destination = rng.gen_range(0..vertex_count);
                if source != destination {
                    edges.push((source, destination, rng.gen_range(1..=100)));
                }
            }
            (vertex_count, edges)
        }
        GraphShape::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            let edges = random_pairs(0, vertex_count, probability, rng, |r| r.gen_range(1..=100));
            (vertex_count, edges)
        }
        GraphShape::Disconnected => {
            let mut edges = Vec::new();
            let mut offset = 0;
            for _ in 0..rng.gen_range(2..=5) {
                let size = rng.gen_range(1..=10);
                let probability = rng.gen_range(0.3..=0.8);
                edges.extend(random_pairs(offset, size, probability, rng, |r| {
                    r.gen_range(1..=100)
                }));
                offset += size;
            }
            (offset, edges)
        }
        GraphShape::Multigraph => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let mut edges = random_tree(vertex_count, rng);
            for index in 0..edges.len() {
                if rng.gen_bool(0.5) {
                    let (source, destination, _) = edges[index];
                    edges.push((destination, source, rng.gen_range(1..=100)));
                }
            }
            for _ in 0..rng.gen_range(0..=vertex_count / 4) {
                let vertex = rng.gen_range(0..vertex_count);
                edges.push((vertex, vertex, rng.gen_range(1..=100)));
            }
            (vertex_count, edges)
        }
    };

    MstFixture {
        vertex_count,
        edges,
        shape,
    }
}

/// Adds each pair among `offset..offset + size` with the given probability.
fn random_pairs(
    offset: usize,
    size: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<(usize, usize, u32)> {
    let mut edges = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            if rng.gen_bool(probability) {
                edges.push((offset + i, offset + j, weight(rng)));
            }
        }
    }
    edges
}

/// Builds a random spanning tree: vertex `i` hangs off a random earlier
/// vertex.
fn random_tree(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize, u32)> {
    (1..vertex_count)
        .map(|vertex| (rng.gen_range(0..vertex), vertex, rng.gen_range(1..=100)))
        .collect()
}
