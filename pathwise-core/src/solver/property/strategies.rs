//! Graph generators for solver property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so proptest only has
//! to shrink `(topology, seed)` pairs, and rstest cases can replay a fixed
//! seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{SolverFixture, Topology};

/// Largest vertex count for sparse and mixed graphs.
const MAX_VERTICES: usize = 16;
/// Largest vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 10;

/// Generates fixtures across every topology.
pub(super) fn solver_fixture_strategy() -> impl Strategy<Value = SolverFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> SolverFixture {
    let (vertex_count, edges) = match topology {
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => generate_dense(rng),
        Topology::Disconnected => generate_disconnected(rng),
        Topology::ParallelEdges => generate_parallel(rng),
        Topology::NegativeDag => generate_negative_dag(rng),
        Topology::Mixed => generate_mixed(rng),
    };
    SolverFixture {
        vertex_count,
        edges,
        topology,
    }
}

type Generated = (usize, Vec<(usize, usize, f64)>);

fn integer_weight(rng: &mut SmallRng, low: i32, high: i32) -> f64 {
    f64::from(rng.gen_range(low..=high))
}

fn random_edges(
    rng: &mut SmallRng,
    vertex_count: usize,
    edge_count: usize,
    weights: (i32, i32),
) -> Vec<(usize, usize, f64)> {
    if vertex_count == 0 {
        return Vec::new();
    }
    (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            (source, target, integer_weight(rng, weights.0, weights.1))
        })
        .collect()
}

fn generate_sparse(rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(0..=MAX_VERTICES);
    let edge_count = vertex_count + vertex_count / 2;
    (vertex_count, random_edges(rng, vertex_count, edge_count, (1, 20)))
}

fn generate_dense(rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(2..=DENSE_MAX_VERTICES);
    let probability: f64 = rng.gen_range(0.6..=0.95);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in 0..vertex_count {
            if source != target && rng.gen_bool(probability) {
                edges.push((source, target, integer_weight(rng, 1, 50)));
            }
        }
    }
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> Generated {
    let components = rng.gen_range(2..=3_usize);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..components {
        let size = rng.gen_range(1..=5_usize);
        for (source, target, weight) in random_edges(rng, size, size * 2, (0, 9)) {
            edges.push((offset + source, offset + target, weight));
        }
        offset += size;
    }
    (offset, edges)
}

fn generate_parallel(rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=8_usize);
    let mut edges = random_edges(rng, vertex_count, vertex_count * 2, (0, 12));
    let copies: Vec<_> = edges
        .iter()
        .map(|&(source, target, _)| (source, target, integer_weight(rng, 0, 12)))
        .collect();
    edges.extend(copies);
    for vertex in 0..vertex_count {
        if rng.gen_bool(0.3) {
            edges.push((vertex, vertex, integer_weight(rng, 0, 5)));
        }
    }
    (vertex_count, edges)
}

fn generate_negative_dag(rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let probability: f64 = rng.gen_range(0.2..=0.5);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((source, target, integer_weight(rng, -10, 10)));
            }
        }
    }
    (vertex_count, edges)
}

fn generate_mixed(rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let edge_count = rng.gen_range(0..=vertex_count * 3);
    (vertex_count, random_edges(rng, vertex_count, edge_count, (-3, 10)))
}
