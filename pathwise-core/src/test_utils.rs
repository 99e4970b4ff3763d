//! Shared test utilities for `pathwise-core`.

use pathwise_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    graph::{DiGraph, EdgeMutable, VertexId, VertexMutable},
    solver::{ShortestPaths, SolveOutcome, Solver},
    weight::WeightTable,
};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Graph plus explicit weights built from `(source, target, weight)` index
/// triples over vertices keyed `0..vertex_count`.
pub(crate) struct WeightedGraph {
    pub(crate) graph: DiGraph<usize>,
    pub(crate) vertices: Vec<VertexId>,
    pub(crate) weights: WeightTable,
}

impl WeightedGraph {
    pub(crate) fn new(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = DiGraph::with_capacity(vertex_count, edges.len());
        let vertices: Vec<VertexId> = (0..vertex_count)
            .map(|key| graph.add_vertex(key).expect("keys are distinct"))
            .collect();
        let mut weights = WeightTable::new(0.0);
        for &(source, target, weight) in edges {
            let edge = graph
                .add_edge(vertices[source], vertices[target])
                .expect("endpoints are live");
            weights.insert(edge, weight);
        }
        Self {
            graph,
            vertices,
            weights,
        }
    }

    pub(crate) fn solve(&self) -> SolveOutcome {
        Solver::default()
            .solve(&self.graph, &self.weights)
            .expect("fixture weights are finite")
    }

    pub(crate) fn shortest_paths(&self) -> ShortestPaths {
        self.solve()
            .into_shortest_paths()
            .expect("fixture has no negative cycle")
    }
}
