//! Type definitions for solver property-based tests.

use test_strategy::Arbitrary;

use crate::test_utils::WeightedGraph;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Roughly `1.5n` random edges with positive weights.
    #[weight(3)]
    Sparse,
    /// Most ordered pairs connected, positive weights.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Repeated edges between the same pairs plus self-loops.
    #[weight(2)]
    ParallelEdges,
    /// Forward-only edges with negative weights; acyclic by construction.
    #[weight(2)]
    NegativeDag,
    /// Arbitrary directions and signed weights; may hold negative cycles.
    #[weight(3)]
    Mixed,
}

/// Generated input for a solver property.
///
/// Weights are small integers stored as `f64`, so every sum the solver and
/// the oracle form is exact.
#[derive(Clone, Debug)]
pub(super) struct SolverFixture {
    /// Number of vertices, keyed `0..vertex_count`.
    pub vertex_count: usize,
    /// `(source, target, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Shape used during generation.
    pub topology: Topology,
}

impl SolverFixture {
    /// Builds the graph and weight table described by the fixture.
    pub(super) fn build(&self) -> WeightedGraph {
        WeightedGraph::new(self.vertex_count, &self.edges)
    }

    /// Short context string appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "topology={:?}, vertices={}, edges={}",
            self.topology,
            self.vertex_count,
            self.edges.len()
        )
    }
}

/// Configuration for the concurrency property.
pub(super) struct ConcurrencyConfig {
    /// Number of threads solving the same graph.
    pub threads: usize,
}

impl ConcurrencyConfig {
    /// Reads `PATHWISE_PBT_SOLVER_THREADS`, defaulting to 4.
    pub(super) fn load() -> Self {
        let threads = std::env::var("PATHWISE_PBT_SOLVER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&threads| threads > 1)
            .unwrap_or(4);
        Self { threads }
    }
}
