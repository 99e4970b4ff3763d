//! Benchmark parameter types.
//!
//! Each struct renders as the Criterion parameter label through `Display`.

use std::fmt;

use pathwise_core::TripleStrategy;

/// Parameters for a solver or path reconstruction benchmark run.
#[derive(Clone, Debug)]
pub struct SolverBenchParams {
    /// Number of vertices in the synthetic graph.
    pub vertex_count: usize,
    /// Probability that any ordered vertex pair is joined by an edge.
    pub edge_probability: f64,
}

impl fmt::Display for SolverBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.edge_probability)
    }
}

/// Parameters for a verification harness benchmark run.
#[derive(Clone, Debug)]
pub struct VerifyBenchParams {
    /// Number of vertices in the synthetic graph.
    pub vertex_count: usize,
    /// Triple selection strategy forced on the harness.
    pub strategy: TripleStrategy,
}

impl fmt::Display for VerifyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{:?}", self.vertex_count, self.strategy)
    }
}
