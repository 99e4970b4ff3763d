//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the bench wrappers turn
//! the final error into a panic message.

use pathwise_core::{ConfigError, GraphError, NegativeCycleDetected, SolveError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The solver rejected the synthetic graph.
    #[error("solve failed: {0}")]
    Solve(#[from] SolveError),
    /// The synthetic graph unexpectedly contained a negative-weight cycle.
    #[error("fixture is not solvable: {0}")]
    NegativeCycle(#[from] NegativeCycleDetected),
    /// Verification parameters were rejected.
    #[error("verification config rejected: {0}")]
    Config(#[from] ConfigError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The edge probability fell outside `(0, 1]`.
    #[error("edge probability must lie in (0, 1], got {got}")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
}
