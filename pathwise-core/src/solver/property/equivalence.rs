//! Property 1: equivalence with the Bellman-Ford oracle.
//!
//! The solver must flag a negative cycle exactly when the oracle finds one,
//! and otherwise produce the oracle's distance for every ordered pair.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::solver::SolveOutcome;

use super::oracle::bellman_ford_all_pairs;
use super::types::SolverFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &SolverFixture) -> TestCaseResult {
    let weighted = fixture.build();
    let outcome = weighted.solve();
    let oracle = bellman_ford_all_pairs(fixture.vertex_count, &fixture.edges);

    let paths = match (outcome, oracle.negative_cycle) {
        (SolveOutcome::Converged(paths), false) => paths,
        (SolveOutcome::NegativeCycle(cycle), true) => {
            if cycle.vertices().is_empty() {
                return Err(TestCaseError::fail(format!(
                    "negative cycle reported without affected vertices ({})",
                    fixture.describe()
                )));
            }
            return Ok(());
        }
        (outcome, expected) => {
            return Err(TestCaseError::fail(format!(
                "negative-cycle verdict mismatch: solver={}, oracle={expected} ({})",
                outcome.is_negative_cycle(),
                fixture.describe()
            )));
        }
    };

    for (s, row) in oracle.distances.iter().enumerate() {
        for (t, &expected) in row.iter().enumerate() {
            let actual = paths
                .distance(weighted.vertices[s], weighted.vertices[t])
                .map_err(|err| TestCaseError::fail(format!("distance({s}, {t}) failed: {err}")))?;
            if actual != expected {
                return Err(TestCaseError::fail(format!(
                    "distance mismatch for {s} -> {t}: solver={actual}, oracle={expected} ({})",
                    fixture.describe()
                )));
            }
        }
    }
    Ok(())
}
