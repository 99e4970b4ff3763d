//! Property 3: independent solves agree across threads.
//!
//! The graph is borrowed immutably by every thread at once; each solve must
//! reproduce the single-threaded baseline bit for bit.

use std::thread;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::solver::{SolveOutcome, Solver};

use super::types::{ConcurrencyConfig, SolverFixture};

/// Runs the concurrency property for the given fixture.
pub(super) fn run_concurrency_property(fixture: &SolverFixture) -> TestCaseResult {
    let config = ConcurrencyConfig::load();
    let weighted = fixture.build();
    let solver = Solver::default();
    let baseline = weighted.solve();

    let results: Vec<SolveOutcome> = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.threads)
            .map(|_| scope.spawn(|| solver.solve(&weighted.graph, &weighted.weights)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("solver thread panicked"))
            .collect::<Result<_, _>>()
    })
    .map_err(|err| TestCaseError::fail(format!("threaded solve failed: {err}")))?;

    let bits = |outcome: &SolveOutcome| -> Vec<u64> {
        outcome
            .distances()
            .as_slice()
            .iter()
            .map(|value| value.to_bits())
            .collect()
    };
    let expected = bits(&baseline);
    for (thread_index, outcome) in results.iter().enumerate() {
        if outcome.is_negative_cycle() != baseline.is_negative_cycle() || bits(outcome) != expected {
            return Err(TestCaseError::fail(format!(
                "thread {thread_index} diverged from the baseline ({})",
                fixture.describe()
            )));
        }
        if let (Some(actual), Some(reference)) = (outcome.converged(), baseline.converged())
            && actual.predecessors() != reference.predecessors()
        {
            return Err(TestCaseError::fail(format!(
                "thread {thread_index} produced different predecessors ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}
