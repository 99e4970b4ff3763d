//! Property 4: vertex removal leaves no trace.
//!
//! Removing vertices must drop exactly the edges incident to them, and a
//! solve of the mutated graph must match the oracle over the surviving edges.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    error::PathError,
    graph::{GraphView, VertexMutable},
};

use super::oracle::bellman_ford_all_pairs;
use super::types::SolverFixture;

/// Removes every vertex whose index is in `removed`, then checks the store
/// and the solver against the filtered fixture.
pub(super) fn run_removal_property(fixture: &SolverFixture, removed: &[usize]) -> TestCaseResult {
    let mut weighted = fixture.build();
    let removed: HashSet<usize> = removed
        .iter()
        .map(|index| index % fixture.vertex_count.max(1))
        .filter(|&index| index < fixture.vertex_count)
        .collect();
    for &index in &removed {
        weighted
            .graph
            .remove_vertex(weighted.vertices[index])
            .map_err(|err| TestCaseError::fail(format!("remove_vertex({index}) failed: {err}")))?;
    }

    let survivors: Vec<usize> = (0..fixture.vertex_count)
        .filter(|index| !removed.contains(index))
        .collect();
    let mut renumber = vec![usize::MAX; fixture.vertex_count];
    for (position, &index) in survivors.iter().enumerate() {
        renumber[index] = position;
    }
    let kept: Vec<(usize, usize, f64)> = fixture
        .edges
        .iter()
        .filter(|(source, target, _)| !removed.contains(source) && !removed.contains(target))
        .map(|&(source, target, weight)| (renumber[source], renumber[target], weight))
        .collect();

    if weighted.graph.edge_count() != kept.len() {
        return Err(TestCaseError::fail(format!(
            "{} edges survive removal, expected {} ({})",
            weighted.graph.edge_count(),
            kept.len(),
            fixture.describe()
        )));
    }
    if weighted.graph.edges().any(|edge| {
        !weighted.graph.contains_vertex(edge.source()) || !weighted.graph.contains_vertex(edge.target())
    }) {
        return Err(TestCaseError::fail(format!(
            "dangling edge after removal ({})",
            fixture.describe()
        )));
    }

    let oracle = bellman_ford_all_pairs(survivors.len(), &kept);
    let outcome = weighted.solve();
    if outcome.is_negative_cycle() != oracle.negative_cycle {
        return Err(TestCaseError::fail(format!(
            "negative-cycle verdict mismatch after removal ({})",
            fixture.describe()
        )));
    }
    let Some(paths) = outcome.converged() else {
        return Ok(());
    };

    for &index in &removed {
        let vertex = weighted.vertices[index];
        if paths.distance(vertex, vertex) != Err(PathError::UnknownVertex { vertex }) {
            return Err(TestCaseError::fail(format!(
                "removed vertex {vertex} is still part of the snapshot"
            )));
        }
    }
    for (s, row) in oracle.distances.iter().enumerate() {
        for (t, &expected) in row.iter().enumerate() {
            let source = weighted.vertices[survivors[s]];
            let target = weighted.vertices[survivors[t]];
            if paths.distance(source, target) != Ok(expected) {
                return Err(TestCaseError::fail(format!(
                    "distance mismatch for {source} -> {target} after removal ({})",
                    fixture.describe()
                )));
            }
        }
    }
    Ok(())
}
