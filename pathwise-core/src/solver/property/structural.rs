//! Property 2: structural guarantees of converged results.
//!
//! For every converged solve the diagonal is zero, the triangle inequality
//! holds for every triple, and each reconstructed path starts and ends at
//! the requested vertices, follows real edges, visits at most `n` vertices
//! and weighs exactly the reported distance.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    error::PathError,
    graph::{GraphView, VertexId},
    solver::ShortestPaths,
    test_utils::WeightedGraph,
    verify::VerificationConfig,
};

use super::types::SolverFixture;

/// Runs the structural invariants property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &SolverFixture) -> TestCaseResult {
    let weighted = fixture.build();
    let Some(paths) = weighted.solve().converged().cloned() else {
        return Ok(());
    };

    for &vertex in &weighted.vertices {
        let diagonal = paths
            .distance(vertex, vertex)
            .map_err(|err| TestCaseError::fail(format!("diagonal lookup failed: {err}")))?;
        if diagonal != 0.0 {
            return Err(TestCaseError::fail(format!(
                "D[{vertex}][{vertex}] = {diagonal}, expected 0 ({})",
                fixture.describe()
            )));
        }
    }

    paths
        .verifier(VerificationConfig::default())
        .check()
        .map_err(|violation| {
            TestCaseError::fail(format!("{violation} ({})", fixture.describe()))
        })?;

    for &source in &weighted.vertices {
        for &target in &weighted.vertices {
            check_path(fixture, &weighted, &paths, source, target)?;
        }
    }
    Ok(())
}

fn check_path(
    fixture: &SolverFixture,
    weighted: &WeightedGraph,
    paths: &ShortestPaths,
    source: VertexId,
    target: VertexId,
) -> TestCaseResult {
    let fail = |detail: String| {
        TestCaseError::fail(format!(
            "{source} -> {target}: {detail} ({})",
            fixture.describe()
        ))
    };
    let distance = paths
        .distance(source, target)
        .map_err(|err| fail(err.to_string()))?;

    let vertices = match paths.path(source, target) {
        Ok(vertices) => vertices,
        Err(PathError::NoPath { .. }) if distance.is_infinite() => return Ok(()),
        Err(err) => return Err(fail(format!("reconstruction failed: {err}"))),
    };
    if vertices.first() != Some(&source) || vertices.last() != Some(&target) {
        return Err(fail(format!("path {vertices:?} has the wrong endpoints")));
    }
    if vertices.len() > paths.vertex_count() {
        return Err(fail(format!("path {vertices:?} revisits a vertex")));
    }

    let edges = paths
        .edge_path(source, target)
        .map_err(|err| fail(format!("edge reconstruction failed: {err}")))?;
    if edges.len() + 1 != vertices.len() {
        return Err(fail(format!(
            "{} edges for {} vertices",
            edges.len(),
            vertices.len()
        )));
    }
    for (hop, edge) in vertices.windows(2).zip(&edges) {
        let record = weighted
            .graph
            .edge(*edge)
            .map_err(|err| fail(err.to_string()))?;
        if record.source() != hop[0] || record.target() != hop[1] {
            return Err(fail(format!(
                "edge {edge} does not join {} -> {}",
                hop[0], hop[1]
            )));
        }
    }

    let weight = paths
        .path_weight(&weighted.graph, &weighted.weights, source, target)
        .map_err(|err| fail(err.to_string()))?;
    if weight != distance {
        return Err(fail(format!("path weighs {weight}, distance is {distance}")));
    }
    Ok(())
}
