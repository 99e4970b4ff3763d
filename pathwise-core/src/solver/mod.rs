//! Floyd-Warshall all-pairs shortest-path solver.
//!
//! A solve snapshots the vertex order of the graph, initialises the distance
//! matrix from the lightest direct edges, then relaxes every `(i, j)` pair
//! through every intermediate `k` in increasing order. The full `n³` triple
//! product always runs; there is no early exit.

mod matrix;

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    error::{NegativeCycleDetected, SolveError},
    graph::{GraphView, VertexId},
    weight::WeightFunction,
};

pub(crate) use self::matrix::{DirectEdges, Solution, VertexOrder};
pub use self::matrix::{
    DistanceMatrix, NegativeCycle, PredecessorMatrix, ShortestPaths, UNREACHABLE,
};

/// Runs Floyd-Warshall over any [`GraphView`].
///
/// Build one with [`Solver::default`] or [`crate::SolverBuilder`] when a
/// deadline is required. A solver holds no per-solve state, so one instance
/// may be shared between threads.
///
/// # Examples
/// ```
/// use pathwise_core::{DiGraph, EdgeMutable, Solver, VertexMutable, WeightTable};
///
/// let mut graph = DiGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// let c = graph.add_vertex("c")?;
/// let ab = graph.add_edge(a, b)?;
/// let bc = graph.add_edge(b, c)?;
/// let ac = graph.add_edge(a, c)?;
/// let weights = WeightTable::new(0.0).with(ab, 1.0).with(bc, 2.0).with(ac, 5.0);
///
/// let paths = Solver::default().solve(&graph, &weights)?.into_shortest_paths()?;
/// assert_eq!(paths.distance(a, c)?, 3.0);
/// assert_eq!(paths.path(a, c)?, [a, b, c]);
/// # Ok::<(), pathwise_core::PathwiseError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    pub(crate) deadline: Option<Duration>,
}

impl Solver {
    /// Returns the wall-clock budget checked between outer iterations.
    #[must_use]
    #[rustfmt::skip]
    pub fn deadline(&self) -> Option<Duration> { self.deadline }

    /// Computes all-pairs shortest paths for the current state of `graph`.
    ///
    /// The graph is only read. Vertices are ordered as [`GraphView::vertices`]
    /// yields them at the start of the call.
    ///
    /// # Errors
    /// Returns [`SolveError::NonFiniteWeight`] when `weights` yields NaN or an
    /// infinity, and [`SolveError::DeadlineExceeded`] when the configured
    /// deadline elapses before the last outer iteration.
    #[instrument(
        name = "solver.solve",
        err,
        skip(self, graph, weights),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn solve<G, W>(&self, graph: &G, weights: &W) -> Result<SolveOutcome, SolveError>
    where
        G: GraphView + ?Sized,
        W: WeightFunction + ?Sized,
    {
        let started = Instant::now();
        let mut solution = initialise(graph, weights)?;
        let total = solution.order.len();
        let improvements = self.relax_all(&mut solution, started)?;
        let checks = (total as u64).saturating_pow(3);

        let elapsed = started.elapsed();
        record_solve(checks, elapsed);

        let cyclic: Vec<VertexId> = (0..total)
            .filter(|&index| solution.distances.get(index, index) < 0.0)
            .map(|index| solution.order.vertex(index))
            .collect();

        let Some(&first) = cyclic.first() else {
            info!(checks, improvements, ?elapsed, "solve converged");
            return Ok(SolveOutcome::Converged(ShortestPaths::new(solution)));
        };

        warn!(
            affected = cyclic.len(),
            %first,
            "negative-weight cycle detected"
        );
        record_negative_cycle();
        Ok(SolveOutcome::NegativeCycle(NegativeCycle::new(
            solution, cyclic,
        )))
    }

    /// Runs the triple loop, returning the number of strict improvements.
    fn relax_all(&self, solution: &mut Solution, started: Instant) -> Result<u64, SolveError> {
        let total = solution.order.len();
        let distances = &mut solution.distances;
        let predecessors = &mut solution.predecessors;
        let mut improvements = 0_u64;

        for k in 0..total {
            for i in 0..total {
                let through = distances.get(i, k);
                for j in 0..total {
                    let candidate = through + distances.get(k, j);
                    if candidate < distances.get(i, j) {
                        distances.set(i, j, candidate);
                        predecessors.set(i, j, Some(k));
                        improvements += 1;
                    }
                }
            }
            trace!(k, improvements, "intermediate processed");

            if k + 1 < total
                && let Some(deadline) = self.deadline
                && started.elapsed() > deadline
            {
                warn!(
                    completed = k + 1,
                    total,
                    ?deadline,
                    "solver deadline exceeded"
                );
                return Err(SolveError::DeadlineExceeded {
                    completed: k + 1,
                    total,
                });
            }
        }
        Ok(improvements)
    }
}

/// Builds the vertex order, the direct-edge table and the initial matrices.
fn initialise<G, W>(graph: &G, weights: &W) -> Result<Solution, SolveError>
where
    G: GraphView + ?Sized,
    W: WeightFunction + ?Sized,
{
    let order = VertexOrder::new(graph.vertices().collect());
    let total = order.len();
    let mut distances = DistanceMatrix::new(total);
    let mut direct = DirectEdges::new(total);

    for edge in graph.edges() {
        let weight = weights.weight(edge);
        if !weight.is_finite() {
            return Err(SolveError::NonFiniteWeight {
                edge: edge.id(),
                source_vertex: edge.source(),
                target_vertex: edge.target(),
            });
        }
        let (Ok(row), Ok(column)) =
            (order.position(edge.source()), order.position(edge.target()))
        else {
            trace!(edge = %edge.id(), "edge endpoint missing from snapshot, skipped");
            continue;
        };
        // Strict comparison keeps the first of equally light parallel edges.
        if weight < distances.get(row, column) {
            distances.set(row, column, weight);
            direct.set(row, column, edge.id());
        }
    }
    debug!(vertices = total, "distance matrix initialised");

    Ok(Solution {
        order,
        distances,
        predecessors: PredecessorMatrix::new(total),
        direct,
    })
}

#[cfg(feature = "metrics")]
fn record_solve(checks: u64, elapsed: Duration) {
    metrics::counter!("pathwise_solver_relaxations").increment(checks);
    metrics::histogram!("pathwise_solver_duration_seconds").record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_solve(_checks: u64, _elapsed: Duration) {}

#[cfg(feature = "metrics")]
fn record_negative_cycle() {
    metrics::counter!("pathwise_solver_negative_cycles").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_negative_cycle() {}

/// Result of a finished solve.
///
/// A negative-weight cycle is a result state, not an error: the matrices are
/// still available through [`NegativeCycle`] for diagnosis.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    /// Every distance is a true shortest distance.
    Converged(ShortestPaths),
    /// At least one vertex lies on a negative-weight cycle.
    NegativeCycle(NegativeCycle),
}

impl SolveOutcome {
    /// Returns `true` when the solve found a negative-weight cycle.
    #[must_use]
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle(_))
    }

    /// Borrows the converged result, if any.
    #[must_use]
    pub fn converged(&self) -> Option<&ShortestPaths> {
        match self {
            Self::Converged(paths) => Some(paths),
            Self::NegativeCycle(_) => None,
        }
    }

    /// Borrows the negative-cycle state, if any.
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&NegativeCycle> {
        match self {
            Self::Converged(_) => None,
            Self::NegativeCycle(cycle) => Some(cycle),
        }
    }

    /// Returns the raw distance matrix regardless of the outcome.
    #[must_use]
    pub fn distances(&self) -> &DistanceMatrix {
        match self {
            Self::Converged(paths) => paths.distances(),
            Self::NegativeCycle(cycle) => cycle.distances(),
        }
    }

    /// Unwraps the converged result.
    ///
    /// # Errors
    /// Returns [`NegativeCycleDetected`] when the solve found a negative
    /// cycle.
    pub fn into_shortest_paths(self) -> Result<ShortestPaths, NegativeCycleDetected> {
        match self {
            Self::Converged(paths) => Ok(paths),
            Self::NegativeCycle(cycle) => Err(cycle.into_error()),
        }
    }
}


#[cfg(test)]
mod property;
