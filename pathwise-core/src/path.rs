//! Path reconstruction over a converged predecessor matrix.
//!
//! `P[i][j] = k` splits the pair into `i → k` and `k → j`; `None` means the
//! hop is a direct edge. Reconstruction walks the split tree with an explicit
//! stack, so deep paths cannot overflow the call stack, and caps the number
//! of splits at `n` so a corrupted matrix is reported instead of looping.

use crate::{
    error::PathError,
    graph::{EdgeId, GraphView, VertexId},
    solver::{ShortestPaths, UNREACHABLE},
    weight::WeightFunction,
};

/// One hop of a reconstructed path, in matrix positions.
#[derive(Clone, Copy, Debug)]
struct Hop {
    from: usize,
    to: usize,
}

/// Post-order step of the split tree: a direct hop, or the join of the two
/// halves emitted just before it.
#[derive(Clone, Copy, Debug)]
enum Step {
    Hop(Hop),
    Join,
}

impl ShortestPaths {
    /// Returns the vertices of a shortest path from `source` to `target`,
    /// both included.
    ///
    /// A vertex reaches itself through the empty path, returned as
    /// `[source]`.
    ///
    /// # Errors
    /// - [`PathError::UnknownVertex`] when either vertex was not part of the
    ///   solved snapshot.
    /// - [`PathError::NoPath`] when `target` is unreachable from `source`.
    /// - [`PathError::InconsistentState`] when the predecessor matrix
    ///   contradicts itself.
    pub fn path(&self, source: VertexId, target: VertexId) -> Result<Vec<VertexId>, PathError> {
        let hops = self.hops(source, target)?;
        let mut vertices = Vec::with_capacity(hops.len() + 1);
        vertices.push(source);
        vertices.extend(hops.iter().map(|hop| self.solution.order.vertex(hop.to)));
        Ok(vertices)
    }

    /// Returns the edges of a shortest path from `source` to `target`.
    ///
    /// Every hop uses the lightest of its parallel edges. The path from a
    /// vertex to itself has no edges.
    ///
    /// # Errors
    /// Same conditions as [`Self::path`].
    pub fn edge_path(&self, source: VertexId, target: VertexId) -> Result<Vec<EdgeId>, PathError> {
        let hops = self.hops(source, target)?;
        hops.iter()
            .map(|hop| {
                self.solution
                    .direct
                    .get(hop.from, hop.to)
                    .ok_or(PathError::InconsistentState {
                        source_vertex: source,
                        target_vertex: target,
                        reason: "hop has no direct edge",
                    })
            })
            .collect()
    }

    /// Sums `weights` along the reconstructed shortest path.
    ///
    /// Additions follow the split tree, `w(i → k) + w(k → j)` at every
    /// split, which is the grouping the solver used to form `D[i][j]`. On a
    /// graph with a single path between every pair the result is therefore
    /// bit-identical to [`Self::distance`], even for fractional weights; a
    /// left-to-right sum need not be.
    ///
    /// # Errors
    /// Same conditions as [`Self::path`], plus
    /// [`PathError::InconsistentState`] when a chosen edge has since been
    /// removed from `graph`.
    pub fn path_weight<G, W>(
        &self,
        graph: &G,
        weights: &W,
        source: VertexId,
        target: VertexId,
    ) -> Result<f64, PathError>
    where
        G: GraphView + ?Sized,
        W: WeightFunction + ?Sized,
    {
        let inconsistent = |reason| PathError::InconsistentState {
            source_vertex: source,
            target_vertex: target,
            reason,
        };
        let mut partial: Vec<f64> = Vec::new();
        for step in self.steps(source, target)? {
            match step {
                Step::Hop(hop) => {
                    let edge = self
                        .solution
                        .direct
                        .get(hop.from, hop.to)
                        .ok_or_else(|| inconsistent("hop has no direct edge"))?;
                    let edge = graph
                        .edge(edge)
                        .map_err(|_| inconsistent("edge no longer present in the graph"))?;
                    partial.push(weights.weight(edge));
                }
                Step::Join => {
                    let (Some(second), Some(first)) = (partial.pop(), partial.pop()) else {
                        return Err(inconsistent("split without two halves"));
                    };
                    partial.push(first + second);
                }
            }
        }
        Ok(partial.pop().unwrap_or(0.0))
    }

    /// Expands the pair into direct hops, in path order.
    fn hops(&self, source: VertexId, target: VertexId) -> Result<Vec<Hop>, PathError> {
        Ok(self
            .steps(source, target)?
            .into_iter()
            .filter_map(|step| match step {
                Step::Hop(hop) => Some(hop),
                Step::Join => None,
            })
            .collect())
    }

    /// Walks the split tree in post-order; hops come out in path order.
    fn steps(&self, source: VertexId, target: VertexId) -> Result<Vec<Step>, PathError> {
        let from = self.position(source)?;
        let to = self.position(target)?;
        if self.solution.distances.get(from, to) >= UNREACHABLE {
            return Err(PathError::NoPath {
                source_vertex: source,
                target_vertex: target,
            });
        }
        if from == to {
            return Ok(Vec::new());
        }

        let inconsistent = |reason| PathError::InconsistentState {
            source_vertex: source,
            target_vertex: target,
            reason,
        };
        let budget = self.vertex_count();
        let mut splits = 0_usize;
        let mut steps = Vec::new();
        // `Step::Hop` entries here are still unexpanded.
        let mut pending = vec![Step::Hop(Hop { from, to })];

        while let Some(next) = pending.pop() {
            let hop = match next {
                Step::Join => {
                    steps.push(Step::Join);
                    continue;
                }
                Step::Hop(hop) => hop,
            };
            match self.solution.predecessors.get(hop.from, hop.to) {
                None => {
                    if hop.from == hop.to || self.solution.direct.get(hop.from, hop.to).is_none() {
                        return Err(inconsistent("hop has no direct edge"));
                    }
                    steps.push(Step::Hop(hop));
                }
                Some(via) => {
                    splits += 1;
                    if splits > budget {
                        return Err(inconsistent("expansion budget exhausted"));
                    }
                    if via == hop.from || via == hop.to || via >= budget {
                        return Err(inconsistent("predecessor does not split the hop"));
                    }
                    // Popped in reverse: first half, second half, then the join.
                    pending.push(Step::Join);
                    pending.push(Step::Hop(Hop { from: via, to: hop.to }));
                    pending.push(Step::Hop(Hop { from: hop.from, to: via }));
                }
            }
        }
        Ok(steps)
    }
}
