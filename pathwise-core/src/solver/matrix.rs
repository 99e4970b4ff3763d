//! Dense matrices produced by a solve, and the read-only views over them.

use std::collections::HashMap;

use crate::{
    error::{NegativeCycleDetected, PathError},
    graph::{EdgeId, VertexId},
};

/// Sentinel distance for pairs with no connecting path.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Total order over the vertices of one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct VertexOrder {
    vertices: Vec<VertexId>,
    positions: HashMap<VertexId, usize>,
}

impl VertexOrder {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        let positions = vertices
            .iter()
            .enumerate()
            .map(|(position, vertex)| (*vertex, position))
            .collect();
        Self {
            vertices,
            positions,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub(crate) fn position(&self, vertex: VertexId) -> Result<usize, PathError> {
        self.positions
            .get(&vertex)
            .copied()
            .ok_or(PathError::UnknownVertex { vertex })
    }

    pub(crate) fn vertex(&self, position: usize) -> VertexId {
        self.vertices[position]
    }
}

/// Row-major `n × n` matrix of best-known path costs.
///
/// Rows and columns follow the snapshot order exposed by
/// [`ShortestPaths::vertices`]. Unreachable pairs hold [`UNREACHABLE`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceMatrix {
    order: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a matrix with a zero diagonal and every other cell unreachable.
    pub(crate) fn new(order: usize) -> Self {
        let mut cells = vec![UNREACHABLE; order * order];
        for index in 0..order {
            cells[index * order + index] = 0.0;
        }
        Self { order, cells }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> usize { self.order }

    /// Returns `true` for the matrix of an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the cost stored for `(row, column)`.
    ///
    /// # Panics
    /// Panics when either index is `>= order`.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(column < self.order, "column {column} out of bounds");
        self.cells[row * self.order + column]
    }

    /// Returns the cost stored for `(row, column)`, or `None` when out of
    /// bounds.
    #[must_use]
    pub fn try_get(&self, row: usize, column: usize) -> Option<f64> {
        (row < self.order && column < self.order).then(|| self.get(row, column))
    }

    /// Returns one row of the matrix.
    ///
    /// # Panics
    /// Panics when `row >= order`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, column: usize, value: f64) {
        self.cells[row * self.order + column] = value;
    }
}

/// Row-major `n × n` matrix recording the intermediate vertex behind the last
/// improvement of each distance.
///
/// `None` means the best path is the direct edge, the empty path on the
/// diagonal, or that no path exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredecessorMatrix {
    order: usize,
    cells: Vec<Option<usize>>,
}

impl PredecessorMatrix {
    pub(crate) fn new(order: usize) -> Self {
        Self {
            order,
            cells: vec![None; order * order],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> usize { self.order }

    /// Returns the intermediate position stored for `(row, column)`.
    ///
    /// # Panics
    /// Panics when either index is `>= order`.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        assert!(column < self.order, "column {column} out of bounds");
        self.cells[row * self.order + column]
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.cells
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, column: usize, intermediate: Option<usize>) {
        self.cells[row * self.order + column] = intermediate;
    }
}

/// Lightest direct edge per ordered pair, chosen while initialising `D`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DirectEdges {
    order: usize,
    cells: Vec<Option<EdgeId>>,
}

impl DirectEdges {
    pub(crate) fn new(order: usize) -> Self {
        Self {
            order,
            cells: vec![None; order * order],
        }
    }

    pub(crate) fn get(&self, row: usize, column: usize) -> Option<EdgeId> {
        self.cells[row * self.order + column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, edge: EdgeId) {
        self.cells[row * self.order + column] = Some(edge);
    }
}

/// Everything one solve produced, shared by both outcome kinds.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Solution {
    pub(crate) order: VertexOrder,
    pub(crate) distances: DistanceMatrix,
    pub(crate) predecessors: PredecessorMatrix,
    pub(crate) direct: DirectEdges,
}

/// Converged all-pairs shortest paths over one graph snapshot.
///
/// Distances are exact minima over all paths; the matrices are read-only.
/// Path reconstruction lives alongside in [`ShortestPaths::path`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub(crate) solution: Solution,
}

impl ShortestPaths {
    pub(crate) fn new(solution: Solution) -> Self {
        Self { solution }
    }

    /// Returns the number of vertices in the solved snapshot.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.solution.order.len()
    }

    /// Returns the snapshot vertices in matrix order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        self.solution.order.vertices()
    }

    /// Returns the matrix position of `vertex`.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when `vertex` was not part of the
    /// snapshot.
    pub fn position(&self, vertex: VertexId) -> Result<usize, PathError> {
        self.solution.order.position(vertex)
    }

    /// Returns the shortest distance from `source` to `target`, or
    /// [`UNREACHABLE`] when no path exists.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when either vertex was not part of
    /// the snapshot.
    pub fn distance(&self, source: VertexId, target: VertexId) -> Result<f64, PathError> {
        let row = self.position(source)?;
        let column = self.position(target)?;
        Ok(self.solution.distances.get(row, column))
    }

    /// Returns `true` when some path leads from `source` to `target`.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when either vertex was not part of
    /// the snapshot.
    pub fn is_reachable(&self, source: VertexId, target: VertexId) -> Result<bool, PathError> {
        self.distance(source, target)
            .map(|distance| distance < UNREACHABLE)
    }

    /// Returns the intermediate vertex recorded for the pair, if any.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when either vertex was not part of
    /// the snapshot.
    pub fn predecessor(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<VertexId>, PathError> {
        let row = self.position(source)?;
        let column = self.position(target)?;
        Ok(self
            .solution
            .predecessors
            .get(row, column)
            .map(|position| self.solution.order.vertex(position)))
    }

    /// Read-only view of the distance matrix.
    #[must_use]
    pub fn distances(&self) -> &DistanceMatrix {
        &self.solution.distances
    }

    /// Read-only view of the predecessor matrix.
    #[must_use]
    pub fn predecessors(&self) -> &PredecessorMatrix {
        &self.solution.predecessors
    }
}

/// Result state for a solve that found a negative-weight cycle.
///
/// The matrices are exposed for diagnosis only: once a negative cycle exists
/// their off-diagonal entries are no longer shortest distances.
#[derive(Clone, Debug, PartialEq)]
pub struct NegativeCycle {
    solution: Solution,
    vertices: Vec<VertexId>,
}

impl NegativeCycle {
    pub(crate) fn new(solution: Solution, vertices: Vec<VertexId>) -> Self {
        Self { solution, vertices }
    }

    /// Vertices whose self-distance became negative, in snapshot order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the diagonal entry `D[v][v]`, negative for every vertex on a
    /// negative cycle.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when `vertex` was not part of the
    /// snapshot.
    pub fn self_distance(&self, vertex: VertexId) -> Result<f64, PathError> {
        let position = self.solution.order.position(vertex)?;
        Ok(self.solution.distances.get(position, position))
    }

    /// Raw distance matrix as it stood after the last outer iteration.
    #[must_use]
    pub fn distances(&self) -> &DistanceMatrix {
        &self.solution.distances
    }

    /// Converts the state into the matching error value.
    #[must_use]
    pub fn into_error(self) -> NegativeCycleDetected {
        NegativeCycleDetected::new(self.vertices)
    }
}
