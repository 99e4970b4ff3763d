//! Edge weight functions supplied to the solver.
//!
//! Weights are never stored on edges. The solver asks the weight function for
//! every edge of the snapshot, so implementations must be pure: repeated calls
//! for the same edge must return the same value.

use std::collections::HashMap;

use crate::graph::{EdgeId, EdgeRef};

/// Maps an edge to a real-valued cost.
///
/// Zero and negative weights are allowed; detecting negative cycles is the
/// solver's job. Closures taking an [`EdgeRef`] implement the trait directly.
///
/// # Examples
/// ```
/// use pathwise_core::{DiGraph, EdgeMutable, GraphView, VertexMutable, WeightFunction};
///
/// let mut graph = DiGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// let ab = graph.add_edge(a, b)?;
///
/// let by_slot = |edge: pathwise_core::EdgeRef| edge.id().slot() as f64 + 0.5;
/// assert_eq!(by_slot.weight(graph.edge(ab)?), 0.5);
/// # Ok::<(), pathwise_core::GraphError>(())
/// ```
pub trait WeightFunction {
    /// Returns the cost of traversing `edge`.
    fn weight(&self, edge: EdgeRef) -> f64;
}

impl<F> WeightFunction for F
where
    F: Fn(EdgeRef) -> f64,
{
    fn weight(&self, edge: EdgeRef) -> f64 {
        self(edge)
    }
}

/// Weighs every edge as `1.0`, turning distances into hop counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitWeight;

impl WeightFunction for UnitWeight {
    fn weight(&self, _edge: EdgeRef) -> f64 {
        1.0
    }
}

/// Explicit per-edge weights with a fallback for unlisted edges.
///
/// # Examples
/// ```
/// use pathwise_core::{DiGraph, EdgeMutable, GraphView, VertexMutable, WeightFunction, WeightTable};
///
/// let mut graph = DiGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// let ab = graph.add_edge(a, b)?;
/// let ba = graph.add_edge(b, a)?;
///
/// let weights = WeightTable::new(1.0).with(ab, -2.5);
/// assert_eq!(weights.weight(graph.edge(ab)?), -2.5);
/// assert_eq!(weights.weight(graph.edge(ba)?), 1.0);
/// # Ok::<(), pathwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightTable {
    weights: HashMap<EdgeId, f64>,
    fallback: f64,
}

impl WeightTable {
    /// Creates an empty table that weighs unlisted edges as `fallback`.
    #[must_use]
    pub fn new(fallback: f64) -> Self {
        Self {
            weights: HashMap::new(),
            fallback,
        }
    }

    /// Sets the weight of `edge`, replacing any previous value.
    pub fn insert(&mut self, edge: EdgeId, weight: f64) -> Option<f64> {
        self.weights.insert(edge, weight)
    }

    /// Builder-style variant of [`Self::insert`].
    #[must_use]
    pub fn with(mut self, edge: EdgeId, weight: f64) -> Self {
        self.insert(edge, weight);
        self
    }

    /// Returns the weight recorded for `edge`, if any.
    #[must_use]
    pub fn get(&self, edge: EdgeId) -> Option<f64> {
        self.weights.get(&edge).copied()
    }

    /// Returns the weight used for unlisted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn fallback(&self) -> f64 { self.fallback }
}

impl WeightFunction for WeightTable {
    fn weight(&self, edge: EdgeRef) -> f64 {
        self.get(edge.id()).unwrap_or(self.fallback)
    }
}
