//! Directed graph store and the capability traits the solver consumes.
//!
//! The store is split into three capabilities rather than one deep trait
//! hierarchy:
//!
//! - [`GraphView`] enumerates vertices and outgoing edges. It is all the
//!   solver needs.
//! - [`VertexMutable`] adds and removes vertices.
//! - [`EdgeMutable`] adds and removes edges.
//!
//! [`DiGraph`] implements all three. Enumeration borrows the store, so the
//! borrow checker rejects any mutation while an enumeration is alive:
//!
//! ```compile_fail
//! use pathwise_core::{DiGraph, EdgeMutable, GraphView, VertexMutable};
//!
//! let mut graph = DiGraph::new();
//! let a = graph.add_vertex("a").expect("fresh key");
//! for v in graph.vertices() {
//!     graph.add_edge(a, v).expect("live endpoints");
//! }
//! ```
//!
//! Collecting the handles first is the supported way to mutate based on an
//! enumeration:
//!
//! ```
//! use pathwise_core::{DiGraph, EdgeMutable, GraphView, VertexMutable};
//!
//! let mut graph = DiGraph::new();
//! let a = graph.add_vertex("a").expect("fresh key");
//! graph.add_vertex("b").expect("fresh key");
//! let snapshot: Vec<_> = graph.vertices().collect();
//! for v in snapshot {
//!     graph.add_edge(a, v).expect("live endpoints");
//! }
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod store;

use std::fmt;

use crate::error::GraphError;

pub use self::store::DiGraph;

/// Opaque handle to a vertex of a [`DiGraph`].
///
/// Handles are never reused by the store that issued them, so a handle to a
/// removed vertex stays unknown forever.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the storage slot backing the handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn slot(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Opaque handle to an edge of a [`DiGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the storage slot backing the handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn slot(self) -> usize { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed edge together with its endpoints.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeRef {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
}

impl EdgeRef {
    pub(crate) const fn new(id: EdgeId, source: VertexId, target: VertexId) -> Self {
        Self { id, source, target }
    }

    /// Returns the edge handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the tail of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the head of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns `true` when the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Read access to a directed graph.
///
/// Iterators are lazy, finite and restartable: cloning an iterator, or
/// calling the method again, enumerates the same sequence as long as the
/// graph is not mutated in between.
pub trait GraphView {
    /// Returns the number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of live edges.
    fn edge_count(&self) -> usize;

    /// Returns `true` when the handle refers to a live vertex.
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Returns `true` when the handle refers to a live edge.
    fn contains_edge(&self, edge: EdgeId) -> bool;

    /// Returns the edge with its endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] when `edge` is not live.
    fn edge(&self, edge: EdgeId) -> Result<EdgeRef, GraphError>;

    /// Enumerates live vertices in insertion order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> + Clone + '_;

    /// Enumerates the edges leaving `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = EdgeRef> + Clone + '_, GraphError>;

    /// Returns `true` when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Enumerates every live edge, grouped by tail in vertex order.
    fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.vertices()
            .filter_map(move |vertex| self.outgoing_edges(vertex).ok())
            .flatten()
    }
}

/// Vertex insertion and removal.
pub trait VertexMutable: GraphView {
    /// Caller-chosen identity of a vertex.
    type Key;

    /// Inserts a vertex identified by `key`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when `key` is already bound.
    fn add_vertex(&mut self, key: Self::Key) -> Result<VertexId, GraphError>;

    /// Removes `vertex` and every edge incident to it, returning its key.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<Self::Key, GraphError>;
}

/// Edge insertion and removal.
pub trait EdgeMutable: GraphView {
    /// Inserts a directed edge from `source` to `target`.
    ///
    /// Parallel edges and self-loops are accepted.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is not live.
    fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId, GraphError>;

    /// Removes `edge`, returning it with its former endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] when `edge` is not live.
    fn remove_edge(&mut self, edge: EdgeId) -> Result<EdgeRef, GraphError>;
}

/// A graph supporting both vertex and edge mutation.
pub trait MutableGraph: VertexMutable + EdgeMutable {}

impl<G: VertexMutable + EdgeMutable> MutableGraph for G {}
