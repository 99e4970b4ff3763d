//! Slot-based directed multigraph keyed by caller-supplied vertex keys.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use tracing::trace;

use crate::error::GraphError;

use super::{EdgeId, EdgeMutable, EdgeRef, GraphView, VertexId, VertexMutable};

#[derive(Clone, Debug)]
struct VertexSlot<K> {
    key: K,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

/// Directed multigraph supporting vertex and edge mutation.
///
/// Vertices and edges live in append-only slot tables. Removal clears the
/// slot, so handles are never recycled and enumeration keeps insertion
/// order. Self-loops and parallel edges are stored like any other edge.
///
/// Cleared slots are not reclaimed, so [`GraphView::vertices`], and with it
/// every solve's snapshot, costs time in the number of vertex slots ever
/// allocated rather than the live count. Rebuild the graph after heavy
/// add/remove churn to drop dead slots.
///
/// # Examples
/// ```
/// use pathwise_core::{DiGraph, EdgeMutable, GraphView, VertexMutable};
///
/// let mut graph = DiGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// let ab = graph.add_edge(a, b)?;
/// assert_eq!(graph.outgoing_edges(a)?.map(|e| e.id()).collect::<Vec<_>>(), [ab]);
///
/// graph.remove_vertex(b)?;
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), pathwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DiGraph<K> {
    vertices: Vec<Option<VertexSlot<K>>>,
    edges: Vec<Option<EdgeRef>>,
    keys: HashMap<K, VertexId>,
    vertex_count: usize,
    edge_count: usize,
}

impl<K> Default for DiGraph<K> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            keys: HashMap::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> DiGraph<K> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for the given number of vertices and
    /// edges.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            keys: HashMap::with_capacity(vertices),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Looks up the vertex bound to `key`.
    pub fn vertex<Q>(&self, key: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keys.get(key).copied()
    }

    /// Returns the key of a live vertex.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.slot(vertex).map(|slot| &slot.key)
    }

    /// Enumerates the edges entering `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn incoming_edges(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = EdgeRef> + Clone + '_, GraphError> {
        let slot = self.require_vertex(vertex)?;
        Ok(self.resolve(&slot.incoming))
    }

    /// Returns the number of edges leaving `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.require_vertex(vertex)?.outgoing.len())
    }

    /// Returns the number of edges entering `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.require_vertex(vertex)?.incoming.len())
    }

    fn slot(&self, vertex: VertexId) -> Option<&VertexSlot<K>> {
        self.vertices.get(vertex.slot()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, vertex: VertexId) -> Option<&mut VertexSlot<K>> {
        self.vertices.get_mut(vertex.slot()).and_then(Option::as_mut)
    }

    fn require_vertex(&self, vertex: VertexId) -> Result<&VertexSlot<K>, GraphError> {
        self.slot(vertex)
            .ok_or(GraphError::UnknownVertex { vertex })
    }

    fn resolve<'a>(&'a self, ids: &'a [EdgeId]) -> impl Iterator<Item = EdgeRef> + Clone + 'a {
        ids.iter()
            .filter_map(|id| self.edges.get(id.slot()).copied().flatten())
    }

    /// Clears an edge slot and unlinks it from both endpoints.
    fn unlink(&mut self, edge: EdgeId) -> Result<EdgeRef, GraphError> {
        let record = self
            .edges
            .get_mut(edge.slot())
            .and_then(Option::take)
            .ok_or(GraphError::UnknownEdge { edge })?;

        if let Some(slot) = self.slot_mut(record.source()) {
            slot.outgoing.retain(|id| *id != edge);
        }
        if let Some(slot) = self.slot_mut(record.target()) {
            slot.incoming.retain(|id| *id != edge);
        }
        self.edge_count = self.edge_count.saturating_sub(1);
        Ok(record)
    }
}

impl<K: Eq + Hash + Clone> GraphView for DiGraph<K> {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.slot(vertex).is_some()
    }

    fn contains_edge(&self, edge: EdgeId) -> bool {
        matches!(self.edges.get(edge.slot()), Some(Some(_)))
    }

    fn edge(&self, edge: EdgeId) -> Result<EdgeRef, GraphError> {
        self.edges
            .get(edge.slot())
            .copied()
            .flatten()
            .ok_or(GraphError::UnknownEdge { edge })
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + Clone + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(slot, vertex)| vertex.as_ref().map(|_| VertexId::new(slot)))
    }

    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = EdgeRef> + Clone + '_, GraphError> {
        let slot = self.require_vertex(vertex)?;
        Ok(self.resolve(&slot.outgoing))
    }
}

impl<K: Eq + Hash + Clone> VertexMutable for DiGraph<K> {
    type Key = K;

    fn add_vertex(&mut self, key: K) -> Result<VertexId, GraphError> {
        if let Some(existing) = self.keys.get(&key) {
            return Err(GraphError::DuplicateVertex {
                existing: *existing,
            });
        }
        let vertex = VertexId::new(self.vertices.len());
        self.keys.insert(key.clone(), vertex);
        self.vertices.push(Some(VertexSlot {
            key,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        self.vertex_count += 1;
        Ok(vertex)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<K, GraphError> {
        let slot = self.require_vertex(vertex)?;
        let mut incident: Vec<EdgeId> = slot
            .outgoing
            .iter()
            .chain(slot.incoming.iter())
            .copied()
            .collect();
        // Self-loops sit in both adjacency lists.
        incident.sort_unstable();
        incident.dedup();

        for edge in &incident {
            self.unlink(*edge)?;
        }

        let removed = self
            .vertices
            .get_mut(vertex.slot())
            .and_then(Option::take)
            .ok_or(GraphError::UnknownVertex { vertex })?;
        self.keys.remove(&removed.key);
        self.vertex_count = self.vertex_count.saturating_sub(1);
        trace!(%vertex, removed_edges = incident.len(), "vertex removed");
        Ok(removed.key)
    }
}

impl<K: Eq + Hash + Clone> EdgeMutable for DiGraph<K> {
    fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId, GraphError> {
        self.require_vertex(source)?;
        self.require_vertex(target)?;

        let edge = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeRef::new(edge, source, target)));
        if let Some(slot) = self.slot_mut(source) {
            slot.outgoing.push(edge);
        }
        if let Some(slot) = self.slot_mut(target) {
            slot.incoming.push(edge);
        }
        self.edge_count += 1;
        Ok(edge)
    }

    fn remove_edge(&mut self, edge: EdgeId) -> Result<EdgeRef, GraphError> {
        self.unlink(edge)
    }
}
