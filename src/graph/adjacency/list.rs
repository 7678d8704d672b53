//! Direction-agnostic neighbor buckets.

use core::fmt;
use core::hash::Hash;

use crate::collections::IndexMap;
use crate::graph::Edge;

/// Maps each vertex to the vertices it shares an edge with.
///
/// Storage is symmetric regardless of edge direction: `add_adjacency(a, b)`
/// records `b` in `a`'s bucket and `a` in `b`'s bucket. Direction is recovered
/// from the edge list or the adjacency matrix. A self-loop is recorded once.
#[derive(Clone)]
pub struct AdjacencyList<V> {
    buckets: IndexMap<V, Vec<V>>,
}

impl<V> AdjacencyList<V> {
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        Self {
            buckets: IndexMap::new(),
        }
    }

    /// Number of vertices with a bucket.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// `true` if no bucket exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates `(vertex, neighbors)` in bucket creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.buckets.iter().map(|(v, nbrs)| (v, nbrs.as_slice()))
    }
}

impl<V> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> AdjacencyList<V> {
    /// Ensures `vertex` has a bucket, initially empty.
    pub fn init_vertex(&mut self, vertex: V) {
        self.buckets.get_or_insert_with(vertex, Vec::new);
    }

    /// `true` if `vertex` has a bucket.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.buckets.contains_key(vertex)
    }

    /// The neighbors of `vertex`, empty if it has no bucket.
    pub fn adjacent_vertices(&self, vertex: &V) -> &[V] {
        self.buckets.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` iff `b` appears in `a`'s bucket.
    pub fn are_adjacent(&self, a: &V, b: &V) -> bool {
        self.adjacent_vertices(a).contains(b)
    }

    /// Records that `a` and `b` share an edge, unless already recorded.
    pub fn add_adjacency(&mut self, a: V, b: V) {
        if self.are_adjacent(&a, &b) {
            return;
        }
        if a == b {
            self.buckets.get_or_insert_with(a, Vec::new).push(b);
            return;
        }
        self.buckets.get_or_insert_with(a.clone(), Vec::new).push(b.clone());
        self.buckets.get_or_insert_with(b, Vec::new).push(a);
    }

    /// Removes the bucket of `vertex` and every reference to it.
    pub fn delete_vertex(&mut self, vertex: &V) {
        self.buckets.shift_remove(vertex);
        for nbrs in self.buckets.values_mut() {
            nbrs.retain(|v| v != vertex);
        }
    }

    /// Removes the mutual adjacency of the edge endpoints.
    ///
    /// This is unconditional: callers decide whether another edge between the
    /// same pair still justifies the adjacency.
    pub fn delete_edge<W>(&mut self, edge: &Edge<V, W>) {
        let (a, b) = (edge.vertex_a(), edge.vertex_b());
        if let Some(nbrs) = self.buckets.get_mut(a) {
            nbrs.retain(|v| v != b);
        }
        if let Some(nbrs) = self.buckets.get_mut(b) {
            nbrs.retain(|v| v != a);
        }
    }
}

impl<V: Eq + Hash> PartialEq for AdjacencyList<V> {
    /// Same buckets, each with the same neighbor sequence.
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<V: fmt::Debug> fmt::Debug for AdjacencyList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
