//! Visited markers for graph traversals.
//!
//! Flags are stored densely by vertex position in the graph's insertion-ordered
//! vertex index, so marking and testing a vertex is a hash lookup plus a
//! vector access. Vertices are resolved by value: any instance equal to a graph
//! vertex addresses its flag.

use core::hash::Hash;

use crate::collections::IndexMap;

/// Per-vertex visited flags for one traversal of one graph.
pub struct VisitedSet<'g, V> {
    index: &'g IndexMap<V, ()>,
    flags: Vec<bool>,
    visited: usize,
}

impl<'g, V: Eq + Hash> VisitedSet<'g, V> {
    pub(crate) fn new(index: &'g IndexMap<V, ()>) -> Self {
        Self {
            index,
            flags: vec![false; index.len()],
            visited: 0,
        }
    }

    /// Number of vertices marked so far.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.visited
    }

    /// Number of vertices the set tracks.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.flags.len()
    }

    /// `true` if nothing has been marked yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.visited == 0
    }

    /// `true` once every vertex of the graph is marked.
    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.visited == self.flags.len()
    }

    /// `true` if `vertex` belongs to the graph and has been marked.
    #[inline]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index
            .get_index_of(vertex)
            .is_some_and(|idx| self.flags[idx])
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    ///
    /// Vertices outside the graph are never marked.
    pub(crate) fn try_visit(&mut self, vertex: &V) -> bool {
        match self.index.get_index_of(vertex) {
            Some(idx) if !self.flags[idx] => {
                self.flags[idx] = true;
                self.visited += 1;
                true
            }
            _ => false,
        }
    }

    /// First unmarked vertex in graph insertion order.
    pub(crate) fn first_unvisited(&self) -> Option<&'g V> {
        let idx = self.flags.iter().position(|&f| !f)?;
        self.index.get_index(idx).map(|(v, ())| v)
    }

    /// Marked vertices in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'g V> + '_ {
        self.index
            .keys()
            .zip(&self.flags)
            .filter_map(|(v, &f)| f.then_some(v))
    }
}
