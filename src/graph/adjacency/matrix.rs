//! Sparse boolean adjacency matrix over vertex pairs.

use core::hash::Hash;

use crate::collections::Matrix;
use crate::graph::Edge;

/// Answers "is there a one-hop edge from `a` to `b`" in O(1).
///
/// Cell `(a, b)` is `true` for every edge `a -> b`; undirected edges also set
/// `(b, a)`. Unset cells read as `false`.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<V> {
    matrix: Matrix<V, V, bool>,
}

impl<V> AdjacencyMatrix<V> {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self {
            matrix: Matrix::new(false),
        }
    }

    /// The underlying two-key map.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<V, V, bool> {
        &self.matrix
    }
}

impl<V> Default for AdjacencyMatrix<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> AdjacencyMatrix<V> {
    /// Builds the matrix of an edge list from scratch.
    pub fn from_edge_list<'a, W, I>(edges: I) -> Self
    where
        V: 'a,
        W: 'a,
        I: IntoIterator<Item = &'a Edge<V, W>>,
    {
        let mut matrix = Self::new();
        for edge in edges {
            matrix.insert_edge(edge);
        }
        matrix
    }

    /// Marks the cells justified by `edge`.
    pub fn insert_edge<W>(&mut self, edge: &Edge<V, W>) {
        self.set(edge.vertex_a().clone(), edge.vertex_b().clone());
        if !edge.is_directed() {
            self.set(edge.vertex_b().clone(), edge.vertex_a().clone());
        }
    }

    /// `true` if a one-hop edge leads from `a` to `b`.
    #[inline]
    pub fn get(&self, a: &V, b: &V) -> bool {
        *self.matrix.get(a, b)
    }

    /// Marks `a -> b`.
    pub fn set(&mut self, a: V, b: V) {
        self.matrix.set(a, b, true);
    }

    /// Clears `a -> b`.
    pub fn unset(&mut self, a: &V, b: &V) {
        self.matrix.delete(a, b);
    }

    /// Removes the row and the column of `vertex`.
    pub fn delete_vertex(&mut self, vertex: &V) {
        self.matrix.delete_row(vertex);
        self.matrix.delete_column(vertex);
    }

    /// Vertices reachable from `vertex` in one hop, in cell insertion order.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.matrix
            .row(vertex)
            .filter_map(|(to, &set)| set.then_some(to))
    }
}

impl<V: Eq + Hash> PartialEq for AdjacencyMatrix<V> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}
