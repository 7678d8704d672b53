//! Read-only neighborhood queries and whole-graph derivations.

use super::Graph;
use crate::error::Result;
use crate::graph::algorithms::tarjan;
use crate::graph::{AdjacencyMatrix, Edge, Vertex, Weight};
use crate::macros::graph_trace;

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Vertices reachable from `vertex` in one hop.
    ///
    /// A directed edge contributes its target, an undirected edge contributes
    /// its other endpoint. Each child appears once, in vertex-list order.
    pub fn child_vertices(&self, vertex: &V) -> Vec<&V> {
        if !self.contains_vertex(vertex) {
            return Vec::new();
        }
        if self.edges.len() >= self.vertices.len() {
            self.children_by_matrix(vertex)
        } else {
            self.children_by_edges(vertex)
        }
    }

    pub(super) fn children_by_matrix(&self, vertex: &V) -> Vec<&V> {
        self.vertices
            .keys()
            .filter(|child| self.adjacency_matrix.get(vertex, child))
            .collect()
    }

    pub(super) fn children_by_edges(&self, vertex: &V) -> Vec<&V> {
        let mut positions: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|edge| {
                if edge.vertex_a() == vertex {
                    Some(edge.vertex_b())
                } else if !edge.is_directed() && edge.vertex_b() == vertex {
                    Some(edge.vertex_a())
                } else {
                    None
                }
            })
            .filter_map(|child| self.vertex_position(child))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .filter_map(|idx| self.vertices.get_index(idx).map(|(v, ())| v))
            .collect()
    }

    /// Edges with `vertex` as either endpoint, in edge-list order.
    pub fn attached_edges(&self, vertex: &V) -> Vec<&Edge<V, W>> {
        self.edges.iter().filter(|edge| edge.touches(vertex)).collect()
    }

    /// Edges that can be left from `vertex`: directed edges starting there and
    /// undirected edges touching it.
    pub fn outgoing_edges(&self, vertex: &V) -> Vec<&Edge<V, W>> {
        self.edges
            .iter()
            .filter(|edge| {
                edge.vertex_a() == vertex || (!edge.is_directed() && edge.vertex_b() == vertex)
            })
            .collect()
    }

    /// Edges that can enter `vertex`: directed edges ending there and
    /// undirected edges touching it.
    pub fn incoming_edges(&self, vertex: &V) -> Vec<&Edge<V, W>> {
        self.edges
            .iter()
            .filter(|edge| {
                edge.vertex_b() == vertex || (!edge.is_directed() && edge.vertex_a() == vertex)
            })
            .collect()
    }

    /// Edges traversable from `a` to `b` in one hop: directed `a -> b` plus
    /// undirected edges between the two in either stored order.
    pub fn edges_between(&self, a: &V, b: &V) -> Vec<&Edge<V, W>> {
        self.edges.iter().filter(|edge| edge.leads(a, b)).collect()
    }

    /// Reverses every edge in place and rebuilds the adjacency matrix.
    ///
    /// The adjacency list is direction-agnostic and stays as it is. Applying
    /// `transpose` twice restores the original graph.
    pub fn transpose(&mut self) -> &mut Self {
        for edge in &mut self.edges {
            edge.transpose();
        }
        self.adjacency_matrix = AdjacencyMatrix::from_edge_list(&self.edges);
        graph_trace!(edges = self.edges.len(), "transpose");
        self
    }

    /// The subgraph induced by `vertices`.
    ///
    /// The result has the same configuration, the given vertices in the given
    /// order (repeats dropped), and every edge whose endpoints both lie in the
    /// set, in source edge-list order.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if any
    /// requested vertex is not in this graph.
    pub fn subgraph<'a, I>(&self, vertices: I) -> Result<Self>
    where
        V: 'a,
        I: IntoIterator<Item = &'a V>,
    {
        let mut sub = Self::with_config(self.config);
        for vertex in vertices {
            self.validate_vertex(vertex)?;
            sub.insert_vertex(vertex.clone());
        }
        for edge in &self.edges {
            if sub.contains_vertex(edge.vertex_a()) && sub.contains_vertex(edge.vertex_b()) {
                sub.insert_edge(edge.clone());
            }
        }
        graph_trace!(
            vertices = sub.vertex_count(),
            edges = sub.edge_count(),
            "subgraph"
        );
        Ok(sub)
    }

    /// Strongly connected components by Tarjan's algorithm.
    ///
    /// Components are listed in completion order; inside a component,
    /// vertices are listed in the order they were popped off the Tarjan
    /// stack. Undirected edges count in both directions.
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        let sccs = tarjan::strongly_connected_components(self);
        graph_trace!(components = sccs.len(), "strongly_connected_components");
        sccs
    }
}
