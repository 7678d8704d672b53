//! The graph container.
//!
//! A [`Graph`] stores the same vertex/edge set four times, each shaped for a
//! different access pattern:
//!
//! 1. the vertex list, in insertion order, hash-indexed for O(1) membership,
//! 2. the edge list, in insertion order,
//! 3. the [`AdjacencyList`], direction-agnostic neighbor buckets,
//! 4. the [`AdjacencyMatrix`], directed one-hop reachability.
//!
//! Every mutation updates all four before returning, so readers can pick
//! whichever representation answers their question fastest.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(k)\) | k = batch size, hash-indexed dedup |
//! | `delete_vertex` | \(O(n + m)\) | Strips edges and every bucket/column |
//! | `add_edge` | \(O(k \cdot m)\) | Edge equality is kind-aware, dedup scans the list |
//! | `delete_edge` | \(O(k \cdot m)\) | Re-checks remaining justification per pair |
//! | `contains_vertex` | \(O(1)\) | |
//! | `child_vertices` | \(O(n)\) or \(O(m)\) | Matrix scan or edge scan, whichever is smaller |

mod queries;
mod repr;
mod traversal;


use core::borrow::Borrow;

use crate::collections::IndexMap;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, AdjacencyMatrix, Edge, GraphConfig, Vertex, Weight};
use crate::macros::graph_trace;

pub use traversal::{Dfs, DfsVisit, NaturalOrder};

/// An in-memory graph over vertices `V` with edges weighted by `W`.
///
/// Directed, undirected, weighted and unweighted edges may be mixed freely.
/// Parallel edges of different kinds and self-loops are allowed; exact
/// duplicates (per [`Edge`] equality) are dropped.
///
/// ```rust
/// use polygraph::{Edge, Graph, NamedVertex};
///
/// let (a, b) = (NamedVertex::new("a"), NamedVertex::new("b"));
/// let mut graph: Graph<NamedVertex> = Graph::new();
/// graph.add_vertex([a.clone(), b.clone()]);
/// graph.add_edge([Edge::directed(a.clone(), b.clone())])?;
///
/// assert!(graph.adjacency_matrix().get(&a, &b));
/// assert!(!graph.adjacency_matrix().get(&b, &a));
/// assert_eq!(graph.adjacent_vertices(&b), &[a]);
/// # Ok::<(), polygraph::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W = f64> {
    vertices: IndexMap<V, ()>,
    edges: Vec<Edge<V, W>>,
    adjacency_matrix: AdjacencyMatrix<V>,
    adjacency_list: AdjacencyList<V>,
    config: GraphConfig,
}

impl<V, W> Graph<V, W> {
    /// Creates an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: Vec::new(),
            adjacency_matrix: AdjacencyMatrix::new(),
            adjacency_list: AdjacencyList::new(),
            config,
        }
    }

    /// Creates an empty strict graph: edges must reference known vertices.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::new())
    }

    /// Creates an empty graph that adds unknown edge endpoints automatically.
    pub fn adding_unknown_vertices() -> Self {
        Self::with_config(GraphConfig::new().add_unknown_vertices_in_edges(true))
    }

    /// The configuration fixed at construction.
    #[inline]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Whether `add_edge` adds missing endpoints instead of failing.
    #[inline]
    pub fn adds_unknown_vertices_in_edges(&self) -> bool {
        self.config.adds_unknown_vertices_in_edges()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Borrowed view of the vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        self.vertices.keys_slice()
    }

    /// Borrowed view of the edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Adds vertices, skipping any already present or repeated in the batch.
    ///
    /// Survivors keep their relative order and get an empty adjacency bucket.
    pub fn add_vertex<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in vertices {
            self.insert_vertex(vertex);
        }
        graph_trace!(total = self.vertices.len(), "add_vertex");
        self
    }

    /// Deletes vertices together with every edge touching them.
    ///
    /// Vertices not in the graph are ignored.
    pub fn delete_vertex<I, Q>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<V>,
    {
        for vertex in vertices {
            let vertex = vertex.borrow();
            if self.vertices.shift_remove(vertex).is_none() {
                continue;
            }
            self.edges.retain(|edge| !edge.touches(vertex));
            self.adjacency_matrix.delete_vertex(vertex);
            self.adjacency_list.delete_vertex(vertex);
            graph_trace!(vertex = ?vertex, edges = self.edges.len(), "delete_vertex");
        }
        self
    }

    /// Adds edges, skipping any already present or repeated in the batch.
    ///
    /// In strict mode every endpoint of every new edge must already be a
    /// vertex; otherwise nothing is added and [`GraphError::VertexNotFound`] is
    /// returned. In permissive mode missing endpoints are added first.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] for the first missing endpoint in strict mode.
    pub fn add_edge<I>(&mut self, edges: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Edge<V, W>>,
    {
        let mut fresh: Vec<Edge<V, W>> = Vec::new();
        for edge in edges {
            if !fresh.contains(&edge) && !self.edges.contains(&edge) {
                fresh.push(edge);
            }
        }

        if self.adds_unknown_vertices_in_edges() {
            for edge in &fresh {
                self.insert_vertex(edge.vertex_a().clone());
                self.insert_vertex(edge.vertex_b().clone());
            }
        } else {
            for edge in &fresh {
                self.validate_edge_vertices(edge)?;
            }
        }

        graph_trace!(added = fresh.len(), total = self.edges.len() + fresh.len(), "add_edge");
        for edge in fresh {
            self.insert_edge(edge);
        }
        Ok(self)
    }

    /// Deletes edges equal to the given ones.
    ///
    /// Matrix cells and adjacency entries are cleared only when no remaining
    /// edge still connects the same pair. Unknown edges are ignored.
    pub fn delete_edge<I, Q>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<Edge<V, W>>,
    {
        for edge in edges {
            let edge = edge.borrow();
            let Some(pos) = self.edges.iter().position(|e| e == edge) else {
                continue;
            };
            let removed = self.edges.remove(pos);
            let (a, b) = (removed.vertex_a(), removed.vertex_b());

            if !self.edges.iter().any(|e| e.leads(a, b)) {
                self.adjacency_matrix.unset(a, b);
            }
            if !self.edges.iter().any(|e| e.leads(b, a)) {
                self.adjacency_matrix.unset(b, a);
            }
            if !self.edges.iter().any(|e| e.connects(a, b)) {
                self.adjacency_list.delete_edge(&removed);
            }
            graph_trace!(edge = ?removed, remaining = self.edges.len(), "delete_edge");
        }
        self
    }

    /// `true` if a vertex equal to `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Position of `vertex` in the insertion-ordered vertex list.
    #[inline]
    pub fn vertex_position(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// Checks that `vertex` is in the graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if it is not.
    pub fn validate_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(vertex))
        }
    }

    /// Validates both endpoints of `edge`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] for the first missing endpoint.
    pub fn validate_edge_vertices(&self, edge: &Edge<V, W>) -> Result<()> {
        self.validate_vertex(edge.vertex_a())?;
        self.validate_vertex(edge.vertex_b())
    }

    /// Copy of the vertex list.
    pub fn vertex_list(&self) -> Vec<V> {
        self.vertices.keys_slice().to_vec()
    }

    /// Copy of the edge list.
    pub fn edge_list(&self) -> Vec<Edge<V, W>> {
        self.edges.clone()
    }

    /// Copy of the adjacency matrix.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<V> {
        self.adjacency_matrix.clone()
    }

    /// Copy of the adjacency list.
    pub fn adjacency_list(&self) -> AdjacencyList<V> {
        self.adjacency_list.clone()
    }

    /// Vertices sharing any edge with `vertex`, regardless of direction.
    pub fn adjacent_vertices(&self, vertex: &V) -> &[V] {
        self.adjacency_list.adjacent_vertices(vertex)
    }

    fn insert_vertex(&mut self, vertex: V) {
        if self.vertices.contains_key(&vertex) {
            return;
        }
        self.adjacency_list.init_vertex(vertex.clone());
        self.vertices.insert(vertex, ());
    }

    /// Appends an edge whose endpoints are known vertices and which is not yet present.
    fn insert_edge(&mut self, edge: Edge<V, W>) {
        debug_assert!(self.contains_vertex(edge.vertex_a()) && self.contains_vertex(edge.vertex_b()));
        self.adjacency_matrix.insert_edge(&edge);
        self.adjacency_list
            .add_adjacency(edge.vertex_a().clone(), edge.vertex_b().clone());
        self.edges.push(edge);
    }
}

impl<V: Vertex, W: Weight> PartialEq for Graph<V, W> {
    /// Structural equality: same configuration, same vertex and edge lists in
    /// the same order, and equivalent adjacency indices.
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.vertices.keys_slice() == other.vertices.keys_slice()
            && self.edges == other.edges
            && self.adjacency_matrix == other.adjacency_matrix
            && self.adjacency_list == other.adjacency_list
    }
}
