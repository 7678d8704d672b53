//! Error type shared by every fallible graph operation.

use core::fmt::Debug;

use thiserror::Error;

/// Errors raised by [`Graph`](crate::Graph) operations.
///
/// All graph operations are either total or fail with one of these variants
/// before mutating anything, so an `Err` never leaves a graph half-updated.
///
/// # Examples
///
/// ```rust
/// use polygraph::{Edge, Graph, GraphError, NamedVertex};
///
/// let mut graph: Graph<NamedVertex> = Graph::new();
/// let err = graph
///     .add_edge([Edge::directed(NamedVertex::new("a"), NamedVertex::new("b"))])
///     .unwrap_err();
/// assert!(matches!(err, GraphError::VertexNotFound { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex referenced by the caller is not part of the graph.
    ///
    /// Raised by strict-mode [`Graph::add_edge`](crate::Graph::add_edge),
    /// [`Graph::validate_vertex`](crate::Graph::validate_vertex) and
    /// [`Graph::subgraph`](crate::Graph::subgraph).
    #[error("Vertex {vertex} not found in graph")]
    VertexNotFound {
        /// `Debug` rendering of the missing vertex.
        vertex: String,
    },
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: Debug>(vertex: &V) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
