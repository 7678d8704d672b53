//! Graph model: vertices, edges, adjacency indices and the [`Graph`] container.
//!
//! - `vertex` / `edge`: the value types a graph is built from
//! - `adjacency`: the list and matrix indices kept in sync by [`Graph`]
//! - `access`: traversal bookkeeping
//! - `algorithms`: whole-graph algorithms

pub mod access;
pub mod adjacency;
pub mod algorithms;
pub mod config;
pub mod container;
pub mod edge;
pub mod vertex;

pub use access::VisitedSet;
pub use adjacency::{AdjacencyList, AdjacencyMatrix};
pub use config::GraphConfig;
pub use container::{Dfs, DfsVisit, Graph, NaturalOrder};
pub use edge::{Edge, EdgeKind, Weight};
pub use vertex::{NamedVertex, Vertex};
