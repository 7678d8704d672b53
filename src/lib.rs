//! # `polygraph` - Multi-representation Graph Container
//!
//! An in-memory graph that keeps four synchronized views of the same data:
//! an insertion-ordered vertex list, an edge list, a direction-agnostic
//! adjacency list and a sparse directed adjacency matrix. Every mutation
//! updates all four before returning, so each query reads from whichever view
//! answers it fastest.
//!
//! ## Key Features
//!
//! - **Mixed edge kinds**: directed, undirected, weighted and unweighted edges in one graph
//! - **Kind-aware equality**: undirected edges compare unordered, edges of different kinds never match
//! - **Strict or permissive**: unknown edge endpoints either fail or are added on the fly
//! - **Algorithms**: lazy depth-first traversal, Tarjan strongly connected components,
//!   induced subgraphs and in-place transpose
//!
//! ## Architecture
//!
//! 1. **Collections** ([`IndexMap`], [`Matrix`]):
//!    - Insertion-ordered open-addressing hash map
//!    - Sparse two-key map with a default value
//!
//! 2. **Graph model** ([`Vertex`], [`Edge`], [`AdjacencyList`], [`AdjacencyMatrix`]):
//!    - Value types and the derived indices
//!
//! 3. **Container** ([`Graph`]):
//!    - Mutations that keep every index consistent
//!    - Queries, traversal and algorithms
//!
//! ## Example
//!
//! ```rust
//! use polygraph::{Edge, Graph, NamedVertex};
//!
//! let [a, b, c] = ["a", "b", "c"].map(NamedVertex::new);
//! let mut graph: Graph<NamedVertex> = Graph::new();
//! graph.add_vertex([a.clone(), b.clone(), c.clone()]);
//! graph.add_edge([
//!     Edge::directed(a.clone(), b.clone()),
//!     Edge::undirected(b.clone(), c.clone()),
//! ])?;
//!
//! assert_eq!(graph.child_vertices(&b), vec![&c]);
//! assert_eq!(graph.adjacent_vertices(&b), &[a.clone(), c.clone()]);
//!
//! let order: Vec<_> = graph.dfs_iter(None).map(|visit| visit.current.name()).collect();
//! assert_eq!(order, ["a", "b", "c"]);
//! # Ok::<(), polygraph::GraphError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events under the `polygraph` target for every
//!   graph mutation.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{IndexMap, Matrix};
pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyList,
    AdjacencyMatrix,
    Dfs,
    DfsVisit,
    Edge,
    EdgeKind,
    Graph,
    GraphConfig,
    NamedVertex,
    Vertex,
    VisitedSet,
    Weight,
};
