//! Adjacency indices maintained alongside the edge list.
//!
//! - `matrix`: directed one-hop reachability, O(1) pair lookups
//! - `list`: direction-agnostic neighbor buckets per vertex

pub mod list;
pub mod matrix;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
