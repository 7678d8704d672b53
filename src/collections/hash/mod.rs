//! Hash-based collections.
//!
//! The graph layer keys every structure by vertex value, so these maps rely
//! solely on the `Hash + Eq` contract of their keys.

pub mod index_map;

pub use index_map::IndexMap;
