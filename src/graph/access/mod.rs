//! Traversal bookkeeping shared by graph algorithms.

pub mod visited;

pub use visited::VisitedSet;
