//! Keyed containers backing the graph representations.
//!
//! - `hash`: insertion-ordered hash map keyed by value equality
//! - `matrix`: sparse two-key map with a default value

pub mod hash;
pub mod matrix;

pub use hash::IndexMap;
pub use matrix::Matrix;
