//! Vertex capability and the string-named vertex.

use core::fmt;
use core::hash::Hash;

use serde::{Deserialize, Serialize};

/// Identity contract every vertex type must satisfy.
///
/// Vertices are compared by value: equality, hashing and the total order must
/// agree (`a == b` implies `a.cmp(&b) == Equal` and equal hashes). Graph
/// structures key all of their indices through this contract, so two separate
/// instances that compare equal denote the same vertex.
///
/// Implemented automatically for every type with the required bounds.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A vertex identified by its name.
///
/// Equality, hashing and ordering derive from `name` alone; ordering is
/// lexicographic over the string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedVertex {
    name: String,
}

impl NamedVertex {
    /// Creates a vertex with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The vertex name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for NamedVertex {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NamedVertex {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
