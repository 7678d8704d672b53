//! Edges between two vertices: directed or undirected, optionally weighted.
//!
//! Every edge stores an ordered pair `(vertex_a, vertex_b)` plus an
//! [`EdgeKind`] tag. Equality dispatches on the tag:
//!
//! | kind | equal when |
//! |------|------------|
//! | `Directed` | same kind, `a == a'` and `b == b'` |
//! | `Undirected` | same kind, `{a, b} == {a', b'}` in either order |
//! | `WeightedDirected(w)` | as `Directed`, and `w == w'` |
//! | `WeightedUndirected(w)` | as `Undirected`, and `w == w'` |
//!
//! Edges of different kinds never compare equal, even over the same vertices.
//! Weights that are unordered against themselves (floating-point NaN) match
//! each other, so a NaN-weighted edge still equals its own copy.

use core::fmt;

use num_traits::Num;
use serde::{Deserialize, Serialize};

/// Numeric edge weight.
///
/// Implemented automatically for every numeric type with the required bounds
/// (`f64`, `i32`, `u64`, ...).
pub trait Weight: Num + Copy + PartialOrd + fmt::Debug {}

impl<T> Weight for T where T: Num + Copy + PartialOrd + fmt::Debug {}

/// Kind tag of an [`Edge`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeKind<W> {
    /// `a -> b`.
    Directed,
    /// `a -- b`.
    Undirected,
    /// `a -> b` carrying a weight.
    WeightedDirected(W),
    /// `a -- b` carrying a weight.
    WeightedUndirected(W),
}

impl<W> EdgeKind<W> {
    /// `true` for the directed kinds.
    #[inline]
    pub fn is_directed(&self) -> bool {
        matches!(self, EdgeKind::Directed | EdgeKind::WeightedDirected(_))
    }

    /// `true` for the weighted kinds.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        matches!(self, EdgeKind::WeightedDirected(_) | EdgeKind::WeightedUndirected(_))
    }
}

/// A connection between two vertices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge<V, W = f64> {
    vertex_a: V,
    vertex_b: V,
    kind: EdgeKind<W>,
}

impl<V, W> Edge<V, W> {
    /// Creates an edge of an explicit kind.
    pub fn new(vertex_a: V, vertex_b: V, kind: EdgeKind<W>) -> Self {
        Self {
            vertex_a,
            vertex_b,
            kind,
        }
    }

    /// Directed edge `from -> to`.
    pub fn directed(from: V, to: V) -> Self {
        Self::new(from, to, EdgeKind::Directed)
    }

    /// Undirected edge between `a` and `b`.
    pub fn undirected(a: V, b: V) -> Self {
        Self::new(a, b, EdgeKind::Undirected)
    }

    /// Directed edge `from -> to` with a weight.
    pub fn weighted_directed(from: V, to: V, weight: W) -> Self {
        Self::new(from, to, EdgeKind::WeightedDirected(weight))
    }

    /// Undirected edge between `a` and `b` with a weight.
    pub fn weighted_undirected(a: V, b: V, weight: W) -> Self {
        Self::new(a, b, EdgeKind::WeightedUndirected(weight))
    }

    /// First stored endpoint.
    #[inline]
    pub fn vertex_a(&self) -> &V {
        &self.vertex_a
    }

    /// Second stored endpoint.
    #[inline]
    pub fn vertex_b(&self) -> &V {
        &self.vertex_b
    }

    /// Source of a directed edge; alias of [`Edge::vertex_a`].
    #[inline]
    pub fn from(&self) -> &V {
        &self.vertex_a
    }

    /// Target of a directed edge; alias of [`Edge::vertex_b`].
    #[inline]
    pub fn to(&self) -> &V {
        &self.vertex_b
    }

    /// The kind tag.
    #[inline]
    pub fn kind(&self) -> &EdgeKind<W> {
        &self.kind
    }

    /// `true` if the edge has a direction.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Swaps the stored endpoints in place.
    ///
    /// For undirected edges the graph meaning is unchanged, but the stored
    /// pair is still rewritten.
    pub fn transpose(&mut self) {
        core::mem::swap(&mut self.vertex_a, &mut self.vertex_b);
    }
}

impl<V, W: Copy> Edge<V, W> {
    /// The weight of a weighted edge.
    pub fn weight(&self) -> Option<W> {
        match self.kind {
            EdgeKind::WeightedDirected(w) | EdgeKind::WeightedUndirected(w) => Some(w),
            EdgeKind::Directed | EdgeKind::Undirected => None,
        }
    }
}

impl<V: PartialEq, W> Edge<V, W> {
    /// `true` if either endpoint equals `vertex`.
    #[inline]
    pub fn touches(&self, vertex: &V) -> bool {
        self.vertex_a == *vertex || self.vertex_b == *vertex
    }

    /// `true` if the edge joins `a` and `b`, ignoring direction.
    #[inline]
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.vertex_a == *a && self.vertex_b == *b) || (self.vertex_a == *b && self.vertex_b == *a)
    }

    /// `true` if the edge can be traversed from `from` to `to` in one hop.
    #[inline]
    pub fn leads(&self, from: &V, to: &V) -> bool {
        (self.vertex_a == *from && self.vertex_b == *to)
            || (!self.is_directed() && self.vertex_a == *to && self.vertex_b == *from)
    }
}

impl<V: PartialEq, W: PartialOrd> PartialEq for Edge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (EdgeKind::Directed, EdgeKind::Directed) => {
                self.vertex_a == other.vertex_a && self.vertex_b == other.vertex_b
            }
            (EdgeKind::Undirected, EdgeKind::Undirected) => {
                other.connects(&self.vertex_a, &self.vertex_b)
            }
            (EdgeKind::WeightedDirected(w), EdgeKind::WeightedDirected(w2)) => {
                same_weight(w, w2) && self.vertex_a == other.vertex_a && self.vertex_b == other.vertex_b
            }
            (EdgeKind::WeightedUndirected(w), EdgeKind::WeightedUndirected(w2)) => {
                same_weight(w, w2) && other.connects(&self.vertex_a, &self.vertex_b)
            }
            _ => false,
        }
    }
}

fn same_weight<W: PartialOrd>(w: &W, w2: &W) -> bool {
    let unordered = |x: &W| x.partial_cmp(x).is_none();
    w == w2 || (unordered(w) && unordered(w2))
}

impl<V: fmt::Display, W: fmt::Debug> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_directed() { "->" } else { "--" };
        write!(f, "{} {arrow} {}", self.vertex_a, self.vertex_b)?;
        match &self.kind {
            EdgeKind::WeightedDirected(w) | EdgeKind::WeightedUndirected(w) => write!(f, " ({w:?})"),
            EdgeKind::Directed | EdgeKind::Undirected => Ok(()),
        }
    }
}
