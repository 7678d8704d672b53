//! Lazy depth-first traversal.
//!
//! [`Dfs`] is a pull-based iterator: each call to `next` runs one step of an
//! explicit-stack DFS and yields a [`DfsVisit`]. Dropping the iterator early
//! is the only form of cancellation needed; it holds nothing but borrows.
//!
//! Traversal order:
//! - the walk starts at the requested vertex, or at the smallest vertex under
//!   the order function when none is given or the given one is unknown;
//! - children come from [`Graph::child_vertices`], sorted ascending by the
//!   order function and pushed in reverse so they pop left to right;
//! - when the stack runs dry while vertices remain, the first unvisited vertex
//!   in vertex-list order becomes a fresh root with no predecessor;
//! - the predecessor of a visit is the vertex yielded just before it, so after
//!   backtracking it may not be adjacent and the taken edge is `None`.

use core::cmp::Ordering;

use super::Graph;
use crate::graph::{Edge, Vertex, VisitedSet, Weight};

/// Comparison used when no order function is supplied.
pub type NaturalOrder<V> = fn(&V, &V) -> Ordering;

/// One step of a depth-first traversal.
#[derive(Debug)]
pub struct DfsVisit<'g, V, W> {
    /// The vertex being visited.
    pub current: &'g V,
    /// The vertex yielded just before `current`, `None` for roots.
    pub previous: Option<&'g V>,
    /// First edge leading from `previous` to `current`, `None` for roots and
    /// when the traversal backtracked.
    pub taken_edge: Option<&'g Edge<V, W>>,
    /// The graph being traversed.
    pub graph: &'g Graph<V, W>,
    /// Zero-based position of this visit in the traversal.
    pub index: usize,
}

impl<V, W> Clone for DfsVisit<'_, V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W> Copy for DfsVisit<'_, V, W> {}

/// Depth-first iterator over a [`Graph`].
///
/// Every vertex is yielded exactly once, including vertices unreachable from
/// the start.
///
/// ```rust
/// use polygraph::{Edge, Graph};
///
/// let mut graph: Graph<char> = Graph::adding_unknown_vertices();
/// graph.add_edge([Edge::directed('a', 'c'), Edge::directed('a', 'b')])?;
/// graph.add_vertex(['d']);
///
/// let order: Vec<char> = graph.dfs_iter(None).map(|visit| *visit.current).collect();
/// assert_eq!(order, ['a', 'b', 'c', 'd']);
/// # Ok::<(), polygraph::GraphError>(())
/// ```
pub struct Dfs<'g, V, W, F = NaturalOrder<V>> {
    graph: &'g Graph<V, W>,
    visited: VisitedSet<'g, V>,
    stack: Vec<&'g V>,
    last: Option<&'g V>,
    order: F,
    yielded: usize,
}

impl<'g, V, W, F> Dfs<'g, V, W, F>
where
    V: Vertex,
    W: Weight,
    F: FnMut(&V, &V) -> Ordering,
{
    pub(crate) fn new(graph: &'g Graph<V, W>, start: Option<&V>, mut order: F) -> Self {
        let root = start
            .and_then(|s| graph.vertex_position(s))
            .and_then(|idx| graph.vertices().get(idx))
            .or_else(|| graph.vertices().iter().min_by(|a, b| order(*a, *b)));

        Self {
            graph,
            visited: VisitedSet::new(&graph.vertices),
            stack: root.into_iter().collect(),
            last: None,
            order,
            yielded: 0,
        }
    }

    /// Vertices visited so far.
    #[inline]
    pub fn visited(&self) -> &VisitedSet<'g, V> {
        &self.visited
    }
}

impl<'g, V, W, F> Iterator for Dfs<'g, V, W, F>
where
    V: Vertex,
    W: Weight,
    F: FnMut(&V, &V) -> Ordering,
{
    type Item = DfsVisit<'g, V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if self.visited.is_complete() {
                return None;
            }
            let current = match self.stack.pop() {
                Some(vertex) => vertex,
                None => {
                    self.last = None;
                    self.visited.first_unvisited()?
                }
            };
            if !self.visited.try_visit(current) {
                continue;
            }

            let mut children = graph.child_vertices(current);
            children.retain(|child| !self.visited.contains(child));
            children.sort_by(|a, b| (self.order)(*a, *b));
            self.stack.extend(children.into_iter().rev());

            let previous = self.last.replace(current);
            let taken_edge =
                previous.and_then(|prev| graph.edges_between(prev, current).into_iter().next());
            let index = self.yielded;
            self.yielded += 1;

            return Some(DfsVisit {
                current,
                previous,
                taken_edge,
                graph,
                index,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.vertex_count() - self.visited.len();
        (remaining, Some(remaining))
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Depth-first traversal with children in ascending [`Ord`] order.
    pub fn dfs_iter(&self, start: Option<&V>) -> Dfs<'_, V, W> {
        Dfs::new(self, start, <V as Ord>::cmp as NaturalOrder<V>)
    }

    /// Depth-first traversal with children ordered by `order`.
    pub fn dfs_iter_by<F>(&self, start: Option<&V>, order: F) -> Dfs<'_, V, W, F>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        Dfs::new(self, start, order)
    }

    /// Drives a full [`Graph::dfs_iter`] traversal, threading `payload`
    /// through `callback` once per visit, and returns the final payload.
    ///
    /// ```rust
    /// use polygraph::{Edge, Graph};
    ///
    /// let mut graph: Graph<u32> = Graph::adding_unknown_vertices();
    /// graph.add_edge([Edge::undirected(1, 2), Edge::undirected(2, 3)])?;
    ///
    /// let roots = graph.dfs_for_each(0, None, |visit, _, roots: &mut usize| {
    ///     if visit.previous.is_none() {
    ///         *roots += 1;
    ///     }
    /// });
    /// assert_eq!(roots, 1);
    /// # Ok::<(), polygraph::GraphError>(())
    /// ```
    pub fn dfs_for_each<P, C>(&self, payload: P, start: Option<&V>, callback: C) -> P
    where
        C: FnMut(&DfsVisit<'_, V, W>, &VisitedSet<'_, V>, &mut P),
    {
        drive(self.dfs_iter(start), payload, callback)
    }

    /// [`Graph::dfs_for_each`] with children ordered by `order`.
    pub fn dfs_for_each_by<P, F, C>(
        &self,
        payload: P,
        start: Option<&V>,
        order: F,
        callback: C,
    ) -> P
    where
        F: FnMut(&V, &V) -> Ordering,
        C: FnMut(&DfsVisit<'_, V, W>, &VisitedSet<'_, V>, &mut P),
    {
        drive(self.dfs_iter_by(start, order), payload, callback)
    }
}

fn drive<'g, V, W, F, P, C>(mut dfs: Dfs<'g, V, W, F>, mut payload: P, mut callback: C) -> P
where
    V: Vertex,
    W: Weight,
    F: FnMut(&V, &V) -> Ordering,
    C: FnMut(&DfsVisit<'_, V, W>, &VisitedSet<'_, V>, &mut P),
{
    while let Some(visit) = dfs.next() {
        callback(&visit, dfs.visited(), &mut payload);
    }
    payload
}
