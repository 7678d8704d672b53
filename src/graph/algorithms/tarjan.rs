//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that
//! every vertex can reach every other one through directed edges. Undirected
//! edges are traversable both ways, so in a purely undirected graph the
//! components are the connected components.

use crate::graph::{Graph, Vertex, Weight};

/// Computes the strongly connected components of `graph`.
///
/// Roots are tried in vertex-list order and children in vertex-list order,
/// so the result is deterministic for a given graph.
///
/// # Returns
///
/// Components in completion order, which is reverse topological order of the
/// condensation. Each component lists its vertices in stack pop order.
///
/// # Complexity
///
/// - Time: O(V * (V + E)) through `child_vertices`
/// - Space: O(V)
///
/// # Stack depth
///
/// The search recurses once per vertex on the current DFS path, so a directed
/// path of a few hundred thousand vertices can overflow the default thread
/// stack. Run such inputs on a thread with a larger stack.
///
/// # Examples
///
/// ```rust
/// use polygraph::{Edge, Graph, NamedVertex};
///
/// let [a, b, c] = ["a", "b", "c"].map(NamedVertex::new);
/// let mut graph: Graph<NamedVertex> = Graph::adding_unknown_vertices();
/// graph.add_edge([
///     Edge::directed(a.clone(), b.clone()),
///     Edge::directed(b.clone(), a.clone()),
///     Edge::directed(b.clone(), c.clone()),
/// ])?;
///
/// let sccs = graph.strongly_connected_components();
/// assert_eq!(sccs, vec![vec![c], vec![b, a]]);
/// # Ok::<(), polygraph::GraphError>(())
/// ```
pub fn strongly_connected_components<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Vec<Vec<V>> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(vertex_count);
    for v in 0..vertex_count {
        if state.index[v].is_none() {
            state.strongconnect(graph, v);
        }
    }

    state
        .sccs
        .into_iter()
        .map(|scc| scc.into_iter().map(|v| graph.vertices()[v].clone()).collect())
        .collect()
}

/// Per-run bookkeeping, indexed by vertex position.
struct TarjanState {
    /// Discovery time, `None` until visited.
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    current_index: usize,
    sccs: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn strongconnect<V: Vertex, W: Weight>(&mut self, graph: &Graph<V, W>, v: usize) {
        let discovered = self.current_index;
        self.index[v] = Some(discovered);
        self.lowlink[v] = discovered;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;

        let vertex = &graph.vertices()[v];
        let children: Vec<usize> = graph
            .child_vertices(vertex)
            .into_iter()
            .filter_map(|child| graph.vertex_position(child))
            .collect();

        for w in children {
            match self.index[w] {
                None => {
                    self.strongconnect(graph, w);
                    self.lowlink[v] = self.lowlink[v].min(self.lowlink[w]);
                }
                Some(w_index) if self.on_stack[w] => {
                    self.lowlink[v] = self.lowlink[v].min(w_index);
                }
                Some(_) => {}
            }
        }

        if self.lowlink[v] == discovered {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w] = false;
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }
}
