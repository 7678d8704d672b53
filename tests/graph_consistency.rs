//! End-to-end checks through the public API.

use anyhow::Result;
use polygraph::{Edge, Graph, GraphError, NamedVertex};

fn v(name: &str) -> NamedVertex {
    NamedVertex::new(name)
}

fn vs(names: &[&str]) -> Vec<NamedVertex> {
    names.iter().map(|name| v(name)).collect()
}

fn petersen() -> Result<Graph<NamedVertex>> {
    let mut graph = Graph::new();
    graph.add_vertex(vs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]));
    let pairs = [
        ("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a"),
        ("a", "f"), ("b", "g"), ("c", "h"), ("d", "i"), ("e", "j"),
        ("f", "h"), ("h", "j"), ("j", "g"), ("g", "i"), ("i", "f"),
    ];
    graph.add_edge(pairs.iter().map(|(x, y)| Edge::undirected(v(x), v(y))))?;
    Ok(graph)
}

#[test]
fn test_petersen_is_three_regular() -> Result<()> {
    let graph = petersen()?;
    for vertex in graph.vertices() {
        assert_eq!(graph.adjacent_vertices(vertex).len(), 3, "degree of {vertex}");
        assert_eq!(graph.child_vertices(vertex).len(), 3, "children of {vertex}");
        assert_eq!(graph.attached_edges(vertex).len(), 3);
        assert_eq!(graph.outgoing_edges(vertex), graph.incoming_edges(vertex));
    }
    assert_eq!(graph.strongly_connected_components().len(), 1);
    Ok(())
}

#[test]
fn test_induced_subgraph_matches_expected_edges() -> Result<()> {
    let graph = petersen()?;
    let sub = graph.subgraph(&vs(&["a", "b", "d", "e", "i", "j"]))?;

    let mut expected = vec![
        Edge::undirected(v("a"), v("b")),
        Edge::undirected(v("d"), v("e")),
        Edge::undirected(v("d"), v("i")),
        Edge::undirected(v("e"), v("j")),
        Edge::undirected(v("e"), v("a")),
    ];
    let actual = sub.edge_list();
    assert_eq!(actual.len(), expected.len());
    expected.retain(|e| !actual.contains(e));
    assert!(expected.is_empty(), "missing edges: {expected:?}");

    assert_eq!(
        sub.strongly_connected_components().len(),
        1,
        "a-b, a-e-d-i and e-j are all joined through a and e"
    );
    Ok(())
}

#[test]
fn test_directed_petersen_subgraph_keeps_direction() -> Result<()> {
    let mut graph: Graph<NamedVertex> = Graph::new();
    graph.add_vertex(vs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]));
    let pairs = [
        ("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a"),
        ("a", "f"), ("b", "g"), ("c", "h"), ("d", "i"), ("e", "j"),
        ("f", "h"), ("h", "j"), ("j", "g"), ("g", "i"), ("i", "f"),
    ];
    graph.add_edge(pairs.iter().map(|(x, y)| Edge::directed(v(x), v(y))))?;

    let sub = graph.subgraph(&vs(&["a", "b", "d", "e", "i", "j"]))?;
    let mut expected = vec![
        Edge::directed(v("a"), v("b")),
        Edge::directed(v("d"), v("e")),
        Edge::directed(v("d"), v("i")),
        Edge::directed(v("e"), v("j")),
        Edge::directed(v("e"), v("a")),
    ];
    let actual = sub.edge_list();
    assert_eq!(actual.len(), expected.len());
    expected.retain(|e| !actual.contains(e));
    assert!(expected.is_empty(), "missing edges: {expected:?}");
    assert!(!actual.contains(&Edge::directed(v("a"), v("e"))));

    // No cycle survives: a -> b and e -> a, but nothing leads back to e.
    assert_eq!(sub.strongly_connected_components().len(), 6);
    Ok(())
}

#[test]
fn test_subgraph_of_unknown_vertex_is_rejected() -> Result<()> {
    let graph = petersen()?;
    match graph.subgraph(&[v("a"), v("k")]) {
        Err(GraphError::VertexNotFound { vertex }) => assert!(vertex.contains("\"k\"")),
        other => panic!("expected VertexNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_directed_cycle_with_tails() -> Result<()> {
    let mut graph: Graph<NamedVertex> = Graph::new();
    graph.add_vertex(vs(&["a", "b", "c", "d", "e"]));
    graph.add_edge([
        Edge::directed(v("a"), v("b")),
        Edge::directed(v("b"), v("c")),
        Edge::directed(v("c"), v("a")),
        Edge::directed(v("d"), v("a")),
        Edge::directed(v("e"), v("d")),
    ])?;

    let sccs = graph.strongly_connected_components();
    assert_eq!(sccs, vec![vs(&["c", "b", "a"]), vs(&["d"]), vs(&["e"])]);

    graph.transpose();
    let transposed: Vec<usize> = graph
        .strongly_connected_components()
        .iter()
        .map(Vec::len)
        .collect();
    assert_eq!(transposed.iter().sum::<usize>(), 5);
    assert!(transposed.contains(&3));
    Ok(())
}

#[test]
fn test_dfs_records_predecessors_and_edges() -> Result<()> {
    let mut graph: Graph<NamedVertex> = Graph::new();
    graph.add_vertex(vs(&["a", "b", "c", "d", "e"]));
    graph.add_edge([
        Edge::directed(v("a"), v("c")),
        Edge::directed(v("c"), v("b")),
        Edge::directed(v("e"), v("c")),
    ])?;

    let trail = graph.dfs_for_each(Vec::new(), None, |visit, _, trail: &mut Vec<String>| {
        let previous = visit.previous.map_or("-", NamedVertex::name);
        trail.push(format!("{previous}>{}", visit.current));
    });
    assert_eq!(trail, ["->a", "a>c", "c>b", "->d", "->e"]);
    Ok(())
}

#[test]
fn test_mixed_edges_between_same_pair() -> Result<()> {
    let mut graph: Graph<NamedVertex, u32> = Graph::adding_unknown_vertices();
    let edges = [
        Edge::directed(v("x"), v("y")),
        Edge::undirected(v("x"), v("y")),
        Edge::weighted_directed(v("x"), v("y"), 4),
        Edge::weighted_undirected(v("y"), v("x"), 4),
    ];
    graph.add_edge(edges.clone())?;
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edges_between(&v("y"), &v("x")).len(), 2);

    graph.delete_edge(&edges[1..]);
    assert!(graph.adjacency_matrix().get(&v("x"), &v("y")));
    assert!(!graph.adjacency_matrix().get(&v("y"), &v("x")));
    assert_eq!(graph.adjacent_vertices(&v("y")), &[v("x")]);

    graph.delete_edge([&edges[0], &edges[2]]);
    assert!(graph.adjacency_matrix().as_matrix().iter().all(|(_, _, set)| !set));
    assert!(graph.adjacent_vertices(&v("x")).is_empty());
    Ok(())
}
