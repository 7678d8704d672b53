use polygraph::{Edge, Graph};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(Vec<u8>),
    DeleteVertex(u8),
    AddEdge(u8, u8, u8),
    DeleteEdge(u8, u8, u8),
    Transpose,
}

fn edge(a: u8, b: u8, kind: u8) -> Edge<u8, i32> {
    match kind % 4 {
        0 => Edge::directed(a, b),
        1 => Edge::undirected(a, b),
        2 => Edge::weighted_directed(a, b, i32::from(kind)),
        _ => Edge::weighted_undirected(a, b, i32::from(kind)),
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        proptest::collection::vec(0u8..12, 0..4).prop_map(Operation::AddVertex),
        (0u8..12).prop_map(Operation::DeleteVertex),
        (0u8..12, 0u8..12, any::<u8>()).prop_map(|(a, b, k)| Operation::AddEdge(a, b, k)),
        (0u8..12, 0u8..12, any::<u8>()).prop_map(|(a, b, k)| Operation::DeleteEdge(a, b, k)),
        Just(Operation::Transpose),
    ]
}

fn apply(graph: &mut Graph<u8, i32>, op: &Operation) {
    match op {
        Operation::AddVertex(vertices) => {
            graph.add_vertex(vertices.iter().copied());
        }
        Operation::DeleteVertex(vertex) => {
            graph.delete_vertex([*vertex]);
        }
        Operation::AddEdge(a, b, k) => {
            graph.add_edge([edge(*a, *b, *k)]).unwrap();
        }
        Operation::DeleteEdge(a, b, k) => {
            graph.delete_edge([edge(*a, *b, *k)]);
        }
        Operation::Transpose => {
            graph.transpose();
        }
    }
}

fn assert_consistent(graph: &Graph<u8, i32>) {
    let vertices = graph.vertices();
    let distinct: HashSet<_> = vertices.iter().collect();
    assert_eq!(distinct.len(), vertices.len(), "duplicate vertices");

    for (i, e) in graph.edges().iter().enumerate() {
        assert!(graph.contains_vertex(e.vertex_a()), "dangling edge {e:?}");
        assert!(graph.contains_vertex(e.vertex_b()), "dangling edge {e:?}");
        assert!(
            !graph.edges()[i + 1..].contains(e),
            "duplicate edge {e:?}"
        );
    }

    let matrix = graph.adjacency_matrix();
    let list = graph.adjacency_list();
    assert_eq!(list.len(), vertices.len(), "bucket count");

    for x in vertices {
        let neighbors = list.adjacent_vertices(x);
        let unique: HashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), neighbors.len(), "duplicate neighbor of {x}");

        for y in vertices {
            let leads = graph.edges().iter().any(|e| e.leads(x, y));
            let connects = graph.edges().iter().any(|e| e.connects(x, y));
            assert_eq!(matrix.get(x, y), leads, "matrix cell ({x}, {y})");
            assert_eq!(neighbors.contains(y), connects, "adjacency ({x}, {y})");
        }

        let expected: Vec<&u8> = vertices.iter().filter(|y| matrix.get(x, y)).collect();
        assert_eq!(graph.child_vertices(x), expected, "children of {x}");
    }
}

proptest! {
    #[test]
    fn test_indices_stay_consistent(ops in proptest::collection::vec(operation(), 1..60)) {
        let mut graph: Graph<u8, i32> = Graph::adding_unknown_vertices();
        for op in &ops {
            apply(&mut graph, op);
            assert_consistent(&graph);
        }
    }

    #[test]
    fn test_add_vertex_keeps_first_seen_order(batch in proptest::collection::vec(0u8..20, 0..40)) {
        let mut graph: Graph<u8, i32> = Graph::new();
        graph.add_vertex(batch.iter().copied());

        let mut seen = HashSet::new();
        let expected: Vec<u8> = batch.iter().copied().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(graph.vertex_list(), expected);
    }

    #[test]
    fn test_add_then_delete_edge_restores(
        ops in proptest::collection::vec(operation(), 0..30),
        a in 0u8..12,
        b in 0u8..12,
        k in any::<u8>(),
    ) {
        let mut graph: Graph<u8, i32> = Graph::adding_unknown_vertices();
        for op in &ops {
            apply(&mut graph, op);
        }
        graph.add_vertex([a, b]);
        let candidate = edge(a, b, k);
        prop_assume!(!graph.edges().contains(&candidate));

        let matrix = graph.adjacency_matrix();
        let list = graph.adjacency_list();
        graph.add_edge([candidate.clone()]).unwrap();
        graph.delete_edge([&candidate]);

        prop_assert_eq!(graph.adjacency_matrix(), matrix);
        prop_assert_eq!(graph.adjacency_list(), list);
    }

    #[test]
    fn test_transpose_twice_is_identity(ops in proptest::collection::vec(operation(), 0..40)) {
        let mut graph: Graph<u8, i32> = Graph::adding_unknown_vertices();
        for op in &ops {
            apply(&mut graph, op);
        }
        let saved = graph.clone();
        graph.transpose().transpose();
        prop_assert_eq!(graph, saved);
    }

    #[test]
    fn test_dfs_and_scc_cover_every_vertex(ops in proptest::collection::vec(operation(), 0..40)) {
        let mut graph: Graph<u8, i32> = Graph::adding_unknown_vertices();
        for op in &ops {
            apply(&mut graph, op);
        }

        let mut visited: Vec<u8> = graph.dfs_iter(None).map(|visit| *visit.current).collect();
        visited.sort_unstable();
        let mut sccs: Vec<u8> = graph.strongly_connected_components().into_iter().flatten().collect();
        sccs.sort_unstable();
        let mut vertices = graph.vertex_list();
        vertices.sort_unstable();

        prop_assert_eq!(&visited, &vertices);
        prop_assert_eq!(&sccs, &vertices);
    }
}
