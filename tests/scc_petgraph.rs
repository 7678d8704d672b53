//! Cross-checks strongly connected components against petgraph.

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use polygraph::{Edge, Graph};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn normalize(components: Vec<Vec<u8>>) -> BTreeSet<BTreeSet<u8>> {
    components
        .into_iter()
        .map(|component| component.into_iter().collect())
        .collect()
}

fn reference_components(vertices: &[u8], edges: &[(u8, u8, bool)]) -> BTreeSet<BTreeSet<u8>> {
    let mut reference = DiGraph::<u8, ()>::new();
    let nodes: Vec<_> = vertices.iter().map(|v| reference.add_node(*v)).collect();
    let node = |v: u8| nodes[vertices.iter().position(|x| *x == v).unwrap()];

    for &(a, b, directed) in edges {
        reference.add_edge(node(a), node(b), ());
        if !directed {
            reference.add_edge(node(b), node(a), ());
        }
    }

    normalize(
        tarjan_scc(&reference)
            .into_iter()
            .map(|component| component.into_iter().map(|n| reference[n]).collect())
            .collect(),
    )
}

#[test]
fn test_matches_petgraph_on_fixed_graph() {
    let edges = [
        (0, 1, true),
        (1, 2, true),
        (2, 0, true),
        (2, 3, true),
        (3, 4, false),
        (5, 5, true),
        (6, 4, true),
    ];
    let mut graph: Graph<u8> = Graph::adding_unknown_vertices();
    graph.add_vertex(0..8);
    graph
        .add_edge(edges.iter().map(|&(a, b, directed)| {
            if directed {
                Edge::directed(a, b)
            } else {
                Edge::undirected(a, b)
            }
        }))
        .unwrap();

    let ours = normalize(graph.strongly_connected_components());
    assert_eq!(ours, reference_components(graph.vertices(), &edges));
    assert!(ours.contains(&BTreeSet::from([0, 1, 2])));
    assert!(ours.contains(&BTreeSet::from([3, 4])));
    assert!(ours.contains(&BTreeSet::from([7])));
}

proptest! {
    #[test]
    fn test_matches_petgraph(
        edges in proptest::collection::vec((0u8..15, 0u8..15, any::<bool>()), 0..50)
    ) {
        let mut graph: Graph<u8> = Graph::adding_unknown_vertices();
        graph.add_vertex(0..15);
        graph
            .add_edge(edges.iter().map(|&(a, b, directed)| {
                if directed {
                    Edge::directed(a, b)
                } else {
                    Edge::undirected(a, b)
                }
            }))
            .unwrap();

        let ours = normalize(graph.strongly_connected_components());
        prop_assert_eq!(ours, reference_components(graph.vertices(), &edges));
    }
}
