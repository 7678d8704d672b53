//! Serde support.
//!
//! A graph is written as its configuration, vertex list and edge list. The
//! adjacency indices are derived data and are rebuilt on load by replaying
//! `add_vertex` then `add_edge`, so a hand-edited document cannot produce an
//! inconsistent graph.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Graph;
use crate::graph::{Edge, GraphConfig, Vertex, Weight};

#[derive(serde::Serialize)]
#[serde(rename = "Graph")]
struct GraphRef<'a, V, W> {
    config: GraphConfig,
    vertices: &'a [V],
    edges: &'a [Edge<V, W>],
}

#[derive(serde::Deserialize)]
#[serde(
    rename = "Graph",
    bound(deserialize = "V: serde::Deserialize<'de>, W: serde::Deserialize<'de>")
)]
struct GraphRepr<V, W> {
    #[serde(default)]
    config: GraphConfig,
    #[serde(default)]
    vertices: Vec<V>,
    #[serde(default)]
    edges: Vec<Edge<V, W>>,
}

impl<V: Serialize, W: Serialize> Serialize for Graph<V, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphRef {
            config: self.config,
            vertices: self.vertices(),
            edges: self.edges(),
        }
        .serialize(serializer)
    }
}

impl<'de, V, W> Deserialize<'de> for Graph<V, W>
where
    V: Vertex + Deserialize<'de>,
    W: Weight + Deserialize<'de>,
{
    /// # Errors
    ///
    /// Fails if the document is malformed, or if the configuration is strict
    /// and an edge references a vertex missing from `vertices`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphRepr::<V, W>::deserialize(deserializer)?;
        let mut graph = Graph::with_config(repr.config);
        graph.add_vertex(repr.vertices);
        graph.add_edge(repr.edges).map_err(de::Error::custom)?;
        Ok(graph)
    }
}
