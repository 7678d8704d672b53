//! Graph construction options.

use serde::{Deserialize, Serialize};

/// Options fixed when a [`Graph`](crate::Graph) is created.
///
/// The default is strict: edges may only reference vertices that were added
/// beforehand.
///
/// ```rust
/// use polygraph::GraphConfig;
///
/// let config = GraphConfig::new().add_unknown_vertices_in_edges(true);
/// assert!(config.adds_unknown_vertices_in_edges());
/// assert!(!GraphConfig::default().adds_unknown_vertices_in_edges());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    add_unknown_vertices_in_edges: bool,
}

impl GraphConfig {
    /// Strict configuration.
    pub const fn new() -> Self {
        Self {
            add_unknown_vertices_in_edges: false,
        }
    }

    /// When `true`, `add_edge` silently adds endpoints missing from the graph
    /// instead of failing with `VertexNotFound`.
    #[must_use]
    pub const fn add_unknown_vertices_in_edges(mut self, enabled: bool) -> Self {
        self.add_unknown_vertices_in_edges = enabled;
        self
    }

    /// Whether unknown edge endpoints are added automatically.
    #[inline]
    pub const fn adds_unknown_vertices_in_edges(&self) -> bool {
        self.add_unknown_vertices_in_edges
    }
}
