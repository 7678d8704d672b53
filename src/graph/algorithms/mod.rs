//! Graph algorithms that run over a [`Graph`](crate::Graph).

pub mod tarjan;

pub use tarjan::strongly_connected_components;
