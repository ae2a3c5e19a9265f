//! GraphBuilder implementation for constructing undirected graphs.
//!
//! This module contains the fluent builder used to assemble a
//! [`Graph`] before handing it to the Eulerian algorithms.

use super::model::Graph;
use crate::types::NodeId;

/// Builder for constructing undirected graphs with a fluent API.
///
/// `GraphBuilder` is a thin, infallible layer over [`Graph`]: nodes and
/// edges are added in order, and [`build`](Self::build) hands back the
/// finished graph. Mutations that would violate the simple-graph model
/// (self-loops, duplicate edges) are ignored with a `tracing` warning
/// rather than failing the build.
///
/// # Examples
///
/// ```rust
/// use eulertrail::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .add_node("A")
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates a new, empty graph builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex to the graph.
    ///
    /// Registering a vertex twice is a no-op; vertices referenced by
    /// [`add_edge`](Self::add_edge) are registered automatically, so
    /// explicit `add_node` calls are only needed for vertices that may
    /// end up isolated.
    #[must_use]
    pub fn add_node(mut self, id: impl Into<NodeId>) -> Self {
        self.graph.add_node(id);
        self
    }

    /// Adds an undirected edge between two vertices.
    ///
    /// Endpoints not yet registered are added in the order they appear.
    /// Self-loops and duplicate edges are ignored with a warning.
    #[must_use]
    pub fn add_edge(mut self, u: impl Into<NodeId>, v: impl Into<NodeId>) -> Self {
        self.graph.add_edge(u, v);
        self
    }

    /// Finishes the build and returns the graph.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }
}
