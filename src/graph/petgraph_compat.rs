//! Optional petgraph compatibility layer.
//!
//! This module provides conversion between this crate's [`Graph`] and
//! petgraph's `UnGraph` type, enabling cross-verification against
//! petgraph's algorithm library and DOT export for visualization.
//!
//! # Feature Gate
//!
//! Only available when the `petgraph-compat` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! eulertrail = { version = "0.1", features = ["petgraph-compat"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use eulertrail::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new()
//!     .add_edge("A", "B")
//!     .add_edge("B", "C")
//!     .build();
//!
//! let conversion = graph.to_petgraph();
//! assert_eq!(petgraph::algo::connected_components(&conversion.graph), 1);
//!
//! let dot = graph.to_dot();
//! std::fs::write("graph.dot", dot)?;
//! // Then: dot -Tpng graph.dot -o graph.png
//! ```

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;

use super::model::Graph;
use crate::types::NodeId;

/// A petgraph-compatible undirected graph.
///
/// Node weights are [`NodeId`] values, edge weights are unit type `()`.
pub type UndirectedGraph = UnGraph<NodeId, ()>;

/// Mapping from [`NodeId`] to petgraph `NodeIndex`.
pub type NodeIndexMap = FxHashMap<NodeId, NodeIndex>;

/// Result of converting a [`Graph`] to petgraph format.
///
/// Contains both the converted graph and a mapping from [`NodeId`] to
/// petgraph indices for convenient lookup.
#[derive(Debug, Clone)]
pub struct PetgraphConversion {
    /// The petgraph undirected graph.
    pub graph: UndirectedGraph,
    /// Mapping from [`NodeId`] to petgraph `NodeIndex`.
    pub index_map: NodeIndexMap,
}

impl PetgraphConversion {
    /// Look up the petgraph index for a vertex.
    #[must_use]
    pub fn index_of(&self, node: &NodeId) -> Option<NodeIndex> {
        self.index_map.get(node).copied()
    }

    /// Get the vertex at a petgraph index.
    #[must_use]
    pub fn node_at(&self, index: NodeIndex) -> Option<&NodeId> {
        self.graph.node_weight(index)
    }
}

impl Graph {
    /// Converts this graph to a petgraph `UnGraph`.
    ///
    /// Vertex indices follow insertion order, so conversion is
    /// deterministic: the same graph always yields the same indices.
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphConversion {
        let mut graph = UndirectedGraph::new_undirected();
        let mut index_map: NodeIndexMap = FxHashMap::default();

        for node in self.nodes() {
            let idx = graph.add_node(node.clone());
            index_map.insert(node.clone(), idx);
        }
        for edge in self.edges() {
            let (u, v) = edge.endpoints();
            graph.add_edge(index_map[u], index_map[v], ());
        }

        PetgraphConversion { graph, index_map }
    }

    /// Counts connected components using petgraph's algorithm.
    ///
    /// Cross-verification counterpart to
    /// [`component_count`](Graph::component_count).
    #[must_use]
    pub fn petgraph_component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph().graph)
    }

    /// Exports the graph to DOT format for visualization.
    ///
    /// The output renders with Graphviz tools (`dot`, `neato`, ...) or
    /// online viewers.
    #[must_use]
    pub fn to_dot(&self) -> String {
        use std::fmt::Write;

        let conversion = self.to_petgraph();
        let mut output = String::new();

        let _ = writeln!(output, "graph {{");
        let _ = writeln!(output, "    node [shape=circle];");
        for idx in conversion.graph.node_indices() {
            if let Some(node) = conversion.graph.node_weight(idx) {
                let _ = writeln!(output, "    {} [ label=\"{}\" ];", idx.index(), node);
            }
        }
        let _ = writeln!(output);
        for edge in conversion.graph.edge_indices() {
            if let Some((u, v)) = conversion.graph.edge_endpoints(edge) {
                let _ = writeln!(output, "    {} -- {};", u.index(), v.index());
            }
        }
        let _ = writeln!(output, "}}");

        output
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    fn triangle() -> crate::graph::Graph {
        GraphBuilder::new()
            .add_edge("A", "B")
            .add_edge("B", "C")
            .add_edge("C", "A")
            .build()
    }

    #[test]
    fn test_to_petgraph_counts() {
        let conversion = triangle().to_petgraph();
        assert_eq!(conversion.graph.node_count(), 3);
        assert_eq!(conversion.graph.edge_count(), 3);
        assert!(conversion.index_of(&"A".into()).is_some());
        assert!(conversion.index_of(&"Z".into()).is_none());
    }

    #[test]
    fn test_component_counts_agree() {
        let mut graph = triangle();
        graph.add_edge("X", "Y");
        assert_eq!(graph.component_count(), graph.petgraph_component_count());
        assert_eq!(graph.petgraph_component_count(), 2);
    }

    #[test]
    fn test_to_dot_output() {
        let dot = triangle().to_dot();
        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("label=\"A\""));
        assert!(dot.contains("--"));
    }

    #[test]
    fn test_deterministic_indices() {
        let graph = triangle();
        let conv1 = graph.to_petgraph();
        let conv2 = graph.to_petgraph();
        assert_eq!(conv1.index_of(&"B".into()), conv2.index_of(&"B".into()));
    }
}
