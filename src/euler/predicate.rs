//! Eulerian existence predicate and trail classification.
//!
//! An undirected graph admits an Eulerian trail iff it is connected and
//! has zero odd-degree vertices (closed circuit) or exactly two (open
//! trail between them). Everything here is a pure query; the shared
//! start-vertex rule for both builders also lives in this module.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::NodeId;

/// Classification of a graph's Eulerian structure.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::{classify, EulerianClass};
/// use eulertrail::graph::GraphBuilder;
///
/// let triangle = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .add_edge("C", "A")
///     .build();
/// assert_eq!(classify(&triangle), EulerianClass::Circuit);
///
/// let path = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .build();
/// assert_eq!(classify(&path), EulerianClass::OpenTrail);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EulerianClass {
    /// Connected with all vertex degrees even: a closed Eulerian
    /// circuit exists (start = end).
    Circuit,
    /// Connected with exactly two odd-degree vertices: an open Eulerian
    /// trail exists between them.
    OpenTrail,
    /// No Eulerian trail: disconnected, empty, or more than two
    /// odd-degree vertices.
    Absent,
}

/// Classifies the Eulerian structure of `graph`.
///
/// Isolated vertices count as separate components, so a graph
/// containing one is disconnected and classified [`EulerianClass::Absent`].
/// The empty graph is `Absent`; a single edgeless vertex is a (trivial)
/// [`EulerianClass::Circuit`].
#[must_use]
pub fn classify(graph: &Graph) -> EulerianClass {
    if !graph.is_connected() {
        return EulerianClass::Absent;
    }
    match odd_vertices(graph).len() {
        0 => EulerianClass::Circuit,
        2 => EulerianClass::OpenTrail,
        _ => EulerianClass::Absent,
    }
}

/// Returns true if `graph` admits an Eulerian trail or circuit.
///
/// Equivalent to `classify(graph) != EulerianClass::Absent`.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::has_eulerian_trail;
/// use eulertrail::graph::GraphBuilder;
///
/// let star = GraphBuilder::new()
///     .add_edge("hub", "a")
///     .add_edge("hub", "b")
///     .add_edge("hub", "c")
///     .build();
/// // Three odd-degree leaves: no Eulerian trail.
/// assert!(!has_eulerian_trail(&star));
/// ```
#[must_use]
pub fn has_eulerian_trail(graph: &Graph) -> bool {
    classify(graph) != EulerianClass::Absent
}

/// Vertices of odd degree, in node insertion order.
#[must_use]
pub fn odd_vertices(graph: &Graph) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|node| graph.degree(node) % 2 == 1)
        .cloned()
        .collect()
}

/// Start-vertex rule shared by both trail builders: the first
/// odd-degree vertex in insertion order if any exist, otherwise the
/// first vertex. `None` only for the empty graph.
pub(super) fn start_vertex(graph: &Graph) -> Option<NodeId> {
    graph
        .nodes()
        .find(|node| graph.degree(node) % 2 == 1)
        .or_else(|| graph.nodes().next())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn classify_empty_graph_is_absent() {
        assert_eq!(classify(&Graph::new()), EulerianClass::Absent);
    }

    #[test]
    fn classify_single_vertex_is_trivial_circuit() {
        let graph = GraphBuilder::new().add_node("A").build();
        assert_eq!(classify(&graph), EulerianClass::Circuit);
    }

    #[test]
    fn isolated_vertex_defeats_the_predicate() {
        let graph = GraphBuilder::new()
            .add_edge("A", "B")
            .add_edge("B", "C")
            .add_edge("C", "A")
            .add_node("loner")
            .build();
        assert_eq!(classify(&graph), EulerianClass::Absent);
        assert!(!has_eulerian_trail(&graph));
    }

    #[test]
    fn start_vertex_prefers_first_odd() {
        // B and C are odd; B was inserted first.
        let graph = GraphBuilder::new()
            .add_edge("A", "B")
            .add_edge("A", "C")
            .add_edge("B", "C")
            .add_edge("B", "D")
            .add_edge("C", "D")
            .build();
        assert_eq!(
            odd_vertices(&graph),
            vec![NodeId::new("B"), NodeId::new("C")]
        );
        assert_eq!(start_vertex(&graph), Some("B".into()));
    }

    #[test]
    fn start_vertex_falls_back_to_first_node() {
        let graph = GraphBuilder::new()
            .add_edge("X", "Y")
            .add_edge("Y", "Z")
            .add_edge("Z", "X")
            .build();
        assert!(odd_vertices(&graph).is_empty());
        assert_eq!(start_vertex(&graph), Some("X".into()));
        assert_eq!(start_vertex(&Graph::new()), None);
    }
}
