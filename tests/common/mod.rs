//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use eulertrail::graph::{Graph, GraphBuilder};
use eulertrail::trail::Trail;

/// The six-vertex reference graph: odd degrees at B and E only.
///
/// Degrees: A=2, B=3, C=4, D=4, E=3, F=2.
pub fn six_vertex_graph() -> Graph {
    GraphBuilder::new()
        .add_edge("A", "B")
        .add_edge("A", "C")
        .add_edge("B", "C")
        .add_edge("B", "D")
        .add_edge("C", "D")
        .add_edge("C", "E")
        .add_edge("D", "E")
        .add_edge("D", "F")
        .add_edge("E", "F")
        .build()
}

/// Triangle: every degree even, Eulerian circuit, no bridges.
pub fn triangle() -> Graph {
    GraphBuilder::new()
        .add_edge("A", "B")
        .add_edge("B", "C")
        .add_edge("C", "A")
        .build()
}

/// Two-edge path: two odd endpoints, both edges are bridges.
pub fn two_edge_path() -> Graph {
    GraphBuilder::new().add_edge("A", "B").add_edge("B", "C").build()
}

/// Star with three leaves: four odd-degree vertices, no Eulerian trail.
pub fn three_leaf_star() -> Graph {
    GraphBuilder::new()
        .add_edge("hub", "a")
        .add_edge("hub", "b")
        .add_edge("hub", "c")
        .build()
}

/// Two disjoint edges: connected components = 2.
pub fn disconnected_pairs() -> Graph {
    GraphBuilder::new().add_edge("A", "B").add_edge("C", "D").build()
}

/// Asserts the Eulerian coverage invariant for `trail` over `graph`.
pub fn assert_covers(trail: &Trail, graph: &Graph) {
    assert!(
        trail.covers(graph),
        "trail {trail} does not cover the graph's {} edges exactly once",
        graph.edge_count()
    );
    assert_eq!(trail.len(), graph.edge_count() + 1);
}
