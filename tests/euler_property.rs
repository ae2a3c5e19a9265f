//! Property tests over small random simple graphs.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use eulertrail::euler::{EulerianClass, classify, fleury, hierholzer, is_bridge, odd_vertices};
use eulertrail::graph::Graph;
use eulertrail::types::{Edge, NodeId};

/// Vertex pool used by the generators.
const POOL: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Generate a random simple graph over up to six vertices.
///
/// Self-loops and duplicate pairs are dropped by the graph itself, so
/// the raw pair list can be arbitrary.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    prop::collection::vec((0..POOL.len(), 0..POOL.len()), 0..14).prop_map(|pairs| {
        let mut graph = Graph::new();
        for (u, v) in pairs {
            if u != v {
                graph.add_edge(POOL[u], POOL[v]);
            }
        }
        graph
    })
}

/// Multiset of a trail's consecutive-pair edges.
fn edge_multiset(nodes: &[NodeId]) -> FxHashMap<Edge, usize> {
    let mut counts = FxHashMap::default();
    for pair in nodes.windows(2) {
        *counts
            .entry(Edge::new(pair[0].clone(), pair[1].clone()))
            .or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_builders_agree_with_classification(graph in graph_strategy()) {
        match classify(&graph) {
            EulerianClass::Absent => {
                prop_assert!(hierholzer(&graph).is_absent());
                // Fleury's precondition does not hold; it is not invoked.
            }
            class => {
                let fleury_trail = fleury(&graph).expect("precondition holds");
                let hierholzer_trail = hierholzer(&graph).trail().expect("trail exists");

                for trail in [&fleury_trail, &hierholzer_trail] {
                    prop_assert!(trail.covers(&graph));
                    prop_assert_eq!(trail.len(), graph.edge_count() + 1);
                }

                match class {
                    EulerianClass::Circuit => {
                        if graph.edge_count() > 0 {
                            prop_assert!(fleury_trail.is_circuit());
                            prop_assert!(hierholzer_trail.is_circuit());
                        }
                    }
                    EulerianClass::OpenTrail => {
                        let mut odd = odd_vertices(&graph);
                        odd.sort();
                        for trail in [&fleury_trail, &hierholzer_trail] {
                            let (first, last) = trail.endpoints().expect("non-empty");
                            let mut ends = vec![first.clone(), last.clone()];
                            ends.sort();
                            prop_assert_eq!(&ends, &odd);
                        }
                    }
                    EulerianClass::Absent => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn prop_trail_edge_multiset_equals_graph_edges(graph in graph_strategy()) {
        prop_assume!(classify(&graph) != EulerianClass::Absent);
        let trail = hierholzer(&graph).trail().expect("trail exists");
        let counts = edge_multiset(trail.nodes());

        prop_assert_eq!(counts.len(), graph.edge_count());
        for edge in graph.edges() {
            prop_assert_eq!(counts.get(edge).copied(), Some(1));
        }
    }

    #[test]
    fn prop_builders_are_deterministic(graph in graph_strategy()) {
        prop_assert_eq!(hierholzer(&graph), hierholzer(&graph));
        if classify(&graph) != EulerianClass::Absent {
            let first = fleury(&graph).expect("precondition holds");
            let second = fleury(&graph).expect("precondition holds");
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_connectivity_matches_component_count(graph in graph_strategy()) {
        if graph.is_empty() {
            prop_assert_eq!(graph.component_count(), 0);
            prop_assert!(!graph.is_connected());
        } else {
            prop_assert_eq!(graph.is_connected(), graph.component_count() == 1);
        }
    }

    #[test]
    fn prop_bridge_detection_matches_definition(graph in graph_strategy()) {
        let before = graph.component_count();
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            let flagged = is_bridge(&graph, u, v).expect("edge exists");

            let mut without = graph.clone();
            without.remove_edge(u, v);
            prop_assert_eq!(flagged, without.component_count() > before);
        }
    }

    #[test]
    fn prop_builders_never_mutate_input(graph in graph_strategy()) {
        let pristine = graph.clone();
        let _ = hierholzer(&graph);
        if classify(&graph) != EulerianClass::Absent {
            let _ = fleury(&graph);
        }
        prop_assert_eq!(&graph, &pristine);
    }
}
