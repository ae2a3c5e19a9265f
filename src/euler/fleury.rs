//! Fleury's algorithm: a greedy bridge-avoiding walk.

use tracing::{debug, trace};

use super::bridge::is_bridge;
use super::errors::EulerError;
use super::predicate::start_vertex;
use crate::graph::Graph;
use crate::trail::Trail;
use crate::types::NodeId;

/// Builds an Eulerian trail with Fleury's algorithm.
///
/// The walk starts at the first odd-degree vertex in insertion order
/// (or the first vertex when all degrees are even) and repeatedly takes
/// the first neighbor whose edge is not a bridge; a bridge is crossed
/// only when it is the last edge left at the current vertex. Each taken
/// edge is removed from a private working copy, and vertices are
/// dropped once their degree reaches zero. The caller's graph is never
/// mutated.
///
/// The bridge test inside the inner loop makes this at least quadratic
/// in the edge count; acceptable for the small graphs this crate
/// targets.
///
/// Callers are expected to check
/// [`has_eulerian_trail`](super::has_eulerian_trail) first: this
/// routine does not re-verify the precondition, matching the classical
/// formulation.
///
/// # Errors
///
/// [`EulerError::ExhaustedSearch`] when no neighbor satisfies the
/// selection rule while edges remain. That cannot happen when the
/// Eulerian precondition holds; it indicates a malformed input, and the
/// walk aborts rather than looping or returning a truncated trail.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::fleury;
/// use eulertrail::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .add_edge("C", "A")
///     .build();
///
/// let trail = fleury(&graph).unwrap();
/// assert!(trail.is_circuit());
/// assert!(trail.covers(&graph));
/// ```
pub fn fleury(graph: &Graph) -> Result<Trail, EulerError> {
    let mut work = graph.clone();
    let Some(mut current) = start_vertex(&work) else {
        return Ok(Trail::default());
    };
    debug!(start = %current, edges = work.edge_count(), "starting Fleury walk");

    let mut nodes = vec![current.clone()];
    while work.edge_count() > 0 {
        let next = select_neighbor(&work, &current)?;
        trace!(from = %current, to = %next, remaining = work.edge_count() - 1, "taking edge");
        nodes.push(next.clone());
        work.remove_edge(&current, &next);
        if work.degree(&current) == 0 {
            work.remove_node(&current);
        }
        current = next;
    }

    Ok(Trail::new(nodes))
}

/// Selection rule: first neighbor in deterministic order whose edge is
/// not a bridge, unless the current vertex has degree 1 and the bridge
/// must be taken.
fn select_neighbor(work: &Graph, current: &NodeId) -> Result<NodeId, EulerError> {
    let forced = work.degree(current) == 1;
    for neighbor in work.neighbors(current) {
        if forced || !is_bridge(work, current, neighbor)? {
            return Ok(neighbor.clone());
        }
    }
    Err(EulerError::ExhaustedSearch {
        at: current.clone(),
        remaining_edges: work.edge_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn empty_graph_yields_empty_trail() {
        assert!(fleury(&Graph::new()).unwrap().is_empty());
    }

    #[test]
    fn edgeless_vertex_yields_one_node_trail() {
        let graph = GraphBuilder::new().add_node("A").build();
        let trail = fleury(&graph).unwrap();
        assert_eq!(trail.nodes(), [crate::types::NodeId::new("A")]);
    }

    #[test]
    fn stranded_walk_fails_fast() {
        // Disconnected input violates the precondition: once the first
        // component is exhausted the walk has no traversable edge left.
        let graph = GraphBuilder::new()
            .add_edge("A", "B")
            .add_edge("C", "D")
            .build();
        let err = fleury(&graph).unwrap_err();
        match err {
            EulerError::ExhaustedSearch {
                at,
                remaining_edges,
            } => {
                assert_eq!(at, "B".into());
                assert_eq!(remaining_edges, 1);
            }
            other => panic!("expected ExhaustedSearch, got {other:?}"),
        }
    }

    #[test]
    fn input_graph_is_never_mutated() {
        let graph = GraphBuilder::new()
            .add_edge("A", "B")
            .add_edge("B", "C")
            .add_edge("C", "A")
            .build();
        let before = graph.clone();
        let _ = fleury(&graph).unwrap();
        assert_eq!(graph, before);
    }
}
