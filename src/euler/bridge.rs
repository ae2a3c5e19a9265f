//! Bridge detection by component counting.

use super::errors::EulerError;
use crate::graph::Graph;
use crate::types::NodeId;

/// Returns true if removing edge `(u, v)` would disconnect the graph.
///
/// A bridge is an edge whose removal increases the number of connected
/// components. The check runs a component count, removes the edge on a
/// scratch deep copy, and recounts: O(V + E) per call. Fleury's
/// algorithm calls this inside its inner loop, which is why its overall
/// cost is quadratic in the edge count — a documented limitation, fine
/// for the small graphs this crate targets.
///
/// # Errors
///
/// [`EulerError::InvalidEdge`] when the edge does not exist; the
/// precondition violation is propagated, never swallowed.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::is_bridge;
/// use eulertrail::graph::GraphBuilder;
///
/// // Two-edge path: every edge is a bridge.
/// let path = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .build();
/// assert!(is_bridge(&path, &"A".into(), &"B".into()).unwrap());
///
/// // Triangle: no edge is a bridge.
/// let cycle = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .add_edge("C", "A")
///     .build();
/// assert!(!is_bridge(&cycle, &"A".into(), &"B".into()).unwrap());
/// ```
pub fn is_bridge(graph: &Graph, u: &NodeId, v: &NodeId) -> Result<bool, EulerError> {
    if !graph.contains_edge(u, v) {
        return Err(EulerError::InvalidEdge {
            u: u.clone(),
            v: v.clone(),
        });
    }
    let before = graph.component_count();
    let mut scratch = graph.clone();
    scratch.remove_edge(u, v);
    Ok(scratch.component_count() > before)
}
