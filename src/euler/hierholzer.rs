//! Hierholzer's algorithm: stack-based circuit-merging traversal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::predicate::{has_eulerian_trail, start_vertex};
use crate::graph::Graph;
use crate::trail::Trail;

/// Outcome of a Hierholzer trail search.
///
/// Absence of an Eulerian trail is a reported result callers branch
/// on, not an error.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::{hierholzer, TrailSearch};
/// use eulertrail::graph::GraphBuilder;
///
/// let star = GraphBuilder::new()
///     .add_edge("hub", "a")
///     .add_edge("hub", "b")
///     .add_edge("hub", "c")
///     .build();
///
/// match hierholzer(&star) {
///     TrailSearch::Found(trail) => println!("trail: {trail}"),
///     TrailSearch::Absent => println!("no Eulerian trail"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailSearch {
    /// An Eulerian trail covering every edge exactly once.
    Found(Trail),
    /// The graph admits no Eulerian trail.
    Absent,
}

impl TrailSearch {
    /// Returns the trail if one was found.
    #[must_use]
    pub fn trail(self) -> Option<Trail> {
        match self {
            TrailSearch::Found(trail) => Some(trail),
            TrailSearch::Absent => None,
        }
    }

    /// Returns true when no Eulerian trail exists.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, TrailSearch::Absent)
    }
}

/// Builds an Eulerian trail with Hierholzer's algorithm.
///
/// The existence predicate is checked first; if it fails the search
/// reports [`TrailSearch::Absent`]. Otherwise the traversal keeps an
/// explicit vertex stack: while the top vertex still has incident
/// edges in the working copy, the first remaining neighbor in
/// deterministic order is consumed and pushed; a vertex with no edges
/// left is popped onto the output. Reversing the pop order yields the
/// trail.
///
/// This single-stack formulation performs Hierholzer's circuit
/// splicing implicitly — every edge is consumed exactly once, and no
/// separate sub-circuit merge is needed because the walk never leaves
/// the one component that contains the Eulerian trail. Unlike Fleury,
/// no bridge detection is involved, so the traversal is linear in the
/// edge count.
///
/// The caller's graph is never mutated; the traversal consumes a
/// private working copy.
///
/// # Examples
///
/// ```rust
/// use eulertrail::euler::hierholzer;
/// use eulertrail::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .add_edge("A", "B")
///     .add_edge("B", "C")
///     .add_edge("C", "A")
///     .build();
///
/// let trail = hierholzer(&graph).trail().unwrap();
/// assert!(trail.is_circuit());
/// assert!(trail.covers(&graph));
/// ```
#[must_use]
pub fn hierholzer(graph: &Graph) -> TrailSearch {
    if !has_eulerian_trail(graph) {
        debug!("no Eulerian trail exists; reporting absence");
        return TrailSearch::Absent;
    }
    let mut work = graph.clone();
    let Some(start) = start_vertex(&work) else {
        // Unreachable in practice: the empty graph already classified
        // as absent above.
        return TrailSearch::Absent;
    };
    debug!(start = %start, edges = work.edge_count(), "starting Hierholzer traversal");

    let mut stack = vec![start];
    let mut output = Vec::with_capacity(work.edge_count() + 1);
    while let Some(current) = stack.last().cloned() {
        let next = work.neighbors(&current).next().cloned();
        match next {
            Some(next) => {
                work.remove_edge(&current, &next);
                stack.push(next);
            }
            None => {
                if let Some(done) = stack.pop() {
                    output.push(done);
                }
            }
        }
    }

    // Pop order is the reverse of traversal order.
    output.reverse();
    TrailSearch::Found(Trail::new(output))
}
