//! Trail results produced by the Eulerian builders.
//!
//! A [`Trail`] is an ordered sequence of vertices describing a walk:
//! every consecutive pair of nodes is one traversed edge. The builders
//! in [`crate::euler`] guarantee that a returned trail consumes every
//! edge of the input graph exactly once; [`Trail::covers`] checks that
//! invariant against a graph.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::Graph;
use crate::types::{Edge, NodeId};

/// An ordered walk through a graph.
///
/// Trails are produced by [`fleury`](crate::euler::fleury) and
/// [`hierholzer`](crate::euler::hierholzer). A trail with `n` nodes
/// traverses `n - 1` edges; a successful Eulerian trail therefore has
/// exactly `graph.edge_count() + 1` nodes.
///
/// # Examples
///
/// ```rust
/// use eulertrail::trail::Trail;
/// use eulertrail::types::NodeId;
///
/// let trail = Trail::new(vec![
///     NodeId::new("A"),
///     NodeId::new("B"),
///     NodeId::new("A"),
/// ]);
/// assert!(trail.is_circuit());
/// assert_eq!(trail.edge_count(), 2);
/// assert_eq!(trail.to_string(), "A -> B -> A");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    nodes: Vec<NodeId>,
}

impl Trail {
    /// Creates a trail from an ordered node sequence.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// The visited nodes, in traversal order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes in the trail (edges traversed + 1 when non-empty).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true for a trail that visits no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed by this trail.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns true if the trail is a closed walk (start = end).
    ///
    /// A trail with fewer than two nodes traverses no edge and is not
    /// considered a circuit.
    #[must_use]
    pub fn is_circuit(&self) -> bool {
        self.nodes.len() > 1 && self.nodes.first() == self.nodes.last()
    }

    /// First and last node of the trail, if any.
    #[must_use]
    pub fn endpoints(&self) -> Option<(&NodeId, &NodeId)> {
        Some((self.nodes.first()?, self.nodes.last()?))
    }

    /// Iterates over the traversed edges as canonical [`Edge`] values.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
    }

    /// Checks that this trail consumes every edge of `graph` exactly once.
    ///
    /// The multiset of consecutive-pair edges must equal the graph's
    /// edge set with multiplicity one each: no repeats, no omissions,
    /// no edges outside the graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eulertrail::graph::GraphBuilder;
    /// use eulertrail::trail::Trail;
    ///
    /// let graph = GraphBuilder::new()
    ///     .add_edge("A", "B")
    ///     .add_edge("B", "C")
    ///     .build();
    ///
    /// let walk = Trail::new(vec!["A".into(), "B".into(), "C".into()]);
    /// assert!(walk.covers(&graph));
    ///
    /// let partial = Trail::new(vec!["A".into(), "B".into()]);
    /// assert!(!partial.covers(&graph));
    /// ```
    #[must_use]
    pub fn covers(&self, graph: &Graph) -> bool {
        if self.edge_count() != graph.edge_count() {
            return false;
        }
        let mut seen: FxHashMap<Edge, usize> = FxHashMap::default();
        for edge in self.edges() {
            *seen.entry(edge).or_insert(0) += 1;
        }
        graph.edges().all(|edge| seen.get(edge) == Some(&1))
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
