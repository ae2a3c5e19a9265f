//! Iterators over graph structure.
//!
//! Both iterators yield items in insertion order, which is the
//! deterministic order every algorithm in this crate relies on.
//!
//! # Examples
//!
//! ```rust
//! use eulertrail::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new()
//!     .add_edge("A", "B")
//!     .add_edge("A", "C")
//!     .build();
//!
//! let nodes: Vec<_> = graph.nodes().map(|n| n.as_str().to_string()).collect();
//! assert_eq!(nodes, ["A", "B", "C"]);
//!
//! let edges: Vec<_> = graph.edges().map(|e| e.to_string()).collect();
//! assert_eq!(edges, ["A -- B", "A -- C"]);
//! ```

use crate::types::{Edge, NodeId};

/// Iterator over the vertices of a graph, in insertion order.
pub struct NodesIter<'a> {
    inner: std::slice::Iter<'a, NodeId>,
}

impl<'a> NodesIter<'a> {
    pub(super) fn new(inner: std::slice::Iter<'a, NodeId>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for NodesIter<'a> {
    type Item = &'a NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for NodesIter<'_> {}

/// Iterator over the edges of a graph, in insertion order.
///
/// Each undirected edge is yielded exactly once, as a canonical
/// [`Edge`] value.
pub struct EdgesIter<'a> {
    inner: std::slice::Iter<'a, Edge>,
}

impl<'a> EdgesIter<'a> {
    pub(super) fn new(inner: std::slice::Iter<'a, Edge>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for EdgesIter<'_> {}
