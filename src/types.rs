//! Core identifier types for graphs and trails.
//!
//! This module defines the fundamental vocabulary used throughout the
//! crate: [`NodeId`] names a vertex, and [`Edge`] names an unordered
//! pair of vertices. These are the domain concepts every other module
//! builds on.
//!
//! # Examples
//!
//! ```rust
//! use eulertrail::types::{Edge, NodeId};
//!
//! let a = NodeId::new("A");
//! let b = NodeId::new("B");
//!
//! // Edges are unordered: both orientations are the same edge.
//! assert_eq!(Edge::new(a.clone(), b.clone()), Edge::new(b, a));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a vertex in an undirected graph.
///
/// `NodeId` is a string-backed identifier with value semantics. It is
/// `Ord` so that tie-breaks (for example when sorting diagnostics
/// output) are deterministic, but note that traversal order inside
/// [`Graph`](crate::graph::Graph) is governed by insertion order, not
/// by this ordering.
///
/// # Examples
///
/// ```rust
/// use eulertrail::types::NodeId;
///
/// let id = NodeId::new("A");
/// assert_eq!(id.as_str(), "A");
/// assert_eq!(id.to_string(), "A");
///
/// // `From` conversions for ergonomic call sites
/// let from_str: NodeId = "B".into();
/// let from_string: NodeId = String::from("C").into();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node identifier from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An undirected edge between two distinct vertices.
///
/// The endpoints are stored in canonical (sorted) order, so two edges
/// constructed with swapped endpoints compare and hash identically.
/// This is what lets trail verification treat the consecutive pairs of
/// a walk as a multiset over the graph's edge set.
///
/// # Examples
///
/// ```rust
/// use eulertrail::types::{Edge, NodeId};
///
/// let e = Edge::new(NodeId::new("B"), NodeId::new("A"));
/// let (u, v) = e.endpoints();
/// assert_eq!((u.as_str(), v.as_str()), ("A", "B"));
/// assert_eq!(e.to_string(), "A -- B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    /// Creates an edge between `u` and `v`, normalizing endpoint order.
    #[must_use]
    pub fn new(u: impl Into<NodeId>, v: impl Into<NodeId>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v { Self { a: u, b: v } } else { Self { a: v, b: u } }
    }

    /// Returns both endpoints in canonical order.
    #[must_use]
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.a, &self.b)
    }

    /// Returns true if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.a == node || &self.b == node
    }

    /// Given one endpoint, returns the opposite one.
    ///
    /// Returns `None` when `node` is not an endpoint of this edge.
    #[must_use]
    pub fn other(&self, node: &NodeId) -> Option<&NodeId> {
        if node == &self.a {
            Some(&self.b)
        } else if node == &self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
