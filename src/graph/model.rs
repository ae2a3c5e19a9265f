//! Mutable undirected simple graph with deterministic enumeration order.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::iteration::{EdgesIter, NodesIter};
use crate::types::{Edge, NodeId};

/// An undirected simple graph over [`NodeId`] vertices.
///
/// The graph is mutable: edges and nodes may be removed, which is what
/// the Eulerian builders do to their private working copies. `Clone`
/// produces a deep copy with no shared mutable substructure, so a
/// cloned working copy can be consumed freely without touching the
/// caller's graph.
///
/// # Determinism
///
/// All enumeration orders are insertion order and survive removals:
///
/// - [`nodes`](Self::nodes) yields vertices in the order they were added
/// - [`neighbors`](Self::neighbors) yields adjacent vertices in the
///   order their edges were added
/// - [`edges`](Self::edges) yields edges in the order they were added
///
/// This is what makes both trail builders reproducible across runs.
///
/// # Simple-graph rules
///
/// Self-loops and duplicate edges are rejected: the mutation is ignored
/// and a `tracing` warning is emitted. `add_edge` registers missing
/// endpoints automatically.
///
/// # Examples
///
/// ```rust
/// use eulertrail::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(&"B".into()), 2);
/// assert!(graph.is_connected());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Vertices in insertion order. Authoritative for node enumeration.
    order: Vec<NodeId>,
    /// Neighbor lists in edge-insertion order, one entry per vertex.
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
    /// Edges in insertion order. Authoritative for edge enumeration.
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex if it is not already present.
    ///
    /// Returns true when the vertex was inserted, false when it already
    /// existed.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Missing endpoints are registered automatically. Self-loops and
    /// duplicate edges violate the simple-graph model; they are ignored
    /// with a warning and the method returns false.
    pub fn add_edge(&mut self, u: impl Into<NodeId>, v: impl Into<NodeId>) -> bool {
        let (u, v) = (u.into(), v.into());
        if u == v {
            tracing::warn!(node = %u, "ignoring self-loop edge");
            return false;
        }
        if self.contains_edge(&u, &v) {
            tracing::warn!(edge = %Edge::new(u, v), "ignoring duplicate edge");
            return false;
        }
        self.add_node(u.clone());
        self.add_node(v.clone());
        self.edges.push(Edge::new(u.clone(), v.clone()));
        if let Some(nbrs) = self.adjacency.get_mut(&u) {
            nbrs.push(v.clone());
        }
        if let Some(nbrs) = self.adjacency.get_mut(&v) {
            nbrs.push(u);
        }
        true
    }

    /// Returns true if the vertex is present.
    #[must_use]
    pub fn contains_node(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns true if an edge between `u` and `v` is present.
    #[must_use]
    pub fn contains_edge(&self, u: &NodeId, v: &NodeId) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|nbrs| nbrs.contains(v))
    }

    /// Number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over vertices in insertion order.
    #[must_use]
    pub fn nodes(&self) -> NodesIter<'_> {
        NodesIter::new(self.order.iter())
    }

    /// Iterates over edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter::new(self.edges.iter())
    }

    /// Number of edges incident to `node` (zero for unknown vertices).
    #[must_use]
    pub fn degree(&self, node: &NodeId) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Iterates over the neighbors of `node` in edge-insertion order.
    ///
    /// Unknown vertices yield an empty iterator.
    pub fn neighbors(&self, node: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
    }

    /// Removes the edge between `u` and `v`, preserving the relative
    /// order of the remaining edges and neighbors.
    ///
    /// Returns true when an edge was removed.
    pub fn remove_edge(&mut self, u: &NodeId, v: &NodeId) -> bool {
        if !self.contains_edge(u, v) {
            return false;
        }
        let removed = Edge::new(u.clone(), v.clone());
        if let Some(pos) = self.edges.iter().position(|e| *e == removed) {
            self.edges.remove(pos);
        }
        if let Some(nbrs) = self.adjacency.get_mut(u)
            && let Some(pos) = nbrs.iter().position(|n| n == v)
        {
            nbrs.remove(pos);
        }
        if let Some(nbrs) = self.adjacency.get_mut(v)
            && let Some(pos) = nbrs.iter().position(|n| n == u)
        {
            nbrs.remove(pos);
        }
        true
    }

    /// Removes a vertex and all its incident edges.
    ///
    /// Returns true when the vertex was present.
    pub fn remove_node(&mut self, node: &NodeId) -> bool {
        if !self.contains_node(node) {
            return false;
        }
        let neighbors: Vec<NodeId> = self.neighbors(node).cloned().collect();
        for nbr in &neighbors {
            self.remove_edge(node, nbr);
        }
        self.adjacency.remove(node);
        if let Some(pos) = self.order.iter().position(|n| n == node) {
            self.order.remove(pos);
        }
        true
    }

    /// Returns true if every vertex is reachable from every other.
    ///
    /// A graph without vertices is not connected (there is nothing to
    /// connect); a single-vertex graph is. Isolated vertices count as
    /// their own components, so their presence makes a graph with edges
    /// disconnected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self.order.first() {
            Some(start) => self.reachable_from(start).len() == self.order.len(),
            None => false,
        }
    }

    /// Counts connected components via repeated breadth-first search.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        let mut components = 0;
        for node in &self.order {
            if visited.contains(node) {
                continue;
            }
            components += 1;
            for reached in self.reachable_from(node) {
                visited.insert(reached);
            }
        }
        components
    }

    /// Breadth-first search from `start`, in deterministic neighbor order.
    fn reachable_from<'a>(&'a self, start: &'a NodeId) -> Vec<&'a NodeId> {
        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        let mut reached = Vec::new();

        visited.insert(start);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            reached.push(current);
            for nbr in self.neighbors(current) {
                if visited.insert(nbr) {
                    queue.push_back(nbr);
                }
            }
        }
        reached
    }
}
