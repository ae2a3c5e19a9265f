//! Undirected graph model and construction.
//!
//! This module supplies the graph the Eulerian algorithms operate on.
//! The main entry point is [`GraphBuilder`], which uses a builder
//! pattern to assemble a [`Graph`]; the graph itself exposes the
//! queries and mutations the algorithms need: degree and neighbor
//! enumeration in deterministic order, edge and node removal,
//! connectivity and component counting, and deep copy via `Clone`.
//!
//! # Core Concepts
//!
//! - **Vertices**: identified by [`NodeId`](crate::types::NodeId),
//!   enumerated in insertion order
//! - **Edges**: unordered simple pairs, at most one per vertex pair,
//!   enumerated in insertion order
//! - **Determinism**: neighbor order is edge-insertion order and
//!   survives removals, so traversals are reproducible
//! - **Working copies**: `Clone` is a deep copy; algorithms consume a
//!   private clone and never mutate the caller's graph
//!
//! # Examples
//!
//! ```rust
//! use eulertrail::graph::GraphBuilder;
//! use eulertrail::types::NodeId;
//!
//! let graph = GraphBuilder::new()
//!     .add_edge("A", "B")
//!     .add_edge("B", "C")
//!     .add_edge("C", "A")
//!     .build();
//!
//! assert!(graph.is_connected());
//! assert_eq!(graph.component_count(), 1);
//!
//! // Neighbor order is edge-insertion order.
//! let around_a: Vec<_> = graph.neighbors(&"A".into()).cloned().collect();
//! assert_eq!(around_a, vec![NodeId::new("B"), NodeId::new("C")]);
//! ```
//!
//! # petgraph Integration
//!
//! With the `petgraph-compat` feature, graphs convert to
//! `petgraph::graph::UnGraph` for cross-checking against petgraph's
//! algorithm library, and export to DOT for Graphviz rendering.

mod builder;
mod iteration;
mod model;

#[cfg(feature = "petgraph-compat")]
mod petgraph_compat;


pub use builder::GraphBuilder;
pub use iteration::{EdgesIter, NodesIter};
pub use model::Graph;

#[cfg(feature = "petgraph-compat")]
pub use petgraph_compat::{NodeIndexMap, PetgraphConversion, UndirectedGraph};
