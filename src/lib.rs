//! # Eulertrail: Eulerian Trails and Circuits for Undirected Graphs
//!
//! Eulertrail decides whether an undirected simple graph admits an
//! Eulerian path or circuit and, when it does, constructs one with two
//! classical algorithms: Fleury's greedy bridge-avoiding walk and
//! Hierholzer's stack-based circuit-merging traversal.
//!
//! ## Core Concepts
//!
//! - **Graph**: mutable undirected simple graph with deterministic
//!   (insertion-order) node, neighbor, and edge enumeration
//! - **Trail**: an ordered vertex sequence whose consecutive pairs are
//!   the traversed edges; a successful Eulerian trail covers every edge
//!   exactly once
//! - **Working copies**: each builder call clones the input and mutates
//!   only its private copy — the caller's graph is never touched
//! - **Typed outcomes**: absence of a trail is a reported result
//!   ([`euler::TrailSearch::Absent`]), while precondition violations
//!   are diagnostic errors ([`euler::EulerError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use eulertrail::euler::{classify, fleury, hierholzer, EulerianClass};
//! use eulertrail::graph::GraphBuilder;
//!
//! // The classic six-vertex example: odd degrees at B and E, so an
//! // open Eulerian trail runs between them.
//! let graph = GraphBuilder::new()
//!     .add_edge("A", "B")
//!     .add_edge("A", "C")
//!     .add_edge("B", "C")
//!     .add_edge("B", "D")
//!     .add_edge("C", "D")
//!     .add_edge("C", "E")
//!     .add_edge("D", "E")
//!     .add_edge("D", "F")
//!     .add_edge("E", "F")
//!     .build();
//!
//! assert_eq!(classify(&graph), EulerianClass::OpenTrail);
//!
//! let trail = fleury(&graph).expect("graph satisfies Fleury's precondition");
//! assert_eq!(trail.len(), graph.edge_count() + 1);
//! assert!(trail.covers(&graph));
//!
//! let trail = hierholzer(&graph).trail().expect("trail exists");
//! assert!(trail.covers(&graph));
//! println!("{trail}"); // B -> A -> C -> B -> D -> C -> E -> D -> F -> E
//! ```
//!
//! ## Choosing a Builder
//!
//! Both builders produce a valid Eulerian trail with the same start
//! rule and deterministic edge order. [`euler::hierholzer`] is linear
//! in the edge count and checks existence up front;
//! [`euler::fleury`] is the textbook bridge-avoiding walk, quadratic
//! because it re-runs bridge detection at every step, and expects the
//! caller to have verified existence. Neither is intended for large
//! graphs.
//!
//! ## Error Handling
//!
//! Failures carry [`miette`] diagnostics with codes and help text:
//!
//! ```rust
//! use eulertrail::euler::{is_bridge, EulerError};
//! use eulertrail::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new().add_edge("A", "B").build();
//! let err = is_bridge(&graph, &"A".into(), &"Z".into()).unwrap_err();
//! assert!(matches!(err, EulerError::InvalidEdge { .. }));
//! ```
//!
//! ## Module Guide
//!
//! - [`types`] - Vertex and edge identifier types
//! - [`graph`] - Graph model, builder, and iteration
//! - [`euler`] - Existence predicate, bridge detection, and the two
//!   trail builders
//! - [`trail`] - Trail results and coverage verification

pub mod euler;
pub mod graph;
pub mod trail;
pub mod types;
