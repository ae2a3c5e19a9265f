//! Eulerian trail construction: predicates and the two classical builders.
//!
//! An **Eulerian trail** traverses every edge of a graph exactly once;
//! when it starts and ends at the same vertex it is an **Eulerian
//! circuit**. This module decides whether a trail exists and constructs
//! one with two classical algorithms:
//!
//! - [`fleury`]: a greedy walk that avoids **bridges** (edges whose
//!   removal disconnects the graph) until they are the only option.
//!   Simple but quadratic, because [`is_bridge`] runs inside the inner
//!   loop.
//! - [`hierholzer`]: an explicit-stack traversal that consumes every
//!   edge once and splices sub-circuits implicitly. Linear in the edge
//!   count, and the one to prefer.
//!
//! Both builders work on a private deep copy of the input, never mutate
//! the caller's graph, and follow the same deterministic start rule:
//! the first odd-degree vertex in insertion order, else the first
//! vertex.
//!
//! # Quick Start
//!
//! ```rust
//! use eulertrail::euler::{classify, fleury, hierholzer, EulerianClass};
//! use eulertrail::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new()
//!     .add_edge("A", "B")
//!     .add_edge("B", "C")
//!     .add_edge("C", "A")
//!     .add_edge("C", "D")
//!     .add_edge("D", "E")
//!     .add_edge("E", "C")
//!     .build();
//!
//! assert_eq!(classify(&graph), EulerianClass::Circuit);
//!
//! let trail = fleury(&graph).unwrap();
//! assert!(trail.is_circuit());
//! assert!(trail.covers(&graph));
//!
//! let trail = hierholzer(&graph).trail().unwrap();
//! assert!(trail.covers(&graph));
//! ```
//!
//! # Error Model
//!
//! Absence of an Eulerian trail is an expected outcome, reported by
//! [`TrailSearch::Absent`]. [`EulerError`] is reserved for genuine
//! failures: asking [`is_bridge`] about a missing edge
//! ([`EulerError::InvalidEdge`]) or running [`fleury`] on input that
//! violates its precondition ([`EulerError::ExhaustedSearch`]).

mod bridge;
mod errors;
mod fleury;
mod hierholzer;
mod predicate;


pub use bridge::is_bridge;
pub use errors::EulerError;
pub use fleury::fleury;
pub use hierholzer::{TrailSearch, hierholzer};
pub use predicate::{EulerianClass, classify, has_eulerian_trail, odd_vertices};
