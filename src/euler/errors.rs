//! Error types for the Eulerian algorithms.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NodeId;

/// Errors raised by bridge detection and Fleury's algorithm.
///
/// Absence of an Eulerian trail is *not* an error; it is reported as
/// [`TrailSearch::Absent`](crate::euler::TrailSearch::Absent). The
/// variants here signal precondition violations and are fatal for the
/// call that raised them.
#[derive(Debug, Error, Diagnostic)]
pub enum EulerError {
    /// Bridge detection was asked about an edge that does not exist.
    #[error("edge {u} -- {v} does not exist in the graph")]
    #[diagnostic(
        code(eulertrail::euler::invalid_edge),
        help("Bridge detection requires an existing edge. Check the endpoints and the graph's current edge set.")
    )]
    InvalidEdge { u: NodeId, v: NodeId },

    /// Fleury's selection rule found no traversable neighbor.
    ///
    /// This cannot happen when the Eulerian precondition holds; hitting
    /// it means the working copy is inconsistent or the input was never
    /// checked. The walk is aborted rather than truncated silently.
    #[error("no traversable edge at {at} with {remaining_edges} edge(s) remaining")]
    #[diagnostic(
        code(eulertrail::euler::exhausted_search),
        help("Verify the graph admits an Eulerian trail (connected, 0 or 2 odd-degree vertices) before building.")
    )]
    ExhaustedSearch { at: NodeId, remaining_edges: usize },
}
