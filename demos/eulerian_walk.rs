//! Demo: Eulerian Walk Construction
//!
//! This demonstration builds the classic six-vertex graph, reports its
//! structural properties, and runs both trail builders on it.
//!
//! What You'll See:
//! 1. Graph Building: assembling an undirected graph with `GraphBuilder`
//! 2. Structural Queries: degrees, odd vertices, connectivity
//! 3. Classification: circuit vs open trail vs absent
//! 4. Trail Construction: Fleury's and Hierholzer's algorithms
//!
//! Running This Demo:
//! ```bash
//! cargo run --example eulerian_walk
//! ```

use miette::Result;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use eulertrail::euler::{TrailSearch, classify, fleury, hierholzer, odd_vertices};
use eulertrail::graph::{Graph, GraphBuilder};

fn init_tracing() {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,eulertrail=debug"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}

fn init_miette() {
    // Pretty panic reports
    miette::set_panic_hook();
}

/// The six-vertex graph from the classic exercise: odd degrees at B
/// and E, so an open Eulerian trail runs between them.
fn build_demo_graph() -> Graph {
    GraphBuilder::new()
        .add_edge("A", "B")
        .add_edge("A", "C")
        .add_edge("B", "C")
        .add_edge("B", "D")
        .add_edge("C", "D")
        .add_edge("C", "E")
        .add_edge("D", "E")
        .add_edge("D", "F")
        .add_edge("E", "F")
        .build()
}

fn report_structure(graph: &Graph) {
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph built");
    for node in graph.nodes() {
        info!(node = %node, degree = graph.degree(node), "vertex");
    }
    let odd = odd_vertices(graph);
    info!(connected = graph.is_connected(), odd_vertices = ?odd, "structure");
}

fn main() -> Result<()> {
    init_tracing();
    init_miette();

    let graph = build_demo_graph();
    report_structure(&graph);

    let class = classify(&graph);
    info!(?class, "Eulerian classification");

    let fleury_trail = fleury(&graph)?;
    println!("Eulerian trail (Fleury):     {fleury_trail}");

    match hierholzer(&graph) {
        TrailSearch::Found(trail) => {
            println!("Eulerian trail (Hierholzer): {trail}");
        }
        TrailSearch::Absent => {
            println!("The graph does not have an Eulerian trail.");
        }
    }

    Ok(())
}
