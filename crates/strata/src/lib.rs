#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) layout for entity-relationship diagrams.
//!
//! Given entities and directed relationships, `strata` computes node positions and edge
//! routes for a renderer: cycles are broken, nodes are ranked by longest path, ranks are
//! reordered to reduce crossings, and boxes are packed and centred rank by rank.
//!
//! ```
//! use strata::{Edge, LayoutConfig, Node, build_graph, layout};
//!
//! let graph = build_graph(
//!     [Node::new("doctor", ()), Node::new("patient", ())],
//!     [Edge::new("doctor", "patient").with_label("treats")],
//! )?;
//! let out = layout(&graph, &LayoutConfig::default())?;
//! assert!(out.node("patient").unwrap().y > out.node("doctor").unwrap().y);
//! # Ok::<(), strata::ValidationError>(())
//! ```
//!
//! The phases are public modules so tools can inspect intermediate results; they operate on
//! a [`LayoutGraph`].

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod config;
pub mod coordinate_system;
pub mod error;
pub mod graph;
pub mod greedy_fas;
pub mod model;
pub mod order;
pub mod output;
mod pipeline;
pub mod position;
pub mod rank;
pub mod route;

pub use config::{Acyclicer, LayoutConfig, RankDir};
pub use error::{ConfigError, Result, ValidationError};
pub use graph::{Edge, EdgeStyle, Graph, Node, build_graph};
pub use model::{EdgeLabel, NodeLabel, Point, Rect, SelfLoop, Size};
pub use output::{Layout, PositionedNode, RoutedEdge};

/// Working graph shared by the layout phases.
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel>;

/// Lays out a validated graph.
///
/// Pure and deterministic: the same graph and config always produce the same geometry.
/// A [`Graph`] is validated when it is built, so every error surfaces from [`build_graph`].
pub fn layout<P: Clone>(graph: &Graph<P>, config: &LayoutConfig) -> Result<Layout<P>> {
    Ok(pipeline::run(graph, config))
}

/// Validates `nodes`/`edges` and lays them out in one call.
pub fn layout_parts<P: Clone>(
    nodes: impl IntoIterator<Item = Node<P>>,
    edges: impl IntoIterator<Item = Edge>,
    config: &LayoutConfig,
) -> Result<Layout<P>> {
    let graph = build_graph(nodes, edges)?;
    layout(&graph, config)
}
