//! The layout pipeline.
//!
//! Phases run over a working copy of the caller's graph ([`LayoutGraph`]) whose labels
//! collect rank, order, coordinates and routes. Node handles in the working copy match the
//! caller's graph one to one; self-loops are held on their node instead of being edges, so
//! ranking and ordering never see them.

use crate::graph::Graph;
use crate::graphlib::EdgeIx;
use crate::model::{EdgeLabel, NodeLabel, Point, SelfLoop, Size};
use crate::output::{Layout, PositionedNode, RoutedEdge};
use crate::{LayoutConfig, LayoutGraph};
use crate::{acyclic, coordinate_system, order, position, rank, route};

pub(crate) fn run<P: Clone>(graph: &Graph<P>, config: &LayoutConfig) -> Layout<P> {
    let config = config.sanitized();
    let span = tracing::debug_span!(
        "strata::layout",
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        rank_dir = ?config.rank_dir,
    );
    let _enter = span.enter();

    let mut g = build_layout_graph(graph, &config);
    coordinate_system::adjust(&mut g, config.rank_dir);

    let reversed = acyclic::run(&mut g, config.acyclicer);
    rank::rank(&mut g);
    let crossings = order::order(&mut g, config.max_sweeps);
    let extent = position::position(&mut g, &config);
    route::route(&mut g, &config);

    let extent = coordinate_system::undo(&mut g, config.rank_dir, extent);
    coordinate_system::translate(&mut g, config.margin_x, config.margin_y);
    acyclic::undo(&mut g);

    let layout = assemble(graph, &g, &reversed, extent, &config, crossings);
    tracing::debug!(
        width = layout.width,
        height = layout.height,
        crossings,
        "layout: done"
    );
    layout
}

fn build_layout_graph<P>(graph: &Graph<P>, config: &LayoutConfig) -> LayoutGraph {
    let input = graph.inner();
    let mut g = LayoutGraph::with_capacity(input.node_count(), input.edge_count());

    for (_, id, node) in input.nodes() {
        let size = node.size.unwrap_or(config.default_node_size).sanitized();
        let v = g.ensure_node(id);
        *g.node_mut(v) = NodeLabel {
            width: size.width,
            height: size.height,
            ..Default::default()
        };
    }

    for e in input.edge_indices() {
        let (v, w) = input.endpoints(e);
        if v == w {
            g.node_mut(v).self_loops.push(SelfLoop {
                edge: e.index(),
                points: Vec::new(),
            });
            continue;
        }
        let label_size = input.edge(e).label_size.unwrap_or_default().sanitized();
        g.add_edge_ix(
            v,
            w,
            EdgeLabel {
                edge: e.index(),
                label_width: label_size.width,
                label_height: label_size.height,
                ..Default::default()
            },
        );
    }

    g
}

fn assemble<P: Clone>(
    graph: &Graph<P>,
    g: &LayoutGraph,
    reversed: &[EdgeIx],
    extent: Size,
    config: &LayoutConfig,
    crossings: usize,
) -> Layout<P> {
    let input = graph.inner();

    let mut routes: Vec<Vec<Point>> = vec![Vec::new(); input.edge_count()];
    for e in g.edge_indices() {
        let lbl = g.edge(e);
        routes[lbl.edge] = lbl.points.clone();
    }
    for v in g.node_indices() {
        for self_loop in &g.node(v).self_loops {
            routes[self_loop.edge] = self_loop.points.clone();
        }
    }

    let mut flipped = vec![false; input.edge_count()];
    for &e in reversed {
        flipped[g.edge(e).edge] = true;
    }

    let nodes = input
        .nodes()
        .map(|(v, id, node)| {
            let n = g.node(v);
            PositionedNode {
                id: id.to_string(),
                payload: node.payload.clone(),
                x: n.x,
                y: n.y,
                width: n.width,
                height: n.height,
                rank: n.rank,
                order: n.order,
            }
        })
        .collect();

    let edges = input
        .edge_indices()
        .map(|e| {
            let edge = input.edge(e);
            let points = std::mem::take(&mut routes[e.index()]);
            let label_pos = edge.label.as_ref().and_then(|_| route::midpoint(&points));
            RoutedEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
                label: edge.label.clone(),
                style: edge.style,
                points,
                label_pos,
                reversed: flipped[e.index()],
            }
        })
        .collect();

    Layout {
        nodes,
        edges,
        width: extent.width + 2.0 * config.margin_x,
        height: extent.height + 2.0 * config.margin_y,
        crossings,
    }
}
