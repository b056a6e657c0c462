//! Coordinate assignment.
//!
//! Works in a top-to-bottom frame: ranks advance along y, nodes of a rank spread along x.
//! `coordinate_system` maps the result to the configured direction afterwards.

use crate::LayoutGraph;
use crate::config::LayoutConfig;
use crate::graphlib::NodeIx;
use crate::model::Size;

/// Writes center `x`/`y` on every node label and returns the drawing extent (margins
/// excluded).
///
/// Each rank is a horizontal band as tall as its tallest node, with nodes centred in it.
/// Bands are separated by `rank_sep`, widened by the tallest edge label joining the two
/// ranks. Inside a band nodes are packed left to right with `node_sep` between footprints,
/// and the whole band is centred against the widest one. A footprint is the node width plus
/// the room its self-loops reach out to on the right.
pub fn position(g: &mut LayoutGraph, config: &LayoutConfig) -> Size {
    let layering = build_layer_matrix(g);
    if layering.is_empty() {
        return Size::default();
    }

    let loop_step = config.loop_step();
    let footprint = |g: &LayoutGraph, v: NodeIx| {
        let n = g.node(v);
        n.width + loop_step * n.self_loops.len() as f64
    };

    let mut gap_extra: Vec<f64> = vec![0.0; layering.len() - 1];
    for e in g.edge_indices() {
        let (v, w) = g.endpoints(e);
        let (rv, rw) = (g.node(v).rank, g.node(w).rank);
        if rv.abs_diff(rw) != 1 {
            continue;
        }
        let extra = &mut gap_extra[rv.min(rw)];
        *extra = extra.max(g.edge(e).label_height);
    }

    let mut rank_heights: Vec<f64> = Vec::with_capacity(layering.len());
    let mut rank_widths: Vec<f64> = Vec::with_capacity(layering.len());
    for layer in &layering {
        let height = layer
            .iter()
            .map(|&v| g.node(v).height)
            .fold(0.0_f64, f64::max);
        let packed: f64 = layer.iter().map(|&v| footprint(g, v)).sum();
        let seps = config.node_sep * layer.len().saturating_sub(1) as f64;
        rank_heights.push(height);
        rank_widths.push(packed + seps);
    }
    let max_width = rank_widths.iter().copied().fold(0.0_f64, f64::max);

    let mut y_cursor: f64 = 0.0;
    for (r, layer) in layering.iter().enumerate() {
        let y = y_cursor + rank_heights[r] / 2.0;
        let mut x_cursor = (max_width - rank_widths[r]) / 2.0;
        for &v in layer {
            let step = footprint(g, v);
            let n = g.node_mut(v);
            n.x = x_cursor + n.width / 2.0;
            n.y = y;
            x_cursor += step + config.node_sep;
        }

        y_cursor += rank_heights[r];
        if let Some(extra) = gap_extra.get(r) {
            y_cursor += config.rank_sep + extra;
        }
    }

    tracing::debug!(width = max_width, height = y_cursor, "position: placed");
    Size::new(max_width, y_cursor)
}

/// Nodes grouped by rank and sorted by `order`.
pub fn build_layer_matrix(g: &LayoutGraph) -> Vec<Vec<NodeIx>> {
    let mut layering = crate::order::init_order(g);
    for layer in &mut layering {
        layer.sort_by_key(|&v| g.node(v).order);
    }
    layering
}
