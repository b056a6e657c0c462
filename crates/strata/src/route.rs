//! Edge routing.
//!
//! Edges are straight segments joining the facing sides of the two node boxes. Long edges
//! are not split into per-rank segments; they pass behind the ranks in between. Runs in the
//! same top-to-bottom frame as `position`.

use crate::LayoutGraph;
use crate::config::LayoutConfig;
use crate::graphlib::{EdgeIx, NodeIx};
use crate::model::{NodeLabel, Point};
use rustc_hash::FxHashMap;

/// Writes `points` on every edge label and on every self-loop held by a node.
pub fn route(g: &mut LayoutGraph, config: &LayoutConfig) {
    let mut group_size: FxHashMap<(NodeIx, NodeIx), usize> = FxHashMap::default();
    for e in g.edge_indices() {
        *group_size.entry(pair_key(g, e)).or_insert(0) += 1;
    }

    let mut seen: FxHashMap<(NodeIx, NodeIx), usize> = FxHashMap::default();
    for e in g.edge_indices() {
        let (v, w) = g.endpoints(e);
        if v == w {
            continue;
        }
        let key = pair_key(g, e);
        let count = group_size.get(&key).copied().unwrap_or(1);
        let slot = seen.entry(key).or_insert(0);
        let i = *slot;
        *slot += 1;

        let (src, tgt) = (g.node(v), g.node(w));
        let offset = parallel_offset(i, count, config.edge_sep, src.width.min(tgt.width) / 2.0);
        let points = straight(src, tgt, offset);
        g.edge_mut(e).points = points;
    }

    let loop_step = config.loop_step();
    for v in g.node_indices() {
        let n = g.node_mut(v);
        if n.self_loops.is_empty() {
            continue;
        }
        let right = n.x + n.width / 2.0;
        let top = n.y - n.height / 4.0;
        let bottom = n.y + n.height / 4.0;
        for (k, self_loop) in n.self_loops.iter_mut().enumerate() {
            let reach = right + loop_step * (k + 1) as f64;
            self_loop.points = vec![
                Point::new(right, top),
                Point::new(reach, top),
                Point::new(reach, bottom),
                Point::new(right, bottom),
            ];
        }
    }
}

/// Unordered endpoint pair, so `a -> b` and `b -> a` share a group.
fn pair_key(g: &LayoutGraph, e: EdgeIx) -> (NodeIx, NodeIx) {
    let (v, w) = g.endpoints(e);
    if v <= w { (v, w) } else { (w, v) }
}

/// Spreads `count` parallel edges `sep` apart around the centre line, within `limit`.
fn parallel_offset(i: usize, count: usize, sep: f64, limit: f64) -> f64 {
    let centered = i as f64 - count.saturating_sub(1) as f64 / 2.0;
    (centered * sep).clamp(-limit, limit)
}

fn straight(src: &NodeLabel, tgt: &NodeLabel, offset: f64) -> Vec<Point> {
    let dir = if src.y <= tgt.y { 1.0 } else { -1.0 };
    vec![
        Point::new(src.x + offset, src.y + dir * src.height / 2.0),
        Point::new(tgt.x + offset, tgt.y - dir * tgt.height / 2.0),
    ]
}

/// Point halfway along the polyline, measured by length.
pub fn midpoint(points: &[Point]) -> Option<Point> {
    let first = *points.first()?;
    let lengths: Vec<f64> = points
        .windows(2)
        .map(|s| (s[1].x - s[0].x).hypot(s[1].y - s[0].y))
        .collect();
    let total: f64 = lengths.iter().sum();
    if total <= 0.0 {
        return Some(first);
    }

    let mut remaining = total / 2.0;
    for (seg, len) in points.windows(2).zip(lengths) {
        if remaining <= len && len > 0.0 {
            let t = remaining / len;
            return Some(Point::new(
                seg[0].x + (seg[1].x - seg[0].x) * t,
                seg[0].y + (seg[1].y - seg[0].y) * t,
            ));
        }
        remaining -= len;
    }
    points.last().copied()
}
