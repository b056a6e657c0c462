//! Coordinate system adjustment helpers.
//!
//! `position` and `route` assume ranks advance downwards. For left-to-right / right-to-left
//! layouts node and label boxes are transposed before positioning and the geometry is
//! transposed back afterwards; bottom-to-top and right-to-left also mirror the rank axis.

use crate::LayoutGraph;
use crate::config::RankDir;
use crate::model::{Point, Size};

pub fn adjust(g: &mut LayoutGraph, rank_dir: RankDir) {
    if rank_dir.is_horizontal() {
        swap_width_height(g);
    }
}

/// Maps geometry from the top-to-bottom frame into `rank_dir` and returns the mapped extent.
pub fn undo(g: &mut LayoutGraph, rank_dir: RankDir, extent: Size) -> Size {
    if matches!(rank_dir, RankDir::BT | RankDir::RL) {
        let height = extent.height;
        for_each_point(g, |p| p.y = height - p.y);
    }

    if rank_dir.is_horizontal() {
        for_each_point(g, |p| (p.x, p.y) = (p.y, p.x));
        swap_width_height(g);
        return Size::new(extent.height, extent.width);
    }
    extent
}

pub fn translate(g: &mut LayoutGraph, dx: f64, dy: f64) {
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    for_each_point(g, |p| {
        p.x += dx;
        p.y += dy;
    });
}

/// Visits node centres, edge waypoints and self-loop waypoints.
fn for_each_point(g: &mut LayoutGraph, mut f: impl FnMut(&mut Point)) {
    for v in g.node_indices() {
        let n = g.node_mut(v);
        let mut center = Point::new(n.x, n.y);
        f(&mut center);
        (n.x, n.y) = (center.x, center.y);
        for self_loop in &mut n.self_loops {
            self_loop.points.iter_mut().for_each(&mut f);
        }
    }
    for e in g.edge_indices() {
        g.edge_mut(e).points.iter_mut().for_each(&mut f);
    }
}

fn swap_width_height(g: &mut LayoutGraph) {
    for v in g.node_indices() {
        let n = g.node_mut(v);
        (n.width, n.height) = (n.height, n.width);
    }
    for e in g.edge_indices() {
        let lbl = g.edge_mut(e);
        (lbl.label_width, lbl.label_height) = (lbl.label_height, lbl.label_width);
    }
}
