//! Node ordering / crossing minimization.
//!
//! Layers start in first-seen order and are then improved by alternating median sweeps:
//! down (each rank against lower-ranked neighbours) and up (against higher-ranked
//! neighbours). The ordering with the fewest crossings wins, counting edges that skip ranks
//! too (see [`cross_count`]); ties keep the earlier one. At most `max_sweeps` sweeps run,
//! and only a sweep that moves nothing stops early.

mod cross_count;
mod init_order;
mod median;

pub use cross_count::cross_count;
pub use init_order::init_order;
pub use median::weighted_median;

use crate::LayoutGraph;
use crate::graphlib::NodeIx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Down,
    Up,
}

/// Writes `order` on every node label and returns the crossing count of the chosen layering.
pub fn order(g: &mut LayoutGraph, max_sweeps: usize) -> usize {
    let mut layering = init_order(g);
    let initial_cc = cross_count(g, &layering);
    let mut best_cc = initial_cc;
    let mut best = layering.clone();

    let mut sweeps: usize = 0;
    while sweeps < max_sweeps {
        sweeps += 1;
        let moved_down = sweep(g, &mut layering, Sweep::Down);
        let moved_up = sweep(g, &mut layering, Sweep::Up);

        let cc = cross_count(g, &layering);
        if cc < best_cc {
            best_cc = cc;
            best = layering.clone();
        }
        if !moved_down && !moved_up {
            break;
        }
    }

    assign_order(g, &best);
    tracing::debug!(
        sweeps,
        crossings_before = initial_cc,
        crossings = best_cc,
        "order: layers arranged"
    );
    best_cc
}

pub fn assign_order(g: &mut LayoutGraph, layering: &[Vec<NodeIx>]) {
    for layer in layering {
        for (i, &v) in layer.iter().enumerate() {
            g.node_mut(v).order = i;
        }
    }
}

/// One pass over the free layers in `direction`. Returns true when any layer changed.
///
/// A node's key is the weighted median of its fixed-side neighbours' relative positions,
/// `(order + 0.5) / layer_len`, so neighbours reached by long edges compare on the same scale.
/// Nodes without such neighbours keep their current relative position. The re-sort is
/// stable: equal keys keep the previous order.
pub fn sweep(g: &LayoutGraph, layering: &mut [Vec<NodeIx>], direction: Sweep) -> bool {
    let mut position = vec![0.0_f64; g.node_count()];
    for layer in layering.iter() {
        set_positions(layer, &mut position);
    }

    let ranks: Vec<usize> = match direction {
        Sweep::Down => (1..layering.len()).collect(),
        Sweep::Up => (0..layering.len().saturating_sub(1)).rev().collect(),
    };

    let mut moved = false;
    let mut neighbours: Vec<f64> = Vec::new();
    for r in ranks {
        let layer = &mut layering[r];
        let mut keyed: Vec<(f64, NodeIx)> = Vec::with_capacity(layer.len());
        for &v in layer.iter() {
            neighbours.clear();
            let rank = g.node(v).rank;
            match direction {
                Sweep::Down => neighbours.extend(
                    g.predecessors(v)
                        .filter(|u| g.node(*u).rank < rank)
                        .map(|u| position[u.index()]),
                ),
                Sweep::Up => neighbours.extend(
                    g.successors(v)
                        .filter(|w| g.node(*w).rank > rank)
                        .map(|w| position[w.index()]),
                ),
            }
            neighbours.sort_by(f64::total_cmp);
            let key = weighted_median(&neighbours).unwrap_or(position[v.index()]);
            keyed.push((key, v));
        }

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        let next: Vec<NodeIx> = keyed.into_iter().map(|(_, v)| v).collect();
        if next != *layer {
            moved = true;
            *layer = next;
            set_positions(layer, &mut position);
        }
    }
    moved
}

fn set_positions(layer: &[NodeIx], position: &mut [f64]) {
    let len = layer.len() as f64;
    for (i, v) in layer.iter().enumerate() {
        position[v.index()] = (i as f64 + 0.5) / len;
    }
}
