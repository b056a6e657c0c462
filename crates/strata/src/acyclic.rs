//! Break cycles by reversing a feedback arc set (FAS).
//!
//! Reversal only affects ranking. [`undo`] restores every edge to its input direction once
//! routes are computed, flipping the route so it still runs from source to target.

use crate::LayoutGraph;
use crate::config::Acyclicer;
use crate::graphlib::{EdgeIx, Graph, NodeIx};

/// Reverses the chosen back-edges in place and returns them in edge order.
pub fn run(g: &mut LayoutGraph, acyclicer: Acyclicer) -> Vec<EdgeIx> {
    let fas = match acyclicer {
        Acyclicer::Dfs => dfs_fas(g),
        Acyclicer::Greedy => crate::greedy_fas::greedy_fas(g),
    };

    for &e in &fas {
        g.reverse_edge(e);
        g.edge_mut(e).reversed = true;
    }

    tracing::debug!(?acyclicer, reversed = fas.len(), "acyclic: cycles broken");
    fas
}

pub fn undo(g: &mut LayoutGraph) {
    for e in g.edge_indices() {
        if !g.edge(e).reversed {
            continue;
        }
        g.reverse_edge(e);
        let label = g.edge_mut(e);
        label.reversed = false;
        label.points.reverse();
    }
}

/// Depth-first feedback arc set.
///
/// Roots are tried in node insertion order and out-edges in edge insertion order. An edge
/// reaching a node still on the DFS path is a back-edge. Self-loops are never selected.
pub fn dfs_fas<N, E>(g: &Graph<N, E>) -> Vec<EdgeIx> {
    struct Frame {
        v: NodeIx,
        out: Vec<EdgeIx>,
        next: usize,
    }

    let n = g.node_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    let mut fas: Vec<EdgeIx> = Vec::new();

    for root in g.node_indices() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        on_stack[root.index()] = true;
        let mut stack = vec![Frame {
            v: root,
            out: g.out_edges(root).collect(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let v = frame.v;
            let Some(&e) = frame.out.get(frame.next) else {
                on_stack[v.index()] = false;
                stack.pop();
                continue;
            };
            frame.next += 1;

            let (_, w) = g.endpoints(e);
            if w == v {
                continue;
            }
            if on_stack[w.index()] {
                fas.push(e);
            } else if !visited[w.index()] {
                visited[w.index()] = true;
                on_stack[w.index()] = true;
                stack.push(Frame {
                    v: w,
                    out: g.out_edges(w).collect(),
                    next: 0,
                });
            }
        }
    }

    fas.sort();
    fas
}
