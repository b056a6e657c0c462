//! Greedy feedback arc set selection (Eades, Lin & Smyth).
//!
//! Used by `acyclic` when `Acyclicer::Greedy` is configured. Sinks are peeled to the back
//! of a vertex sequence, sources to the front, and when neither exists the node with the
//! largest `out - in` degree goes to the front. Edges pointing backwards in the final
//! sequence form the FAS. Parallel edges count once each; self-loops are ignored.

use crate::graphlib::{EdgeIx, Graph, NodeIx};
use std::collections::VecDeque;

pub fn greedy_fas<N, E>(g: &Graph<N, E>) -> Vec<EdgeIx> {
    let n = g.node_count();
    if n <= 1 {
        return Vec::new();
    }

    let mut w = Work {
        alive: vec![true; n],
        in_deg: vec![0; n],
        out_deg: vec![0; n],
        sinks: VecDeque::new(),
        sources: VecDeque::new(),
    };
    for e in g.edge_indices() {
        let (v, t) = g.endpoints(e);
        if v == t {
            continue;
        }
        w.out_deg[v.index()] += 1;
        w.in_deg[t.index()] += 1;
    }
    for v in g.node_indices() {
        if w.out_deg[v.index()] == 0 {
            w.sinks.push_back(v);
        } else if w.in_deg[v.index()] == 0 {
            w.sources.push_back(v);
        }
    }

    let mut front: Vec<NodeIx> = Vec::with_capacity(n);
    let mut back: Vec<NodeIx> = Vec::new();
    let mut remaining = n;

    while remaining > 0 {
        if let Some(v) = w.sinks.pop_front() {
            if w.remove(g, v) {
                back.push(v);
                remaining -= 1;
            }
            continue;
        }
        if let Some(v) = w.sources.pop_front() {
            if w.remove(g, v) {
                front.push(v);
                remaining -= 1;
            }
            continue;
        }

        let Some(v) = g
            .node_indices()
            .filter(|v| w.alive[v.index()])
            .max_by_key(|v| {
                let delta = w.out_deg[v.index()] as i64 - w.in_deg[v.index()] as i64;
                (delta, std::cmp::Reverse(v.index()))
            })
        else {
            break;
        };
        w.remove(g, v);
        front.push(v);
        remaining -= 1;
    }

    let mut position = vec![0usize; n];
    for (pos, v) in front.iter().chain(back.iter().rev()).enumerate() {
        position[v.index()] = pos;
    }

    g.edge_indices()
        .filter(|&e| {
            let (v, t) = g.endpoints(e);
            v != t && position[v.index()] > position[t.index()]
        })
        .collect()
}

struct Work {
    alive: Vec<bool>,
    in_deg: Vec<usize>,
    out_deg: Vec<usize>,
    sinks: VecDeque<NodeIx>,
    sources: VecDeque<NodeIx>,
}

impl Work {
    /// Removes `v` and queues neighbours that became sinks or sources. Returns false when
    /// `v` was already gone (stale queue entry).
    fn remove<N, E>(&mut self, g: &Graph<N, E>, v: NodeIx) -> bool {
        if !self.alive[v.index()] {
            return false;
        }
        self.alive[v.index()] = false;

        for e in g.out_edges(v) {
            let (_, t) = g.endpoints(e);
            if t == v || !self.alive[t.index()] {
                continue;
            }
            self.in_deg[t.index()] -= 1;
            if self.in_deg[t.index()] == 0 && self.out_deg[t.index()] > 0 {
                self.sources.push_back(t);
            }
        }
        for e in g.in_edges(v) {
            let (u, _) = g.endpoints(e);
            if u == v || !self.alive[u.index()] {
                continue;
            }
            self.out_deg[u.index()] -= 1;
            if self.out_deg[u.index()] == 0 {
                self.sinks.push_back(u);
            }
        }
        true
    }
}
