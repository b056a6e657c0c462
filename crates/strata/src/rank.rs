//! Rank assignment.
//!
//! Longest path from the sources: every source sits on rank 0 and every other node one rank
//! below its deepest predecessor. The graph is expected to be acyclic once self-loops are
//! ignored (see `acyclic`).

use crate::LayoutGraph;
use crate::graphlib::{Graph, NodeIx, alg};

/// Writes `rank` on every node label and returns the number of ranks.
pub fn rank(g: &mut LayoutGraph) -> usize {
    let ranks = longest_path(g);
    let mut max_rank: Option<usize> = None;
    for v in g.node_indices() {
        let r = ranks[v.index()];
        g.node_mut(v).rank = r;
        max_rank = Some(max_rank.map_or(r, |m| m.max(r)));
    }
    let layers = max_rank.map_or(0, |m| m + 1);
    tracing::debug!(layers, "rank: assigned");
    layers
}

/// Rank per node, indexed by node position.
pub fn longest_path<N, E>(g: &Graph<N, E>) -> Vec<usize> {
    let order: Vec<NodeIx> = match alg::topsort(g) {
        Ok(order) => order,
        Err(_) => {
            // Only reachable when a caller skips `acyclic::run`.
            tracing::warn!("rank: graph is cyclic; relaxing edges in insertion order");
            g.node_indices().collect()
        }
    };

    let mut ranks = vec![0usize; g.node_count()];
    for v in order {
        let next = ranks[v.index()] + 1;
        for w in g.successors(v) {
            if w == v {
                continue;
            }
            let slot = &mut ranks[w.index()];
            *slot = (*slot).max(next);
        }
    }
    ranks
}
