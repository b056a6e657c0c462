use crate::LayoutGraph;
use crate::graphlib::NodeIx;

/// Crossings between every pair of edges in `layering`.
///
/// Edges joining adjacent ranks are counted exactly, layer pair by layer pair. An edge that
/// skips ranks is drawn as one straight segment, so its position at each rank it passes is
/// interpolated from its endpoints' relative positions `(order + 0.5) / layer_len`; two
/// edges cross when their positions swap over the ranks both span.
pub fn cross_count(g: &LayoutGraph, layering: &[Vec<NodeIx>]) -> usize {
    let adjacent: usize = layering
        .windows(2)
        .map(|pair| two_layer_cross_count(g, &pair[0], &pair[1]))
        .sum();
    adjacent + long_edge_cross_count(g, layering)
}

/// An edge seen from its upper endpoint down to its lower one.
#[derive(Debug, Clone, Copy)]
struct Span {
    top: usize,
    bottom: usize,
    top_pos: f64,
    bottom_pos: f64,
}

impl Span {
    fn is_long(&self) -> bool {
        self.bottom - self.top > 1
    }

    fn at(&self, rank: usize) -> f64 {
        if rank == self.top {
            return self.top_pos;
        }
        if rank == self.bottom {
            return self.bottom_pos;
        }
        let t = (rank - self.top) as f64 / (self.bottom - self.top) as f64;
        self.top_pos + (self.bottom_pos - self.top_pos) * t
    }
}

/// Pairs where at least one edge skips a rank. Pairs of adjacent-rank edges are left to
/// [`two_layer_cross_count`].
fn long_edge_cross_count(g: &LayoutGraph, layering: &[Vec<NodeIx>]) -> usize {
    let mut position = vec![0.0_f64; g.node_count()];
    for layer in layering {
        super::set_positions(layer, &mut position);
    }

    let spans: Vec<Span> = g
        .edge_indices()
        .filter_map(|e| {
            let (v, w) = g.endpoints(e);
            let (rv, rw) = (g.node(v).rank, g.node(w).rank);
            if rv == rw {
                return None;
            }
            let (u, l) = if rv < rw { (v, w) } else { (w, v) };
            Some(Span {
                top: rv.min(rw),
                bottom: rv.max(rw),
                top_pos: position[u.index()],
                bottom_pos: position[l.index()],
            })
        })
        .collect();

    let mut cc: usize = 0;
    for (i, a) in spans.iter().enumerate() {
        if !a.is_long() {
            continue;
        }
        for (j, b) in spans.iter().enumerate() {
            // Long/long pairs are visited from both sides; count them once.
            if j == i || (b.is_long() && j < i) {
                continue;
            }
            let (lo, hi) = (a.top.max(b.top), a.bottom.min(b.bottom));
            if lo >= hi {
                continue;
            }
            let d_lo = a.at(lo) - b.at(lo);
            let d_hi = a.at(hi) - b.at(hi);
            if d_lo * d_hi < 0.0 {
                cc += 1;
            }
        }
    }
    cc
}

/// Bilayer count with an accumulator tree (Barth, Jünger & Mutzel).
fn two_layer_cross_count(g: &LayoutGraph, north: &[NodeIx], south: &[NodeIx]) -> usize {
    if south.is_empty() {
        return 0;
    }

    let mut south_pos: Vec<Option<usize>> = vec![None; g.node_count()];
    for (i, v) in south.iter().enumerate() {
        south_pos[v.index()] = Some(i);
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let start = south_entries.len();
        south_entries.extend(g.successors(v).filter_map(|w| south_pos[w.index()]));
        south_entries[start..].sort_unstable();
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }
    cc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeLabel;

    fn graph(edges: &[(&str, &str)], ranks: &[(&str, usize)]) -> LayoutGraph {
        let mut g = LayoutGraph::new();
        for &(id, rank) in ranks {
            g.add_node(id, NodeLabel {
                rank,
                ..Default::default()
            })
            .unwrap();
        }
        for &(v, w) in edges {
            g.add_edge(v, w, Default::default()).unwrap();
        }
        g
    }

    fn layer(g: &LayoutGraph, ids: &[&str]) -> Vec<NodeIx> {
        ids.iter().map(|id| g.node_ix(id).unwrap()).collect()
    }

    #[test]
    fn cross_count_is_zero_without_crossings() {
        let g = graph(
            &[("a1", "b1"), ("a2", "b2")],
            &[("a1", 0), ("a2", 0), ("b1", 1), ("b2", 1)],
        );
        let layering = vec![layer(&g, &["a1", "a2"]), layer(&g, &["b1", "b2"])];
        assert_eq!(cross_count(&g, &layering), 0);
    }

    #[test]
    fn cross_count_counts_a_single_crossing() {
        let g = graph(
            &[("a1", "b1"), ("a2", "b2")],
            &[("a1", 0), ("a2", 0), ("b1", 1), ("b2", 1)],
        );
        let layering = vec![layer(&g, &["a1", "a2"]), layer(&g, &["b2", "b1"])];
        assert_eq!(cross_count(&g, &layering), 1);
    }

    #[test]
    fn cross_count_sums_over_layers() {
        let g = graph(
            &[("a1", "b1"), ("b1", "c1"), ("a2", "b2"), ("b2", "c2")],
            &[
                ("a1", 0),
                ("a2", 0),
                ("b1", 1),
                ("b2", 1),
                ("c1", 2),
                ("c2", 2),
            ],
        );
        let layering = vec![
            layer(&g, &["a1", "a2"]),
            layer(&g, &["b2", "b1"]),
            layer(&g, &["c1", "c2"]),
        ];
        assert_eq!(cross_count(&g, &layering), 2);
    }

    #[test]
    fn cross_count_counts_edges_that_skip_a_layer() {
        let g = graph(
            &[("a1", "c2"), ("a2", "c1"), ("a1", "b1")],
            &[("a1", 0), ("a2", 0), ("b1", 1), ("c1", 2), ("c2", 2)],
        );
        let crossed = vec![
            layer(&g, &["a1", "a2"]),
            layer(&g, &["b1"]),
            layer(&g, &["c1", "c2"]),
        ];
        assert_eq!(cross_count(&g, &crossed), 1);

        let uncrossed = vec![
            layer(&g, &["a1", "a2"]),
            layer(&g, &["b1"]),
            layer(&g, &["c2", "c1"]),
        ];
        assert_eq!(cross_count(&g, &uncrossed), 0);
    }

    #[test]
    fn cross_count_compares_long_and_short_edges_where_they_overlap() {
        // a1 -> c1 passes rank 1 at 0.375, so a2 -> b1 crosses it when b1 sits left of that.
        let g = graph(
            &[("a1", "c1"), ("a2", "b1")],
            &[("a1", 0), ("a2", 0), ("b1", 1), ("b2", 1), ("c1", 2)],
        );
        let apart = vec![
            layer(&g, &["a1", "a2"]),
            layer(&g, &["b2", "b1"]),
            layer(&g, &["c1"]),
        ];
        assert_eq!(cross_count(&g, &apart), 0);

        let crossed = vec![
            layer(&g, &["a1", "a2"]),
            layer(&g, &["b1", "b2"]),
            layer(&g, &["c1"]),
        ];
        assert_eq!(cross_count(&g, &crossed), 1);
    }

    #[test]
    fn cross_count_ignores_edges_sharing_an_endpoint() {
        let g = graph(
            &[("a1", "c1"), ("a1", "b1"), ("b1", "c1")],
            &[("a1", 0), ("b1", 1), ("c1", 2)],
        );
        let layering = vec![layer(&g, &["a1"]), layer(&g, &["b1"]), layer(&g, &["c1"])];
        assert_eq!(cross_count(&g, &layering), 0);
    }
}
