use crate::LayoutGraph;
use crate::graphlib::NodeIx;

/// Groups nodes by rank, keeping node insertion order inside each rank.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<NodeIx>> {
    let Some(max_rank) = g.node_indices().map(|v| g.node(v).rank).max() else {
        return Vec::new();
    };

    let mut layers: Vec<Vec<NodeIx>> = vec![Vec::new(); max_rank + 1];
    for v in g.node_indices() {
        layers[g.node(v).rank].push(v);
    }
    layers
}
