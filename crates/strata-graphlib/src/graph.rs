//! Graph container APIs used by `strata`.
//!
//! This module contains the core `Graph` container plus a small set of helper algorithms
//! re-exported as `strata_graphlib::alg`.

use rustc_hash::FxBuildHasher;

pub mod alg;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Adjacency lists hold edge positions in ascending order.
#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
    out_edges: Vec<usize>,
    in_edges: Vec<usize>,
}

/// `v_ix -> w_ix` in the edge's current direction.
#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    v_ix: usize,
    w_ix: usize,
    label: E,
}

/// Stable handle to a node. Handles are dense and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle to an edge. Handles are dense and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIx(usize);

impl EdgeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("unknown node id: {id}")]
    UnknownNode { id: String },

    #[error("graph contains a cycle")]
    Cycle,
}

/// Directed multigraph with insertion-ordered nodes and edges.
///
/// Parallel edges and self-loops are allowed. Adjacency lists are kept sorted by edge
/// insertion order, including after [`Graph::reverse_edge`].
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,
    edges: Vec<EdgeEntry<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut node_index = HashMap::default();
        node_index.reserve(nodes);
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index,
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, id: impl Into<String>, label: N) -> Result<NodeIx, GraphError> {
        let id = id.into();
        if self.node_index.contains_key(id.as_str()) {
            return Err(GraphError::DuplicateNode { id });
        }
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(NodeEntry {
            id,
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        });
        Ok(NodeIx(idx))
    }

    /// Returns the existing node with `id`, or inserts one with a default label.
    pub fn ensure_node(&mut self, id: &str) -> NodeIx
    where
        N: Default,
    {
        match self.node_index.get(id) {
            Some(&idx) => NodeIx(idx),
            None => {
                let idx = self.nodes.len();
                self.node_index.insert(id.to_string(), idx);
                self.nodes.push(NodeEntry {
                    id: id.to_string(),
                    label: N::default(),
                    out_edges: Vec::new(),
                    in_edges: Vec::new(),
                });
                NodeIx(idx)
            }
        }
    }

    pub fn add_edge(&mut self, v: &str, w: &str, label: E) -> Result<EdgeIx, GraphError> {
        let v_ix = self.require(v)?;
        let w_ix = self.require(w)?;
        Ok(self.add_edge_ix(v_ix, w_ix, label))
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Panics if either handle does not belong to this graph.
    pub fn add_edge_ix(&mut self, v: NodeIx, w: NodeIx, label: E) -> EdgeIx {
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            v_ix: v.0,
            w_ix: w.0,
            label,
        });
        self.nodes[v.0].out_edges.push(idx);
        self.nodes[w.0].in_edges.push(idx);
        EdgeIx(idx)
    }

    /// Chains `ids` with default-labelled edges, creating missing nodes on the way.
    pub fn set_path(&mut self, ids: &[&str]) -> &mut Self
    where
        N: Default,
        E: Default,
    {
        for pair in ids.windows(2) {
            let v = self.ensure_node(pair[0]);
            let w = self.ensure_node(pair[1]);
            self.add_edge_ix(v, w, E::default());
        }
        self
    }

    fn require(&self, id: &str) -> Result<NodeIx, GraphError> {
        self.node_ix(id).ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied().map(NodeIx)
    }

    pub fn node_id(&self, v: NodeIx) -> &str {
        &self.nodes[v.0].id
    }

    pub fn node(&self, v: NodeIx) -> &N {
        &self.nodes[v.0].label
    }

    pub fn node_mut(&mut self, v: NodeIx) -> &mut N {
        &mut self.nodes[v.0].label
    }

    pub fn edge(&self, e: EdgeIx) -> &E {
        &self.edges[e.0].label
    }

    pub fn edge_mut(&mut self, e: EdgeIx) -> &mut E {
        &mut self.edges[e.0].label
    }

    /// `(source, target)` of `e` in its current direction.
    pub fn endpoints(&self, e: EdgeIx) -> (NodeIx, NodeIx) {
        let entry = &self.edges[e.0];
        (NodeIx(entry.v_ix), NodeIx(entry.w_ix))
    }

    pub fn is_self_loop(&self, e: EdgeIx) -> bool {
        let entry = &self.edges[e.0];
        entry.v_ix == entry.w_ix
    }

    pub fn node_indices(&self) -> impl ExactSizeIterator<Item = NodeIx> + use<N, E> {
        (0..self.nodes.len()).map(NodeIx)
    }

    pub fn edge_indices(&self) -> impl ExactSizeIterator<Item = EdgeIx> + use<N, E> {
        (0..self.edges.len()).map(EdgeIx)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIx, &str, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, n)| (NodeIx(idx), n.id.as_str(), &n.label))
    }

    pub fn out_edges(&self, v: NodeIx) -> impl ExactSizeIterator<Item = EdgeIx> + '_ {
        self.nodes[v.0].out_edges.iter().map(|&e| EdgeIx(e))
    }

    pub fn in_edges(&self, v: NodeIx) -> impl ExactSizeIterator<Item = EdgeIx> + '_ {
        self.nodes[v.0].in_edges.iter().map(|&e| EdgeIx(e))
    }

    /// Targets of `v`'s out-edges, one entry per edge (parallel edges repeat).
    pub fn successors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.nodes[v.0]
            .out_edges
            .iter()
            .map(|&e| NodeIx(self.edges[e].w_ix))
    }

    /// Sources of `v`'s in-edges, one entry per edge (parallel edges repeat).
    pub fn predecessors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.nodes[v.0]
            .in_edges
            .iter()
            .map(|&e| NodeIx(self.edges[e].v_ix))
    }

    pub fn out_degree(&self, v: NodeIx) -> usize {
        self.nodes[v.0].out_edges.len()
    }

    pub fn in_degree(&self, v: NodeIx) -> usize {
        self.nodes[v.0].in_edges.len()
    }

    /// Nodes with no in-edges, in insertion order.
    pub fn sources(&self) -> Vec<NodeIx> {
        self.node_indices()
            .filter(|&v| self.in_degree(v) == 0)
            .collect()
    }

    /// Flips the direction of `e`. Self-loops are left untouched.
    pub fn reverse_edge(&mut self, e: EdgeIx) {
        let (v_ix, w_ix) = {
            let entry = &self.edges[e.0];
            (entry.v_ix, entry.w_ix)
        };
        if v_ix == w_ix {
            return;
        }

        self.nodes[v_ix].out_edges.retain(|&x| x != e.0);
        self.nodes[w_ix].in_edges.retain(|&x| x != e.0);
        insert_sorted(&mut self.nodes[w_ix].out_edges, e.0);
        insert_sorted(&mut self.nodes[v_ix].in_edges, e.0);

        let entry = &mut self.edges[e.0];
        (entry.v_ix, entry.w_ix) = (w_ix, v_ix);
    }
}

fn insert_sorted(list: &mut Vec<usize>, value: usize) {
    let pos = list.binary_search(&value).unwrap_or_else(|pos| pos);
    list.insert(pos, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_edge_keeps_adjacency_in_insertion_order() {
        let mut g: Graph<(), ()> = Graph::new();
        g.set_path(&["a", "b"]);
        g.set_path(&["b", "a"]);
        g.set_path(&["b", "c"]);
        let a = g.node_ix("a").unwrap();
        let b = g.node_ix("b").unwrap();

        g.reverse_edge(EdgeIx(0));

        assert_eq!(g.endpoints(EdgeIx(0)), (b, a));
        let out_b: Vec<usize> = g.out_edges(b).map(EdgeIx::index).collect();
        assert_eq!(out_b, vec![0, 1, 2]);
        let in_a: Vec<usize> = g.in_edges(a).map(EdgeIx::index).collect();
        assert_eq!(in_a, vec![0, 1]);
        assert_eq!(g.out_degree(a), 0);
    }

    #[test]
    fn reverse_edge_ignores_self_loops() {
        let mut g: Graph<(), ()> = Graph::new();
        g.set_path(&["a", "a"]);
        let a = g.node_ix("a").unwrap();
        g.reverse_edge(EdgeIx(0));
        assert_eq!(g.endpoints(EdgeIx(0)), (a, a));
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.in_degree(a), 1);
    }
}
