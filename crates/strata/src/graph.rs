//! Caller-facing graph model: entities, relationships, and validated construction.

use crate::error::{Result, ValidationError};
use crate::graphlib;
use crate::model::Size;
use serde::{Deserialize, Serialize};

/// An entity to place. `payload` is carried through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<P = ()> {
    pub id: String,
    pub payload: P,
    /// Intrinsic box size. `None` falls back to `LayoutConfig::default_node_size`.
    pub size: Option<Size>,
}

impl<P> Node<P> {
    pub fn new(id: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
            size: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }
}

/// Rendering flags. Layout passes them through without interpreting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub animated: bool,
    pub directed: bool,
}

/// A directed relationship between two entities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    /// Room the renderer needs for the label; widens the gap between the ranks it joins.
    pub label_size: Option<Size>,
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_size(mut self, width: f64, height: f64) -> Self {
        self.label_size = Some(Size::new(width, height));
        self
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A validated, immutable graph. Node and edge order is the caller's insertion order.
#[derive(Debug, Clone)]
pub struct Graph<P = ()> {
    inner: graphlib::Graph<Node<P>, Edge>,
}

impl<P> Graph<P> {
    /// Same as [`build_graph`].
    pub fn new(
        nodes: impl IntoIterator<Item = Node<P>>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        build_graph(nodes, edges)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node<P>> {
        self.inner.node_ix(id).map(|v| self.inner.node(v))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> {
        self.inner.nodes().map(|(_, _, n)| n)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner.edge_indices().map(|e| self.inner.edge(e))
    }

    pub(crate) fn inner(&self) -> &graphlib::Graph<Node<P>, Edge> {
        &self.inner
    }
}

/// Validates and assembles a graph.
///
/// Node ids are checked first, then edges in input order; the first problem found is
/// reported. Self-loops and parallel edges are accepted.
pub fn build_graph<P>(
    nodes: impl IntoIterator<Item = Node<P>>,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<Graph<P>> {
    let mut inner: graphlib::Graph<Node<P>, Edge> = graphlib::Graph::new();

    for node in nodes {
        let id = node.id.clone();
        if let Err(graphlib::GraphError::DuplicateNode { id }) = inner.add_node(id, node) {
            return Err(ValidationError::DuplicateNode { id });
        }
    }

    for (idx, edge) in edges.into_iter().enumerate() {
        let unknown = |id: &str| ValidationError::UnknownNode {
            edge: idx,
            id: id.to_string(),
        };
        let v = inner
            .node_ix(&edge.source)
            .ok_or_else(|| unknown(&edge.source))?;
        let w = inner
            .node_ix(&edge.target)
            .ok_or_else(|| unknown(&edge.target))?;
        inner.add_edge_ix(v, w, edge);
    }

    Ok(Graph { inner })
}
