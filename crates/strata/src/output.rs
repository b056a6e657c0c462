//! Layout results handed back to the renderer.

use crate::graph::EdgeStyle;
use crate::model::{Point, Rect};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode<P> {
    pub id: String,
    pub payload: P,
    /// Center coordinates.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    /// Position within the rank, starting at 0.
    pub order: usize,
}

impl<P> PositionedNode<P> {
    pub fn top_left(&self) -> Point {
        Point::new(self.x - self.width / 2.0, self.y - self.height / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        let tl = self.top_left();
        Rect {
            x: tl.x,
            y: tl.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedEdge {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    pub style: EdgeStyle,
    /// Waypoints from source to target; always at least two.
    pub points: Vec<Point>,
    /// Midpoint of the route, present for labelled edges.
    pub label_pos: Option<Point>,
    /// The edge was flipped to break a cycle while ranking. `points` still run from source
    /// to target.
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout<P> {
    /// One entry per input node, in input order.
    pub nodes: Vec<PositionedNode<P>>,
    /// One entry per input edge, in input order.
    pub edges: Vec<RoutedEdge>,
    /// Drawing extent including margins.
    pub width: f64,
    pub height: f64,
    /// Edge crossings in the chosen ordering, edges that span several ranks included.
    ///
    /// Computed on rank order, not on final coordinates: an edge that skips ranks is placed
    /// at each rank it passes by interpolating its endpoints' relative positions. Self-loops
    /// never count. Treat it as a quality measure of the ordering, not a geometric count of
    /// intersecting routes.
    pub crossings: usize,
}

impl<P> Layout<P> {
    pub fn node(&self, id: &str) -> Option<&PositionedNode<P>> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
