//! Geometry primitives and the working labels carried through the layout phases.
//!
//! The phases operate on a [`LayoutGraph`](crate::LayoutGraph): a graphlib graph whose node
//! and edge labels collect rank, order, coordinates and routes as the pipeline advances.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replaces non-finite or negative dimensions with 0.
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }
}

pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    pub order: usize,
    /// Center coordinates.
    pub x: f64,
    pub y: f64,
    pub self_loops: Vec<SelfLoop>,
}

/// A self-loop edge held on its node while the rest of the graph is laid out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelfLoop {
    /// Index of the edge in the caller's edge list.
    pub edge: usize,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeLabel {
    /// Index of the edge in the caller's edge list.
    pub edge: usize,
    pub label_width: f64,
    pub label_height: f64,
    pub reversed: bool,
    pub points: Vec<Point>,
}
