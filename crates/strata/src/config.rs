//! Layout configuration.

use crate::error::ConfigError;
use crate::model::{Size, non_negative};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_SIZE: Size = Size::new(150.0, 50.0);

/// Direction ranks advance in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    /// True when ranks advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, RankDir::LR | RankDir::RL)
    }
}

/// Strategy for choosing the edges reversed to break cycles before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acyclicer {
    /// Depth-first search; every edge closing a cycle on the current path is reversed.
    #[default]
    Dfs,
    /// Eades-Lin-Smyth greedy feedback arc set.
    Greedy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub rank_dir: RankDir,
    /// Gap between neighbouring nodes of the same rank.
    pub node_sep: f64,
    /// Gap between consecutive ranks.
    pub rank_sep: f64,
    /// Gap between parallel edges; also the step between nested self-loops.
    pub edge_sep: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub default_node_size: Size,
    /// Upper bound on crossing-reduction sweeps (one sweep = one down pass + one up pass).
    pub max_sweeps: usize,
    pub acyclicer: Acyclicer,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rank_dir: RankDir::TB,
            node_sep: 50.0,
            rank_sep: 50.0,
            edge_sep: 20.0,
            margin_x: 0.0,
            margin_y: 0.0,
            default_node_size: DEFAULT_NODE_SIZE,
            max_sweeps: 8,
            acyclicer: Acyclicer::Dfs,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = rank_dir;
        self
    }

    pub fn with_node_sep(mut self, node_sep: f64) -> Self {
        self.node_sep = node_sep;
        self
    }

    pub fn with_rank_sep(mut self, rank_sep: f64) -> Self {
        self.rank_sep = rank_sep;
        self
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Copy with every spacing clamped to a finite, non-negative value.
    pub fn sanitized(&self) -> Self {
        Self {
            node_sep: non_negative(self.node_sep),
            rank_sep: non_negative(self.rank_sep),
            edge_sep: non_negative(self.edge_sep),
            margin_x: non_negative(self.margin_x),
            margin_y: non_negative(self.margin_y),
            default_node_size: self.default_node_size.sanitized(),
            ..self.clone()
        }
    }

    /// Distance between nested self-loops. Never zero, so loops stay visible.
    pub(crate) fn loop_step(&self) -> f64 {
        self.edge_sep.max(1.0)
    }
}
