//! Graph container APIs used by `strata`.
//!
//! The container is a directed multigraph keyed by string ids. Nodes and edges keep their
//! insertion order, and every traversal in this crate follows that order so layouts built on
//! top of it stay deterministic.

mod graph;

pub use graph::{EdgeIx, Graph, GraphError, NodeIx, alg};
