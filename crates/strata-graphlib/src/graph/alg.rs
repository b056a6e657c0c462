//! Helper algorithms over [`Graph`](super::Graph).

use super::{Graph, GraphError, NodeIx};
use std::collections::VecDeque;

/// Kahn topological sort.
///
/// The queue is seeded with sources in insertion order and successors are released in edge
/// insertion order, so the result is deterministic. Any cycle (self-loops included) yields
/// [`GraphError::Cycle`].
pub fn topsort<N, E>(g: &Graph<N, E>) -> Result<Vec<NodeIx>, GraphError> {
    let mut indegree: Vec<usize> = g.node_indices().map(|v| g.in_degree(v)).collect();
    let mut queue: VecDeque<NodeIx> = g.node_indices().filter(|v| indegree[v.0] == 0).collect();

    let mut out: Vec<NodeIx> = Vec::with_capacity(g.node_count());
    while let Some(v) = queue.pop_front() {
        out.push(v);
        for w in g.successors(v) {
            let d = &mut indegree[w.0];
            *d -= 1;
            if *d == 0 {
                queue.push_back(w);
            }
        }
    }

    if out.len() != g.node_count() {
        return Err(GraphError::Cycle);
    }
    Ok(out)
}

pub fn is_acyclic<N, E>(g: &Graph<N, E>) -> bool {
    topsort(g).is_ok()
}

/// Strongly connected components that form cycles: components with more than one node, or a
/// single node with a self-loop. Node ids are reported in discovery order.
pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>> {
    struct Tarjan<'a, N, E> {
        g: &'a Graph<N, E>,
        index: usize,
        stack: Vec<NodeIx>,
        on_stack: Vec<bool>,
        indices: Vec<Option<usize>>,
        lowlink: Vec<usize>,
        out: Vec<Vec<String>>,
    }

    impl<N, E> Tarjan<'_, N, E> {
        fn strong_connect(&mut self, v: NodeIx) {
            self.indices[v.0] = Some(self.index);
            self.lowlink[v.0] = self.index;
            self.index += 1;
            self.stack.push(v);
            self.on_stack[v.0] = true;

            let successors: Vec<NodeIx> = self.g.successors(v).collect();
            for w in successors {
                match self.indices[w.0] {
                    None => {
                        self.strong_connect(w);
                        self.lowlink[v.0] = self.lowlink[v.0].min(self.lowlink[w.0]);
                    }
                    Some(w_index) if self.on_stack[w.0] => {
                        self.lowlink[v.0] = self.lowlink[v.0].min(w_index);
                    }
                    Some(_) => {}
                }
            }

            if Some(self.lowlink[v.0]) != self.indices[v.0] {
                return;
            }

            let mut component: Vec<NodeIx> = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w.0] = false;
                component.push(w);
                if w == v {
                    break;
                }
            }
            component.reverse();

            let cyclic = component.len() > 1 || self.g.successors(v).any(|w| w == v);
            if cyclic {
                self.out
                    .push(component.iter().map(|&w| self.g.node_id(w).to_string()).collect());
            }
        }
    }

    let n = g.node_count();
    let mut t = Tarjan {
        g,
        index: 0,
        stack: Vec::new(),
        on_stack: vec![false; n],
        indices: vec![None; n],
        lowlink: vec![0; n],
        out: Vec::new(),
    };
    for v in g.node_indices() {
        if t.indices[v.0].is_none() {
            t.strong_connect(v);
        }
    }
    t.out
}
