use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::{Acyclicer, Edge, Graph, LayoutConfig, LayoutGraph, Node, build_graph, layout, order};

#[derive(Debug, Clone)]
struct GraphSpec {
    node_ids: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    fn build(&self) -> Graph {
        let nodes = self.node_ids.iter().map(|id| Node::new(id.clone(), ()));
        let edges = self
            .edges
            .iter()
            .map(|&(from, to)| Edge::new(self.node_ids[from].clone(), self.node_ids[to].clone()));
        build_graph(nodes, edges).expect("generated graphs are valid")
    }

    fn build_ranked(&self) -> LayoutGraph {
        let mut g = LayoutGraph::with_capacity(self.node_ids.len(), self.edges.len());
        for id in &self.node_ids {
            g.ensure_node(id);
        }
        for &(from, to) in &self.edges {
            if from == to {
                continue;
            }
            g.add_edge(&self.node_ids[from], &self.node_ids[to], Default::default())
                .expect("generated edges reference known nodes");
        }
        strata::acyclic::run(&mut g, Acyclicer::Dfs);
        strata::rank::rank(&mut g);
        g
    }
}

fn build_er_spec(name: &str, node_count: usize, fanout: usize) -> GraphSpec {
    let node_ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1));
    }

    for i in 0..node_count {
        // Forward edges, interleaved so the initial order has crossings to remove.
        for k in 2..=(fanout + 1) {
            let to = (i * 7 + k * 3) % node_count;
            if to > i {
                edges.push((i, to));
            }
        }

        // Occasional back-edges and self-loops, as ER diagrams have both.
        if i % 9 == 0 && i > 4 {
            edges.push((i, i - 4));
        }
        if i % 13 == 0 {
            edges.push((i, i));
        }
    }

    GraphSpec { node_ids, edges }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("er_50_f3", 50usize, 3usize),
        ("er_200_f4", 200usize, 4usize),
        ("er_400_f4", 400usize, 4usize),
    ];

    for (name, nodes, fanout) in cases {
        let spec = build_er_spec(name, nodes, fanout);
        let graph = spec.build();
        let config = LayoutConfig::default();

        group.bench_with_input(BenchmarkId::new("layout", name), &graph, |b, graph| {
            b.iter(|| {
                let out = layout(black_box(graph), black_box(&config)).expect("valid graph");
                black_box(out.crossings);
            })
        });

        group.bench_with_input(BenchmarkId::new("order::order", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build_ranked(),
                |mut g| {
                    black_box(order::order(black_box(&mut g), 8));
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
