use strata::{EdgeLabel, LayoutConfig, LayoutGraph, NodeLabel, SelfLoop, Size, position};

fn node(width: f64, height: f64, rank: usize, order: usize) -> NodeLabel {
    NodeLabel {
        width,
        height,
        rank,
        order,
        ..Default::default()
    }
}

fn center(g: &LayoutGraph, id: &str) -> (f64, f64) {
    let n = g.node(g.node_ix(id).unwrap());
    (n.x, n.y)
}

#[test]
fn position_of_an_empty_graph_has_no_extent() {
    let mut g = LayoutGraph::new();
    assert_eq!(
        position::position(&mut g, &LayoutConfig::default()),
        Size::default()
    );
}

#[test]
fn position_places_a_single_node_at_the_origin() {
    let mut g = LayoutGraph::new();
    g.add_node("a", node(50.0, 100.0, 0, 0)).unwrap();

    let extent = position::position(&mut g, &LayoutConfig::default());
    assert_eq!(center(&g, "a"), (25.0, 50.0));
    assert_eq!(extent, Size::new(50.0, 100.0));
}

#[test]
fn position_separates_nodes_in_a_rank_by_node_sep() {
    let mut g = LayoutGraph::new();
    g.add_node("a", node(50.0, 100.0, 0, 0)).unwrap();
    g.add_node("b", node(75.0, 200.0, 0, 1)).unwrap();

    let config = LayoutConfig::default().with_node_sep(200.0);
    let extent = position::position(&mut g, &config);

    assert_eq!(center(&g, "a"), (25.0, 100.0));
    assert_eq!(center(&g, "b"), (50.0 + 200.0 + 75.0 / 2.0, 100.0));
    assert_eq!(extent, Size::new(325.0, 200.0));
}

#[test]
fn position_follows_order_not_insertion() {
    let mut g = LayoutGraph::new();
    g.add_node("a", node(50.0, 50.0, 0, 1)).unwrap();
    g.add_node("b", node(50.0, 50.0, 0, 0)).unwrap();

    position::position(&mut g, &LayoutConfig::default());
    assert!(center(&g, "b").0 < center(&g, "a").0);
}

#[test]
fn position_separates_ranks_by_rank_sep_and_centres_narrow_ranks() {
    let mut g = LayoutGraph::new();
    g.add_node("a", node(50.0, 100.0, 0, 0)).unwrap();
    g.add_node("b", node(75.0, 200.0, 1, 0)).unwrap();
    g.add_edge("a", "b", EdgeLabel::default()).unwrap();

    let config = LayoutConfig::default().with_rank_sep(300.0);
    let extent = position::position(&mut g, &config);

    assert_eq!(center(&g, "a"), (75.0 / 2.0, 50.0));
    assert_eq!(center(&g, "b"), (75.0 / 2.0, 100.0 + 300.0 + 100.0));
    assert_eq!(extent, Size::new(75.0, 600.0));
}

#[test]
fn position_widens_the_rank_gap_for_edge_labels() {
    let mut g = LayoutGraph::new();
    g.add_node("a", node(50.0, 100.0, 0, 0)).unwrap();
    g.add_node("b", node(50.0, 200.0, 1, 0)).unwrap();
    g.add_edge(
        "a",
        "b",
        EdgeLabel {
            label_width: 40.0,
            label_height: 30.0,
            ..Default::default()
        },
    )
    .unwrap();

    let config = LayoutConfig::default().with_rank_sep(300.0);
    position::position(&mut g, &config);
    assert_eq!(center(&g, "b").1, 100.0 + 300.0 + 30.0 + 100.0);
}

#[test]
fn position_reserves_room_for_self_loops() {
    let mut g = LayoutGraph::new();
    let mut a = node(50.0, 50.0, 0, 0);
    a.self_loops.push(SelfLoop::default());
    g.add_node("a", a).unwrap();
    g.add_node("b", node(50.0, 50.0, 0, 1)).unwrap();

    let extent = position::position(&mut g, &LayoutConfig::default());

    // edge_sep defaults to 20, node_sep to 50.
    assert_eq!(center(&g, "a").0, 25.0);
    assert_eq!(center(&g, "b").0, 50.0 + 20.0 + 50.0 + 25.0);
    assert_eq!(extent.width, 170.0);
}

#[test]
fn position_keeps_nodes_of_a_rank_from_overlapping() {
    let mut g = LayoutGraph::new();
    let widths = [10.0, 200.0, 35.0, 90.0];
    for (i, w) in widths.iter().enumerate() {
        g.add_node(format!("n{i}"), node(*w, 20.0, 0, i)).unwrap();
    }
    let config = LayoutConfig::default().with_node_sep(0.0);
    position::position(&mut g, &config);

    let layer = position::build_layer_matrix(&g);
    for pair in layer[0].windows(2) {
        let (l, r) = (g.node(pair[0]), g.node(pair[1]));
        assert!(l.x + l.width / 2.0 <= r.x - r.width / 2.0);
    }
}
