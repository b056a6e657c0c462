use strata::{EdgeLabel, LayoutGraph, NodeLabel, Point, RankDir, Size, coordinate_system};

fn graph() -> LayoutGraph {
    let mut g = LayoutGraph::new();
    g.add_node(
        "a",
        NodeLabel {
            width: 100.0,
            height: 40.0,
            x: 5.0,
            y: 10.0,
            ..Default::default()
        },
    )
    .unwrap();
    g.add_node("b", NodeLabel::default()).unwrap();
    g.add_edge(
        "a",
        "b",
        EdgeLabel {
            label_width: 30.0,
            label_height: 12.0,
            points: vec![Point::new(5.0, 30.0)],
            ..Default::default()
        },
    )
    .unwrap();
    g
}

fn a(g: &LayoutGraph) -> &NodeLabel {
    g.node(g.node_ix("a").unwrap())
}

fn edge(g: &LayoutGraph) -> &EdgeLabel {
    g.edge(g.edge_indices().next().unwrap())
}

#[test]
fn adjust_leaves_vertical_layouts_alone() {
    for rank_dir in [RankDir::TB, RankDir::BT] {
        let mut g = graph();
        coordinate_system::adjust(&mut g, rank_dir);
        assert_eq!((a(&g).width, a(&g).height), (100.0, 40.0));
    }
}

#[test]
fn adjust_swaps_sizes_for_horizontal_layouts() {
    for rank_dir in [RankDir::LR, RankDir::RL] {
        let mut g = graph();
        coordinate_system::adjust(&mut g, rank_dir);
        assert_eq!((a(&g).width, a(&g).height), (40.0, 100.0));
        assert_eq!((edge(&g).label_width, edge(&g).label_height), (12.0, 30.0));
    }
}

#[test]
fn undo_tb_is_the_identity() {
    let mut g = graph();
    let extent = coordinate_system::undo(&mut g, RankDir::TB, Size::new(50.0, 100.0));
    assert_eq!(extent, Size::new(50.0, 100.0));
    assert_eq!((a(&g).x, a(&g).y), (5.0, 10.0));
}

#[test]
fn undo_bt_mirrors_the_rank_axis() {
    let mut g = graph();
    let extent = coordinate_system::undo(&mut g, RankDir::BT, Size::new(50.0, 100.0));
    assert_eq!(extent, Size::new(50.0, 100.0));
    assert_eq!((a(&g).x, a(&g).y), (5.0, 90.0));
    assert_eq!(edge(&g).points, vec![Point::new(5.0, 70.0)]);
}

#[test]
fn undo_lr_transposes_geometry_and_sizes() {
    let mut g = graph();
    coordinate_system::adjust(&mut g, RankDir::LR);
    let extent = coordinate_system::undo(&mut g, RankDir::LR, Size::new(50.0, 100.0));
    assert_eq!(extent, Size::new(100.0, 50.0));
    assert_eq!((a(&g).x, a(&g).y), (10.0, 5.0));
    assert_eq!((a(&g).width, a(&g).height), (100.0, 40.0));
    assert_eq!(edge(&g).points, vec![Point::new(30.0, 5.0)]);
}

#[test]
fn undo_rl_mirrors_then_transposes() {
    let mut g = graph();
    coordinate_system::adjust(&mut g, RankDir::RL);
    let extent = coordinate_system::undo(&mut g, RankDir::RL, Size::new(50.0, 100.0));
    assert_eq!(extent, Size::new(100.0, 50.0));
    assert_eq!((a(&g).x, a(&g).y), (90.0, 5.0));
}

#[test]
fn translate_shifts_every_point() {
    let mut g = graph();
    coordinate_system::translate(&mut g, 10.0, 20.0);
    assert_eq!((a(&g).x, a(&g).y), (15.0, 30.0));
    assert_eq!(edge(&g).points, vec![Point::new(15.0, 50.0)]);
}
