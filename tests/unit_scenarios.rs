// tests/unit_scenarios.rs
//! End-to-end scenarios over the five-edge reference network.

use routegraph_core::{engine, query, BlockSet, Graph, RouteError};

fn network() -> Vec<(&'static str, &'static str, f64)> {
    vec![
        ("A", "B", 1.0),
        ("A", "C", 4.0),
        ("B", "C", 2.0),
        ("B", "D", 5.0),
        ("C", "D", 1.0),
    ]
}

#[test]
fn test_shortest_path_a_d() {
    let g = Graph::build(network(), true).unwrap();
    let r = engine::compute(&g, &BlockSet::new()).unwrap();
    let route = query::reconstruct_path(&r, "A", "D").unwrap().unwrap();
    assert_eq!(route.nodes, vec!["A", "B", "C", "D"]);
    assert_eq!(route.cost, 4.0);
    assert_eq!(query::distance(&r, "A", "D").unwrap(), 4.0);
}

#[test]
fn test_isolated_node_has_no_path() {
    let g = Graph::with_nodes(["E"], network(), true).unwrap();
    let r = engine::compute(&g, &BlockSet::new()).unwrap();
    assert_eq!(query::distance(&r, "A", "E").unwrap(), f64::INFINITY);
    assert!(query::reconstruct_path(&r, "A", "E").unwrap().is_none());
    assert!(query::reconstruct_path(&r, "E", "A").unwrap().is_none());
}

#[test]
fn test_blocking_b_c_detours_through_c() {
    let g = Graph::build(network(), true).unwrap();
    let mut blocked = BlockSet::new();
    blocked.block("B", "C");
    let r = engine::compute(&g, &blocked).unwrap();
    let route = query::reconstruct_path(&r, "A", "D").unwrap().unwrap();
    assert_eq!(route.nodes, vec!["A", "C", "D"]);
    assert_eq!(route.cost, 5.0);
}

#[test]
fn test_blocking_every_way_in() {
    let g = Graph::build(network(), true).unwrap();
    let blocked: BlockSet = vec![("B", "D"), ("C", "D")].into_iter().collect();
    let r = engine::compute(&g, &blocked).unwrap();
    assert!(query::reconstruct_path(&r, "A", "D").unwrap().is_none());
    // The graph itself still has both edges.
    assert_eq!(g.weight("C", "D").unwrap(), Some(1.0));
}

#[test]
fn test_unknown_node_is_reported() {
    let g = Graph::build(network(), true).unwrap();
    let r = engine::compute(&g, &BlockSet::new()).unwrap();
    let err = query::reconstruct_path(&r, "A", "Warehouse-9").unwrap_err();
    assert!(matches!(err, RouteError::UnknownNode(ref l) if l == "Warehouse-9"));
    assert!(matches!(
        query::distance(&r, "Nowhere", "A"),
        Err(RouteError::UnknownNode(_))
    ));
    assert!(matches!(g.node_index("Q"), Err(RouteError::UnknownNode(_))));
}

#[test]
fn test_undirected_block_is_one_way() {
    let g = Graph::build(vec![("A", "B", 2.0)], false).unwrap();
    let blocked: BlockSet = vec![("A", "B")].into_iter().collect();
    let r = engine::compute(&g, &blocked).unwrap();
    assert_eq!(query::distance(&r, "A", "B").unwrap(), f64::INFINITY);
    assert_eq!(query::distance(&r, "B", "A").unwrap(), 2.0);
}

#[test]
fn test_shared_graph_across_threads() {
    let g = std::sync::Arc::new(Graph::build(network(), true).unwrap());
    let handles: Vec<_> = [vec![], vec![("B", "C")], vec![("A", "B")]]
        .into_iter()
        .map(|pairs| {
            let g = std::sync::Arc::clone(&g);
            std::thread::spawn(move || {
                let blocked: BlockSet = pairs.into_iter().collect();
                let r = engine::compute(&g, &blocked).unwrap();
                query::distance(&r, "A", "D").unwrap()
            })
        })
        .collect();
    let costs: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(costs, vec![4.0, 5.0, 5.0]);
}
