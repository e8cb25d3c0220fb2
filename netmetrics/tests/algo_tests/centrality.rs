use crate::adj_graph;
use netmetrics::{
    algorithms::centrality::closeness_centrality::closeness_centrality,
    io::report::write_closeness, prelude::*,
};
use pretty_assertions::assert_eq;

#[test]
fn test_closeness_single_edge() {
    let graph = adj_graph("2,1\n0,1,1\n");
    assert_eq!(closeness_centrality(&graph).into_values(), vec![1.0, 1.0]);
}

#[test]
fn test_closeness_disconnected_pair() {
    let graph = adj_graph("3,1\n0,1,1\n");
    assert_eq!(closeness_centrality(&graph).into_values(), vec![0.5, 0.5, 0.0]);
}

#[test]
fn test_closeness_two_components() {
    // triangle 0-1-2 and pair 3-4
    let graph = adj_graph("5,4\n0,1,1\n1,2,1\n2,0,1\n3,4,1\n");
    let scores = closeness_centrality(&graph);
    for v in 0..3 {
        // reaches 2 nodes at distance 1: (2 / 2) * (2 / 4)
        assert_eq!(scores[VID(v)], 0.5);
    }
    for v in 3..5 {
        // (1 / 1) * (1 / 4)
        assert_eq!(scores[VID(v)], 0.25);
    }
}

#[test]
fn test_closeness_empty_graph() {
    let graph = adj_graph("0,0\n");
    let scores = closeness_centrality(&graph);
    assert!(scores.is_empty());

    let mut out = Vec::<u8>::new();
    write_closeness(&mut out, &scores).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_closeness_report() {
    let graph = adj_graph("4,3\n0,1,3\n1,2,1\n2,3,8\n");
    let mut out = Vec::<u8>::new();
    write_closeness(&mut out, &closeness_centrality(&graph)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 0.5\n1 0.75\n2 0.75\n3 0.5\n"
    );
}
