use crate::adj_graph;
use netmetrics::algorithms::motifs::rectangle_count::rectangle_count;

#[test]
fn test_rectangles_bare_cycle() {
    let graph = adj_graph("4,4\n0,1,1\n1,2,1\n2,3,1\n3,0,1\n");
    // the square is found from both diagonals and counted once
    assert_eq!(rectangle_count(&graph), 1);
}

#[test]
fn test_rectangles_complete_bipartite() {
    let graph = adj_graph("4,4\n0,2,1\n0,3,1\n1,2,1\n1,3,1\n");
    assert_eq!(rectangle_count(&graph), 1);
}

#[test]
fn test_rectangles_grid() {
    // 2 x 3 grid
    // 0 - 1 - 2
    // |   |   |
    // 3 - 4 - 5
    let graph = adj_graph("6,7\n0,1,1\n1,2,1\n3,4,1\n4,5,1\n0,3,1\n1,4,1\n2,5,1\n");
    assert_eq!(rectangle_count(&graph), 2);
}

#[test]
fn test_rectangles_empty_graph() {
    assert_eq!(rectangle_count(&adj_graph("0,0\n")), 0);
}
