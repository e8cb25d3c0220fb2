use crate::adj_graph;
use netmetrics::{
    algorithms::metrics::degree::{count_nodes_with_degree, max_degree_nodes},
    prelude::*,
};
use pretty_assertions::assert_eq;

#[test]
fn test_degree_after_dropping_multiples_of_three() {
    // 0 is the hub; dropping 0, 3 and 6 leaves 1-2, 4-5 and 2-4
    let graph = adj_graph(
        "7,9\n0,1,1\n0,2,1\n0,3,1\n0,4,1\n1,2,1\n2,4,1\n4,5,1\n5,6,1\n3,6,1\n",
    );
    assert_eq!(max_degree_nodes(&graph).nodes_with_max_degree, vec![VID(0)]);

    let sub = graph.filter_nodes(|v| v.index() % 3 != 0);
    assert_eq!(sub.graph().count_nodes(), 4);
    assert_eq!(sub.graph().count_edges(), 3);

    let summary = max_degree_nodes(sub.graph());
    let original: Vec<_> = summary
        .nodes_with_max_degree
        .iter()
        .filter_map(|v| sub.original_id(*v))
        .collect();
    assert_eq!(summary.max_degree, 2);
    assert_eq!(original, vec![VID(2), VID(4)]);
    assert_eq!(count_nodes_with_degree(sub.graph(), 1), 2);
}
