use proptest::prelude::*;

/// A node count up to `max_nodes` together with up to `max_edges` weighted edges
/// between nodes of that graph.
pub fn build_edge_list(
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, u64)>)> {
    (0..=max_nodes).prop_flat_map(move |num_nodes| {
        let edges = if num_nodes == 0 {
            Just(vec![]).boxed()
        } else {
            proptest::collection::vec((0..num_nodes, 0..num_nodes, 1u64..10), 0..=max_edges)
                .boxed()
        };
        (Just(num_nodes), edges)
    })
}
