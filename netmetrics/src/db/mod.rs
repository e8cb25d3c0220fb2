pub mod graph;
pub mod node_state;
pub mod node_subgraph;
