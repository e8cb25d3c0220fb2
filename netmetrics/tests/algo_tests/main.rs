mod centrality;
mod metrics;
mod motifs;

use netmetrics::{graph_loader::source::adj_loader::load_adj_from_str, prelude::*};

pub(crate) fn adj_graph(data: &str) -> Graph {
    load_adj_from_str(data).unwrap()
}
