use crate::{
    algorithms::metrics::degree::{average_degree, degree_distribution, max_degree_nodes},
    db::{node_state::NodeState, node_subgraph::NodeSubgraph},
};
use itertools::Itertools;
use std::io::{self, Write};

/// One `<node_id> <score>` line per node in ascending id order. Scores use the
/// shortest representation that round-trips.
pub fn write_closeness<W: Write>(out: &mut W, scores: &NodeState<f64>) -> io::Result<()> {
    for (v, score) in scores.iter() {
        writeln!(out, "{} {:?}", v, score)?;
    }
    Ok(())
}

pub fn write_rectangle_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "{}", count)
}

/// Size of the network, then the degree statistics of `filtered` when given
/// (with its size) or of the whole network otherwise:
///
/// ```text
/// nodes <n>
/// edges <m>
/// filtered_nodes <n>
/// filtered_edges <m>
/// average_degree <a>
/// max_degree <d>
/// max_degree_nodes <id> <id> ...
/// <degree> <frequency>
/// ```
///
/// Node ids are written as the original ids of the dataset.
pub fn write_degree_report<W: Write>(
    out: &mut W,
    network: &NodeSubgraph,
    filtered: Option<&NodeSubgraph>,
) -> io::Result<()> {
    writeln!(out, "nodes {}", network.graph().count_nodes())?;
    writeln!(out, "edges {}", network.graph().count_edges())?;
    if let Some(filtered) = filtered {
        writeln!(out, "filtered_nodes {}", filtered.graph().count_nodes())?;
        writeln!(out, "filtered_edges {}", filtered.graph().count_edges())?;
    }

    let analysed = filtered.unwrap_or(network);
    let graph = analysed.graph();
    let summary = max_degree_nodes(graph);
    writeln!(out, "average_degree {:?}", average_degree(graph))?;
    writeln!(out, "max_degree {}", summary.max_degree)?;
    writeln!(
        out,
        "max_degree_nodes {}",
        summary
            .nodes_with_max_degree
            .iter()
            .filter_map(|v| analysed.original_id(*v))
            .join(" ")
    )?;
    for (degree, frequency) in degree_distribution(graph) {
        writeln!(out, "{} {}", degree, frequency)?;
    }
    Ok(())
}
