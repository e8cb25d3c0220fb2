//! Degree statistics of an undirected graph.
//!
//! The degree of a node is its number of distinct neighbours; parallel edges and
//! self loops do not count.

use crate::{core::VID, db::graph::Graph};
use std::collections::BTreeMap;

/// The highest degree in a graph and every node attaining it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DegreeSummary {
    pub max_degree: usize,
    /// Ascending node ids.
    pub nodes_with_max_degree: Vec<VID>,
}

/// Finds the maximum degree and the nodes that have it. An empty graph has
/// maximum degree `0` and no such nodes.
pub fn max_degree_nodes(graph: &Graph) -> DegreeSummary {
    let max_degree = match graph.nodes().map(|v| graph.degree(v)).max() {
        None => return DegreeSummary::default(),
        Some(d) => d,
    };
    let nodes_with_max_degree = graph
        .nodes()
        .filter(|v| graph.degree(*v) == max_degree)
        .collect();
    DegreeSummary {
        max_degree,
        nodes_with_max_degree,
    }
}

pub fn count_nodes_with_degree(graph: &Graph, degree: usize) -> usize {
    graph.nodes().filter(|v| graph.degree(*v) == degree).count()
}

/// Maps each degree that occurs in the graph to the number of nodes with that degree.
pub fn degree_distribution(graph: &Graph) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for v in graph.nodes() {
        *distribution.entry(graph.degree(v)).or_insert(0) += 1;
    }
    distribution
}

pub fn average_degree(graph: &Graph) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }
    let total: usize = graph.nodes().map(|v| graph.degree(v)).sum();
    total as f64 / graph.count_nodes() as f64
}

#[cfg(test)]
mod degree_test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn star_with_tail() -> Graph {
        // hub 0 with leaves 1..=4, tail 4 - 5
        Graph::from_edges(6, [(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1), (4, 5, 1)]).unwrap()
    }

    #[test]
    fn finds_the_hub() {
        let summary = max_degree_nodes(&star_with_tail());
        assert_eq!(
            summary,
            DegreeSummary {
                max_degree: 4,
                nodes_with_max_degree: vec![VID(0)]
            }
        );
    }

    #[test]
    fn ties_are_all_reported() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let summary = max_degree_nodes(&graph);
        assert_eq!(summary.max_degree, 1);
        assert_eq!(
            summary.nodes_with_max_degree,
            vec![VID(0), VID(1), VID(2), VID(3)]
        );
    }

    #[test]
    fn counts_by_degree() {
        let graph = star_with_tail();
        assert_eq!(count_nodes_with_degree(&graph, 1), 4);
        assert_eq!(count_nodes_with_degree(&graph, 2), 1);
        assert_eq!(count_nodes_with_degree(&graph, 7), 0);
        assert_eq!(
            degree_distribution(&graph),
            BTreeMap::from([(1, 4), (2, 1), (4, 1)])
        );
        assert_eq!(average_degree(&graph), 10.0 / 6.0);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new(0);
        assert_eq!(max_degree_nodes(&graph), DegreeSummary::default());
        assert!(degree_distribution(&graph).is_empty());
        assert_eq!(average_degree(&graph), 0.0);
    }
}
